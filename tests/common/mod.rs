#![allow(dead_code)]

use std::net::TcpListener;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use once_cell::sync::Lazy;

use cricket_scores::config::settings::get_config;
use cricket_scores::telemetry::{get_subscriber, init_subscriber};
use cricket_scores::{run, CricbuzzClient};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn get_json(&self, path: &str) -> (reqwest::StatusCode, serde_json::Value) {
        let response = reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status();
        let body = response.text().await.expect("Cannot read response body.");
        let json = serde_json::from_str(&body).expect("Cannot turn into a json.");
        (status, json)
    }
}

/// Start the API on a random port, scraping from `upstream_url`.
pub async fn spawn_app(upstream_url: &str) -> TestApp {
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let configuration = get_config().expect("Failed to read configuration.");
    let client = CricbuzzClient::new(upstream_url, &configuration.upstream.user_agent)
        .expect("Failed to build client");

    let server = run(listener, client).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
    }
}

/// An address nothing listens on.
pub fn unreachable_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

struct Pages {
    listing: String,
    scorecard: String,
}

/// Start a stand-in for the score site serving fixed markup.
///
/// Requests without the configured scraper identity are refused with 403.
pub fn spawn_upstream(listing: &str, scorecard: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let pages = web::Data::new(Pages {
        listing: listing.to_string(),
        scorecard: scorecard.to_string(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(pages.clone())
            .route("/cricket-match/live-scores", web::get().to(listing_page))
            .route("/live-cricket-scores/{match_id}", web::get().to(scorecard_page))
    })
    .listen(listener)
    .expect("Failed to listen")
    .run();
    let _ = tokio::spawn(server);

    format!("http://127.0.0.1:{port}")
}

fn identified(request: &HttpRequest) -> bool {
    request
        .headers()
        .get("user-agent")
        .and_then(|ua| ua.to_str().ok())
        .is_some_and(|ua| ua.contains("cricket-scores"))
}

async fn listing_page(request: HttpRequest, pages: web::Data<Pages>) -> HttpResponse {
    if !identified(&request) {
        return HttpResponse::Forbidden().finish();
    }
    HttpResponse::Ok()
        .content_type("text/html")
        .body(pages.listing.clone())
}

async fn scorecard_page(request: HttpRequest, pages: web::Data<Pages>) -> HttpResponse {
    if !identified(&request) {
        return HttpResponse::Forbidden().finish();
    }
    HttpResponse::Ok()
        .content_type("text/html")
        .body(pages.scorecard.clone())
}

pub fn page(body: &str) -> String {
    format!("<html><head><title>Live Cricket Scores</title></head><body>{body}</body></html>")
}

pub fn anchor(id: &str, text: &str) -> String {
    format!(r#"<a class="cb-lv-scrs-well" href="/live-cricket-scores/{id}/match-slug">{text}</a>"#)
}
