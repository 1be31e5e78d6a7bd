use actix_web::{get, web, Responder};

use crate::client::CricbuzzClient;
use crate::handlers::cricket_handler;

#[get("/live-matches")]
pub async fn live_matches(client: web::Data<CricbuzzClient>) -> impl Responder {
    cricket_handler::serve_live_matches(&client).await
}

#[get("/match/{match_id}")]
pub async fn match_detail(
    client: web::Data<CricbuzzClient>,
    match_id: web::Path<String>,
) -> impl Responder {
    cricket_handler::serve_match_detail(&client, &match_id).await
}

#[get("/recent-matches")]
pub async fn recent_matches(client: web::Data<CricbuzzClient>) -> impl Responder {
    cricket_handler::serve_recent_matches(&client).await
}

#[get("/test")]
pub async fn test_matches() -> impl Responder {
    cricket_handler::serve_test_matches().await
}
