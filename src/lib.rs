//! Scrapes live and recent cricket scores from Cricbuzz and serves them as JSON.
//!
//! The library half ([`CricbuzzClient`], [`extract_matches`], [`extract_detail`]) is usable
//! on its own; [`run`] wires it into an actix-web server.

use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

pub mod client;
pub mod config;
pub mod error;
mod handlers;
pub mod model;
mod routes;
pub(crate) mod scraper;
pub mod telemetry;

pub use client::{CricbuzzClient, DEFAULT_BASE_URL};
pub use error::{CricketError, Result};
pub use model::*;
pub use crate::scraper::match_detail::extract_detail;
pub use crate::scraper::matchlist::{collect_candidates, extract_matches, Extraction, Strategy};

use crate::routes::init_routes;

/// Build the HTTP server on an already bound `listener`.
pub fn run(listener: TcpListener, client: CricbuzzClient) -> std::io::Result<Server> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let client = web::Data::new(client);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(client.clone())
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
