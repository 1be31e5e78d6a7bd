use actix_web::HttpResponse;

use crate::client::CricbuzzClient;
use crate::model::{
    sample_record, test_records, ErrorEnvelope, MatchDetailEnvelope, MatchesEnvelope,
};

const SAMPLE_NOTE: &str = "Live scores are temporarily unavailable; showing sample data";

/// Live listing. Never fails: any scrape error degrades to a single sample record.
pub async fn serve_live_matches(client: &CricbuzzClient) -> HttpResponse {
    match client.get_live_matches().await {
        Ok(matches) => HttpResponse::Ok().json(MatchesEnvelope::stamped(matches)),
        Err(e) => {
            tracing::warn!(error = %e, "live scrape failed, serving sample data");
            HttpResponse::Ok().json(MatchesEnvelope::degraded(
                vec![sample_record()],
                SAMPLE_NOTE,
                e,
            ))
        }
    }
}

pub async fn serve_match_detail(client: &CricbuzzClient, match_id: &str) -> HttpResponse {
    match client.get_match(match_id).await {
        Ok(detail) => HttpResponse::Ok().json(MatchDetailEnvelope::new(detail)),
        Err(e) => {
            tracing::error!(error = %e, match_id, "failed to scrape match detail");
            HttpResponse::InternalServerError().json(ErrorEnvelope::new(e))
        }
    }
}

pub async fn serve_recent_matches(client: &CricbuzzClient) -> HttpResponse {
    match client.get_recent_matches().await {
        Ok(matches) => HttpResponse::Ok().json(MatchesEnvelope::new(matches)),
        Err(e) => {
            tracing::error!(error = %e, "failed to scrape recent matches");
            HttpResponse::InternalServerError().json(ErrorEnvelope::new(e))
        }
    }
}

pub async fn serve_test_matches() -> HttpResponse {
    HttpResponse::Ok().json(MatchesEnvelope::new(test_records()))
}
