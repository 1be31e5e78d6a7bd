use actix_web::HttpResponse;
use chrono::Utc;

use crate::model::HealthEnvelope;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthEnvelope {
        success: true,
        message: "Cricket API is running".to_string(),
        timestamp: Utc::now(),
    })
}
