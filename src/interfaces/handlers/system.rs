use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;

use crate::{constants::START_TIME, repositories::user::UserRepository, AppState};

#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: i64,
    pub started_at: String,
    pub database: String,
}

fn build_health_response(database_ok: bool) -> HealthCheckResponse {
    let uptime = Utc::now().signed_duration_since(*START_TIME);

    HealthCheckResponse {
        status: if database_ok { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: uptime.num_seconds().max(0),
        started_at: START_TIME.to_rfc3339(),
        database: if database_ok { "OK" } else { "Unavailable" }.to_string(),
    }
}

pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let database_ok = match state.auth_handler.user_repo.check_connection().await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Health check could not reach the database: {}", e);
            false
        }
    };

    HttpResponse::Ok().json(build_health_response(database_ok))
}
