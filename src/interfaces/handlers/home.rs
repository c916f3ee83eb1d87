use actix_web::{HttpResponse, Responder};

pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Welcome to the DevTeam API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/users", "/login", "/token/refresh", "/profiles", "/skillsets", "/projects", "/teams", "/health"]
    }))
}
