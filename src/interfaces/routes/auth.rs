use actix_web::web;

use crate::handlers::auth;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/login")
            .route(web::post().to(auth::login))
    )
    .service(
        web::resource("/token/refresh")
            .route(web::post().to(auth::refresh_token))
    );
}
