use actix_web::web;

use crate::handlers::{auth, users};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("")
                    .route(web::post().to(auth::register))
            )
            .service(
                web::resource("/me")
                    .route(web::get().to(users::me))
            )
    );
}
