use actix_web::web;

use crate::handlers::skill_sets;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skillsets")
            .service(
                web::resource("")
                    .route(web::get().to(skill_sets::list_skill_sets))
                    .route(web::post().to(skill_sets::create_skill_set))
            )
            .service(
                web::resource("/{skill_set_id}")
                    .route(web::get().to(skill_sets::get_skill_set))
                    .route(web::put().to(skill_sets::update_skill_set))
                    .route(web::delete().to(skill_sets::delete_skill_set))
            )
    );
}
