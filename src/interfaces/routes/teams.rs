use actix_web::web;

use crate::handlers::teams;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/teams")
            .service(
                web::resource("")
                    .route(web::get().to(teams::list_teams))
                    .route(web::post().to(teams::create_team))
            )
            .service(
                web::resource("/{team_id}")
                    .route(web::get().to(teams::get_team))
                    .route(web::put().to(teams::update_team))
                    .route(web::delete().to(teams::delete_team))
            )
    );
}
