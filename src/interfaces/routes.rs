use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod auth;
mod json_error;
mod profiles;
mod projects;
mod skill_sets;
mod teams;
mod users;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home));
    cfg.route("/health", web::get().to(health_check));

    cfg.configure(auth::config_routes)
        .configure(users::config_routes)
        .configure(profiles::config_routes)
        .configure(skill_sets::config_routes)
        .configure(projects::config_routes)
        .configure(teams::config_routes);

    cfg.configure(json_error::config_routes);
}
