use actix_web::web;

use crate::handlers::json_error::handle_json_error;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(handle_json_error));
}
