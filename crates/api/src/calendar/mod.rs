mod get_calendar_view;

use actix_web::web;
use get_calendar_view::get_calendar_view_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/users/{user_id}/calendar",
        web::get().to(get_calendar_view_controller),
    );
}
