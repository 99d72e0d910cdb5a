mod get_government_schedules;
mod refresh_government_schedules;
mod sync_government_schedules;

use actix_web::web;
use get_government_schedules::get_government_schedules_controller;
use refresh_government_schedules::refresh_government_schedules_controller;
use sync_government_schedules::sync_government_schedules_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/schedules",
        web::get().to(get_government_schedules_controller),
    );
    cfg.route(
        "/schedules/feed",
        web::post().to(refresh_government_schedules_controller),
    );
    cfg.route(
        "/users/{user_id}/schedules/sync",
        web::post().to(sync_government_schedules_controller),
    );
}
