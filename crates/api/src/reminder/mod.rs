mod complete_reminder;
mod create_reminder;
mod delete_reminder;
mod get_overdue_reminders;
mod get_reminders;
mod get_upcoming_reminders;
pub mod subscribers;
mod update_reminder;

use actix_web::web;
use complete_reminder::complete_reminder_controller;
use create_reminder::create_reminder_controller;
use delete_reminder::delete_reminder_controller;
use get_overdue_reminders::get_overdue_reminders_controller;
use get_reminders::get_reminders_controller;
use get_upcoming_reminders::get_upcoming_reminders_controller;
use update_reminder::update_reminder_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/users/{user_id}/reminders",
        web::post().to(create_reminder_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders",
        web::get().to(get_reminders_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders/upcoming",
        web::get().to(get_upcoming_reminders_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders/overdue",
        web::get().to(get_overdue_reminders_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders/{reminder_id}",
        web::put().to(update_reminder_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders/{reminder_id}/complete",
        web::post().to(complete_reminder_controller),
    );
    cfg.route(
        "/users/{user_id}/reminders/{reminder_id}",
        web::delete().to(delete_reminder_controller),
    );
}
