use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::get_reminder_stats::*;
use vacsched_domain::{compute_stats, ReminderStats, ID};
use vacsched_infra::VacschedContext;

pub async fn get_stats_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetStatsUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse::new(stats)))
        .map_err(|_| VacschedError::InternalError)
}

#[derive(Debug)]
pub struct GetStatsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetStatsUseCase {
    type Response = ReminderStats;

    type Error = UseCaseError;

    const NAME: &'static str = "GetStats";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let reminders = ctx.repos.reminders.find_by_user(&self.user_id).await;
        Ok(compute_stats(&reminders, ctx.sys.get_datetime()))
    }
}
