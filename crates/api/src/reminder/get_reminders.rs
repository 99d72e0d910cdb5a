use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::get_reminders::*;
use vacsched_domain::{Reminder, ID};
use vacsched_infra::VacschedContext;

pub async fn get_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetRemindersUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|_| VacschedError::InternalError)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let mut reminders = ctx.repos.reminders.find_by_user(&self.user_id).await;
        reminders.sort_by_key(|r| r.scheduled_at());
        Ok(reminders)
    }
}
