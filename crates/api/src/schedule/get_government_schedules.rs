use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::get_government_schedules::*;
use vacsched_domain::GovernmentVaccineSchedule;
use vacsched_infra::VacschedContext;

pub async fn get_government_schedules_controller(
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetGovernmentSchedulesUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|schedules| HttpResponse::Ok().json(APIResponse::new(schedules)))
        .map_err(|_| VacschedError::InternalError)
}

#[derive(Debug)]
pub struct GetGovernmentSchedulesUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetGovernmentSchedulesUseCase {
    type Response = Vec<GovernmentVaccineSchedule>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetGovernmentSchedules";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        Ok(ctx.repos.schedules.all().await)
    }
}
