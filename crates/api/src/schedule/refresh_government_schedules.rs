use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::refresh_government_schedules::*;
use vacsched_domain::GovernmentVaccineSchedule;
use vacsched_infra::VacschedContext;

pub async fn refresh_government_schedules_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = RefreshGovernmentSchedulesUseCase {
        entries: body.0.schedules,
    };

    execute(usecase, &ctx)
        .await
        .map(|schedules| HttpResponse::Ok().json(APIResponse::new(schedules)))
        .map_err(VacschedError::from)
}

/// Replaces the government reference data wholesale from the external
/// feed. Ids are minted here; user reminders keep pointing at the ids
/// they were expanded from.
#[derive(Debug)]
pub struct RefreshGovernmentSchedulesUseCase {
    pub entries: Vec<FeedEntry>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for VacschedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for RefreshGovernmentSchedulesUseCase {
    type Response = Vec<GovernmentVaccineSchedule>;

    type Error = UseCaseError;

    const NAME: &'static str = "RefreshGovernmentSchedules";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let schedules: Vec<GovernmentVaccineSchedule> = self
            .entries
            .iter()
            .map(|entry| GovernmentVaccineSchedule {
                id: Default::default(),
                vaccine_name: entry.vaccine_name.clone(),
                age_group: entry.age_group.clone(),
                doses: entry.doses,
                interval_between_doses: entry.interval_between_doses,
                booster_required: entry.booster_required,
                booster_interval_days: entry.booster_interval_days,
                priority: entry.priority,
                source: entry.source.clone(),
                description: entry.description.clone().unwrap_or_default(),
            })
            .collect();

        ctx.repos
            .schedules
            .refresh(schedules.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(schedules)
    }
}
