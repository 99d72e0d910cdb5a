use crate::error::VacschedError;
use crate::notification::sync_reminder_dispatches::SyncReminderDispatchesUseCase;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use tracing::warn;
use vacsched_api_structs::sync_government_schedules::{
    APIResponse, FailedSchedule, PathParams, RequestBody,
};
use vacsched_domain::{Reminder, ID};
use vacsched_infra::VacschedContext;

pub async fn sync_government_schedules_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let body = body.0;
    let usecase = SyncGovernmentSchedulesUseCase {
        user_id: path_params.user_id.clone(),
        schedule_ids: body.schedule_ids,
        reference_date: body.reference_date,
    };

    execute(usecase, &ctx)
        .await
        .map(|synced| {
            let failed = synced
                .failed
                .into_iter()
                .map(|(schedule_id, reason)| FailedSchedule {
                    schedule_id,
                    reason,
                })
                .collect();
            HttpResponse::Created().json(APIResponse::new(synced.created, failed))
        })
        .map_err(|_| VacschedError::InternalError)
}

/// Expands the selected government schedule entries into reminders for a
/// user. Each entry expands independently; a malformed or unknown entry
/// fails alone and is reported back without affecting the rest of the
/// batch. Repeated sync is additive, nothing is de-duplicated against the
/// user's existing reminders.
#[derive(Debug)]
pub struct SyncGovernmentSchedulesUseCase {
    pub user_id: ID,
    pub schedule_ids: Vec<ID>,
    pub reference_date: NaiveDate,
}

pub struct SyncedSchedules {
    pub created: Vec<Reminder>,
    pub failed: Vec<(ID, String)>,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncGovernmentSchedulesUseCase {
    type Response = SyncedSchedules;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncGovernmentSchedules";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_timestamp_millis();
        let mut created = Vec::new();
        let mut failed = Vec::new();

        for schedule_id in &self.schedule_ids {
            let schedule = match ctx.repos.schedules.find(schedule_id).await {
                Some(schedule) => schedule,
                None => {
                    failed.push((schedule_id.clone(), "Schedule not found".to_string()));
                    continue;
                }
            };

            let reminders = match schedule.expand(&self.user_id, self.reference_date, now) {
                Ok(reminders) => reminders,
                Err(e) => {
                    warn!(
                        schedule_id = %schedule_id,
                        "skipping malformed government schedule: {}", e
                    );
                    failed.push((schedule_id.clone(), e.to_string()));
                    continue;
                }
            };

            let mut stored = Vec::with_capacity(reminders.len());
            for reminder in &reminders {
                if let Err(e) = ctx.repos.reminders.insert(reminder).await {
                    failed.push((schedule_id.clone(), e.to_string()));
                    stored.clear();
                    break;
                }
                stored.push(reminder.clone());
            }
            created.append(&mut stored);
        }

        Ok(SyncedSchedules { created, failed })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncDispatchesOnSchedulesSynced)]
    }
}

pub struct SyncDispatchesOnSchedulesSynced;

#[async_trait::async_trait(?Send)]
impl Subscriber<SyncGovernmentSchedulesUseCase> for SyncDispatchesOnSchedulesSynced {
    async fn notify(&self, e: &SyncedSchedules, ctx: &VacschedContext) {
        for reminder in &e.created {
            let sync_dispatches = SyncReminderDispatchesUseCase {
                reminder: reminder.clone(),
            };

            // Sideeffect, ignore result
            let _ = execute(sync_dispatches, ctx).await;
        }
    }
}
