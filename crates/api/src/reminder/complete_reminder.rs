use super::subscribers::SyncDispatchesOnReminderCompleted;
use crate::error::VacschedError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::complete_reminder::*;
use vacsched_domain::{next_occurrence, Reminder, ReminderStatus, ID};
use vacsched_infra::{SaveReminderError, VacschedContext};

pub async fn complete_reminder_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = CompleteReminderUseCase {
        user_id: path_params.user_id.clone(),
        reminder_id: path_params.reminder_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(VacschedError::from)
}

/// Marks a reminder as done. A recurring reminder is a template with one
/// live instance at a time: completing the live instance inserts the next
/// occurrence as a fresh pending reminder.
#[derive(Debug)]
pub struct CompleteReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    Conflict(ID),
    StorageError,
}

impl From<UseCaseError> for VacschedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(reminder_id) => Self::NotFound(format!(
                "The reminder with id: {}, was not found.",
                reminder_id
            )),
            UseCaseError::Conflict(reminder_id) => Self::Conflict(format!(
                "The reminder with id: {} was modified concurrently, retry the update.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CompleteReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CompleteReminder";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(r) if r.user_id == self.user_id => r,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        if reminder.status == ReminderStatus::Completed {
            return Ok(reminder);
        }

        let now = ctx.sys.get_timestamp_millis();
        reminder.status = ReminderStatus::Completed;
        reminder.completed_at = Some(now);
        reminder.updated = now;

        let completed = ctx
            .repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|e| match e {
                SaveReminderError::NotFound(id) => UseCaseError::NotFound(id),
                SaveReminderError::VersionConflict(id) => UseCaseError::Conflict(id),
            })?;

        if let Some(rule) = completed.recurrence {
            if let Ok(next_date) = next_occurrence(completed.scheduled_date, Some(&rule)) {
                let next_instance = Reminder {
                    id: Default::default(),
                    scheduled_date: next_date,
                    status: ReminderStatus::Pending,
                    dispatched: Vec::new(),
                    created: now,
                    updated: now,
                    completed_at: None,
                    version: 0,
                    ..completed.clone()
                };
                ctx.repos
                    .reminders
                    .insert(&next_instance)
                    .await
                    .map_err(|_| UseCaseError::StorageError)?;
            }
        }

        Ok(completed)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncDispatchesOnReminderCompleted)]
    }
}
