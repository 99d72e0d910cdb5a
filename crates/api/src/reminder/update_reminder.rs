use super::subscribers::SyncDispatchesOnReminderUpdated;
use crate::error::VacschedError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use vacsched_api_structs::update_reminder::*;
use vacsched_domain::{
    NotificationSettings, Priority, Recurrence, Reminder, ReminderStatus, ID,
};
use vacsched_infra::{SaveReminderError, VacschedContext};

pub async fn update_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        user_id: path_params.user_id.clone(),
        reminder_id: path_params.reminder_id.clone(),
        name: body.name,
        description: body.description,
        scheduled_date: body.scheduled_date,
        scheduled_time: body.scheduled_time,
        priority: body.priority,
        status: body.status,
        recurrence: body.recurrence,
        notifications: body.notifications,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(VacschedError::from)
}

#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub user_id: ID,
    pub reminder_id: ID,
    pub name: Option<String>,
    pub description: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
    pub priority: Option<Priority>,
    pub status: Option<ReminderStatus>,
    pub recurrence: Option<Recurrence>,
    pub notifications: Option<NotificationSettings>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    EmptyName,
    InvalidRecurrenceRule,
    InvalidNotificationSettings,
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
            UseCaseError::EmptyName => Self::BadClientData("A reminder must have a name".into()),
            UseCaseError::InvalidRecurrenceRule => {
                Self::BadClientData("Invalid recurrence rule specified for the reminder".into())
            }
            UseCaseError::InvalidNotificationSettings => Self::BadClientData(
                "Advance notice offsets must be non-negative day counts".into(),
            ),
            UseCaseError::Conflict(reminder_id) => Self::Conflict(format!(
                "The reminder with id: {} was modified concurrently, retry the update.",
                reminder_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let mut reminder = match ctx.repos.reminders.find(&self.reminder_id).await {
            Some(r) if r.user_id == self.user_id => r,
            _ => return Err(UseCaseError::NotFound(self.reminder_id.clone())),
        };

        // Edits that move the scheduled instant or touch the notification
        // configuration invalidate every not-yet-fired dispatch, which for
        // computed dispatches means resetting the fired markers.
        let mut dispatches_invalidated = false;

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(UseCaseError::EmptyName);
            }
            reminder.name = name.clone();
        }
        if let Some(description) = &self.description {
            reminder.description = description.clone();
        }
        if let Some(scheduled_date) = self.scheduled_date {
            if scheduled_date != reminder.scheduled_date {
                dispatches_invalidated = true;
            }
            reminder.scheduled_date = scheduled_date;
        }
        if let Some(scheduled_time) = self.scheduled_time {
            if scheduled_time != reminder.scheduled_time {
                dispatches_invalidated = true;
            }
            reminder.scheduled_time = scheduled_time;
        }
        if let Some(priority) = self.priority {
            reminder.priority = priority;
        }
        if let Some(recurrence) = self.recurrence {
            if !recurrence.is_valid() {
                return Err(UseCaseError::InvalidRecurrenceRule);
            }
            reminder.recurrence = Some(recurrence);
        }
        if let Some(notifications) = &self.notifications {
            if !notifications.is_valid() {
                return Err(UseCaseError::InvalidNotificationSettings);
            }
            if *notifications != reminder.notifications {
                dispatches_invalidated = true;
            }
            reminder.notifications = notifications.clone();
        }
        if let Some(status) = self.status {
            // Completion never happens implicitly here, but an explicit
            // status edit may set or revert it
            if status != reminder.status {
                match status {
                    ReminderStatus::Completed => {
                        reminder.completed_at = Some(ctx.sys.get_timestamp_millis());
                    }
                    _ => {
                        reminder.completed_at = None;
                    }
                }
                reminder.status = status;
            }
        }

        if dispatches_invalidated {
            reminder.dispatched.clear();
        }
        reminder.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .reminders
            .save(&reminder)
            .await
            .map_err(|e| match e {
                SaveReminderError::NotFound(id) => UseCaseError::NotFound(id),
                SaveReminderError::VersionConflict(id) => UseCaseError::Conflict(id),
            })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncDispatchesOnReminderUpdated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use vacsched_domain::{Channel, DispatchKey, ReminderCategory};
    use vacsched_infra::setup_context;

    fn stored_reminder(ctx: &VacschedContext) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: Default::default(),
            name: "Tetanus booster".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            priority: Priority::Medium,
            status: ReminderStatus::Pending,
            recurrence: None,
            notifications: NotificationSettings {
                channels: vec![Channel::Push],
                advance_notice_days: vec![7],
            },
            government_mandated: false,
            linked_schedule_id: None,
            dispatched: vec![DispatchKey {
                channel: Channel::Push,
                offset_days: 7,
            }],
            created: 0,
            updated: 0,
            completed_at: None,
            version: 0,
        }
    }

    fn patch(reminder: &Reminder) -> UpdateReminderUseCase {
        UpdateReminderUseCase {
            user_id: reminder.user_id.clone(),
            reminder_id: reminder.id.clone(),
            name: None,
            description: None,
            scheduled_date: None,
            scheduled_time: None,
            priority: None,
            status: None,
            recurrence: None,
            notifications: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_reminder() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        let mut usecase = patch(&reminder);

        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(reminder.id))
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_foreign_user() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = UpdateReminderUseCase {
            user_id: ID::new(),
            ..patch(&reminder)
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::NotFound(_))
        ));
    }

    #[actix_web::main]
    #[test]
    async fn moving_the_date_resets_fired_markers() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = UpdateReminderUseCase {
            scheduled_date: NaiveDate::from_ymd_opt(2024, 7, 15),
            ..patch(&reminder)
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert!(updated.dispatched.is_empty());
        assert_eq!(updated.version, 1);
    }

    #[actix_web::main]
    #[test]
    async fn cosmetic_edits_keep_fired_markers() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut usecase = UpdateReminderUseCase {
            name: Some("Tdap booster".into()),
            priority: Some(Priority::High),
            ..patch(&reminder)
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.dispatched.len(), 1);
        assert_eq!(updated.name, "Tdap booster");
    }

    #[actix_web::main]
    #[test]
    async fn explicit_status_edit_sets_and_clears_completion() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        let mut complete = UpdateReminderUseCase {
            status: Some(ReminderStatus::Completed),
            ..patch(&reminder)
        };
        let completed = complete.execute(&ctx).await.unwrap();
        assert_eq!(completed.status, ReminderStatus::Completed);
        assert!(completed.completed_at.is_some());

        let mut reopen = UpdateReminderUseCase {
            status: Some(ReminderStatus::Pending),
            ..patch(&completed)
        };
        let reopened = reopen.execute(&ctx).await.unwrap();
        assert_eq!(reopened.status, ReminderStatus::Pending);
        assert!(reopened.completed_at.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn stale_writer_gets_a_conflict() {
        let ctx = setup_context();
        let reminder = stored_reminder(&ctx);
        ctx.repos.reminders.insert(&reminder).await.unwrap();

        // First writer wins and bumps the version
        let mut first = UpdateReminderUseCase {
            priority: Some(Priority::Critical),
            ..patch(&reminder)
        };
        first.execute(&ctx).await.unwrap();

        // A save against the stale snapshot must be rejected
        let res = ctx.repos.reminders.save(&reminder).await;
        assert_eq!(res, Err(SaveReminderError::VersionConflict(reminder.id)));
    }
}
