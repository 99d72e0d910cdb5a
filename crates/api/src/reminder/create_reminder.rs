use super::subscribers::SyncDispatchesOnReminderCreated;
use crate::error::VacschedError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use chrono::{NaiveDate, NaiveTime};
use vacsched_api_structs::create_reminder::*;
use vacsched_domain::{
    NotificationSettings, Priority, Recurrence, Reminder, ReminderCategory, ReminderStatus, ID,
};
use vacsched_infra::VacschedContext;

pub async fn create_reminder_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        user_id: path_params.user_id.clone(),
        name: body.name,
        description: body.description.unwrap_or_default(),
        scheduled_date: body.scheduled_date,
        scheduled_time: body.scheduled_time,
        priority: body.priority.unwrap_or_default(),
        recurrence: body.recurrence,
        notifications: body.notifications.unwrap_or_default(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(VacschedError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub user_id: ID,
    pub name: String,
    pub description: String,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub priority: Priority,
    pub recurrence: Option<Recurrence>,
    pub notifications: NotificationSettings,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyName,
    InvalidRecurrenceRule,
    InvalidNotificationSettings,
    StorageError,
}

impl From<UseCaseError> for VacschedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyName => Self::BadClientData("A reminder must have a name".into()),
            UseCaseError::InvalidRecurrenceRule => {
                Self::BadClientData("Invalid recurrence rule specified for the reminder".into())
            }
            UseCaseError::InvalidNotificationSettings => Self::BadClientData(
                "Advance notice offsets must be non-negative day counts".into(),
            ),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        if self.name.trim().is_empty() {
            return Err(UseCaseError::EmptyName);
        }
        if let Some(rule) = &self.recurrence {
            if !rule.is_valid() {
                return Err(UseCaseError::InvalidRecurrenceRule);
            }
        }
        if !self.notifications.is_valid() {
            return Err(UseCaseError::InvalidNotificationSettings);
        }

        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder {
            id: Default::default(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: ReminderCategory::Custom,
            scheduled_date: self.scheduled_date,
            scheduled_time: self.scheduled_time,
            priority: self.priority,
            status: ReminderStatus::Pending,
            recurrence: self.recurrence,
            notifications: self.notifications.clone(),
            government_mandated: false,
            linked_schedule_id: None,
            dispatched: Vec::new(),
            created: now,
            updated: now,
            completed_at: None,
            version: 0,
        };

        ctx.repos
            .reminders
            .insert(&reminder)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(reminder)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncDispatchesOnReminderCreated)]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use vacsched_domain::Channel;
    use vacsched_infra::setup_context;

    fn usecase() -> CreateReminderUseCase {
        CreateReminderUseCase {
            user_id: Default::default(),
            name: "MMR second dose".into(),
            description: String::new(),
            scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            priority: Priority::High,
            recurrence: None,
            notifications: NotificationSettings::default(),
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_reminder() {
        let ctx = setup_context();
        let mut usecase = usecase();

        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());

        let reminder = res.unwrap();
        assert_eq!(reminder.status, ReminderStatus::Pending);
        assert!(ctx.repos.reminders.find(&reminder.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_blank_name() {
        let ctx = setup_context();
        let mut usecase = CreateReminderUseCase {
            name: "   ".into(),
            ..usecase()
        };

        assert_eq!(usecase.execute(&ctx).await, Err(UseCaseError::EmptyName));
    }

    #[actix_web::main]
    #[test]
    async fn rejects_negative_advance_notice_offsets() {
        let ctx = setup_context();
        let mut usecase = CreateReminderUseCase {
            notifications: NotificationSettings {
                channels: vec![Channel::Push],
                advance_notice_days: vec![7, -1],
            },
            ..usecase()
        };

        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidNotificationSettings)
        );
    }

    #[actix_web::main]
    #[test]
    async fn rejects_zero_interval_recurrence() {
        let ctx = setup_context();
        let mut usecase = CreateReminderUseCase {
            recurrence: Some(Recurrence {
                interval: 0,
                ..Default::default()
            }),
            ..usecase()
        };

        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidRecurrenceRule)
        );
    }
}
