use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use chrono::Duration;
use vacsched_api_structs::get_upcoming_reminders::*;
use vacsched_domain::{EffectiveStatus, Reminder, ID, UPCOMING_WINDOW_DAYS};
use vacsched_infra::VacschedContext;

pub async fn get_upcoming_reminders_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetUpcomingRemindersUseCase {
        user_id: path_params.user_id.clone(),
        days: query_params.days.unwrap_or(UPCOMING_WINDOW_DAYS),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(VacschedError::from)
}

/// Reminders still ahead of the user within the next `days` days, soonest
/// first.
#[derive(Debug)]
pub struct GetUpcomingRemindersUseCase {
    pub user_id: ID,
    pub days: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    InvalidWindow(i64),
}

impl From<UseCaseError> for VacschedError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::InvalidWindow(days) => Self::BadClientData(format!(
                "The number of days to look ahead must be non-negative, got: {}",
                days
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUpcomingRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUpcomingReminders";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        if self.days < 0 {
            return Err(UseCaseError::InvalidWindow(self.days));
        }

        let now = ctx.sys.get_datetime();
        let today = now.date();
        let horizon = today + Duration::days(self.days);

        let mut reminders = ctx
            .repos
            .reminders
            .find_by_user_in_range(&self.user_id, today, horizon)
            .await;
        reminders.retain(|r| {
            matches!(
                r.effective_status(now),
                EffectiveStatus::Pending | EffectiveStatus::DueToday
            )
        });
        reminders.sort_by_key(|r| r.scheduled_at());
        Ok(reminders)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;
    use vacsched_domain::{
        NotificationSettings, Priority, ReminderCategory, ReminderStatus,
    };
    use vacsched_infra::{setup_context, FakeSys};

    fn reminder(user_id: &ID, scheduled_date: NaiveDate, status: ReminderStatus) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: user_id.clone(),
            name: "Hepatitis A".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date,
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            priority: Priority::Medium,
            status,
            recurrence: None,
            notifications: NotificationSettings::default(),
            government_mandated: false,
            linked_schedule_id: None,
            dispatched: Vec::new(),
            created: 0,
            updated: 0,
            completed_at: None,
            version: 0,
        }
    }

    #[actix_web::main]
    #[test]
    async fn lists_pending_reminders_within_the_window() {
        let mut ctx = setup_context();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        ctx.sys = Arc::new(FakeSys { now });

        let user_id = ID::new();
        let in_window = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 6, 20).unwrap(),
            ReminderStatus::Pending,
        );
        let beyond = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            ReminderStatus::Pending,
        );
        let overdue = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            ReminderStatus::Pending,
        );
        let completed = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            ReminderStatus::Completed,
        );
        for r in [&in_window, &beyond, &overdue, &completed] {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let mut usecase = GetUpcomingRemindersUseCase {
            user_id: user_id.clone(),
            days: 30,
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, in_window.id);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_negative_window() {
        let ctx = setup_context();
        let mut usecase = GetUpcomingRemindersUseCase {
            user_id: ID::new(),
            days: -1,
        };
        assert_eq!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::InvalidWindow(-1))
        );
    }
}
