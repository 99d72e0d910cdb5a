use crate::error::VacschedError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use vacsched_api_structs::get_overdue_reminders::*;
use vacsched_domain::{EffectiveStatus, Reminder, ID};
use vacsched_infra::VacschedContext;

pub async fn get_overdue_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<VacschedContext>,
) -> Result<HttpResponse, VacschedError> {
    let usecase = GetOverdueRemindersUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|_| VacschedError::InternalError)
}

/// Reminders whose scheduled date has passed without a terminal status,
/// oldest first.
#[derive(Debug)]
pub struct GetOverdueRemindersUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOverdueRemindersUseCase {
    type Response = Vec<Reminder>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOverdueReminders";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_datetime();
        let mut reminders = ctx.repos.reminders.find_by_user(&self.user_id).await;
        reminders.retain(|r| r.effective_status(now) == EffectiveStatus::Overdue);
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
            name: "Rabies follow-up".into(),
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
    async fn lists_only_overdue_reminders() {
        let mut ctx = setup_context();
        let now = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        ctx.sys = Arc::new(FakeSys { now });

        let user_id = ID::new();
        let overdue = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            ReminderStatus::Pending,
        );
        let due_today = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            ReminderStatus::Pending,
        );
        // Completed in the past stays completed, not overdue
        let completed = reminder(
            &user_id,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ReminderStatus::Completed,
        );
        for r in [&overdue, &due_today, &completed] {
            ctx.repos.reminders.insert(r).await.unwrap();
        }

        let mut usecase = GetOverdueRemindersUseCase {
            user_id: user_id.clone(),
        };
        let res = usecase.execute(&ctx).await.unwrap();
        assert_eq!(res.len(), 1);
        assert_eq!(res[0].id, overdue.id);
    }
}
