use crate::shared::usecase::UseCase;
use tracing::debug;
use vacsched_domain::{compute_dispatches, NotificationDispatch, Reminder};
use vacsched_infra::VacschedContext;

/// Recomputes the pending dispatch instants of a reminder after a
/// mutation. Dispatches are derived data, so "rescheduling" is a fresh
/// computation against the current field values; instants removed by the
/// edit simply no longer come out of it.
#[derive(Debug)]
pub struct SyncReminderDispatchesUseCase {
    pub reminder: Reminder,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncReminderDispatchesUseCase {
    type Response = Vec<NotificationDispatch>;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncReminderDispatches";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let dispatches = compute_dispatches(&self.reminder, ctx.sys.get_datetime());
        debug!(
            reminder_id = %self.reminder.id,
            pending = dispatches.len(),
            "notification dispatches recomputed"
        );
        Ok(dispatches)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::Arc;
    use vacsched_domain::{
        Channel, NotificationSettings, Priority, ReminderCategory, ReminderStatus,
    };
    use vacsched_infra::{setup_context, FakeSys};

    #[actix_web::main]
    #[test]
    async fn recomputes_future_instants_for_the_given_reminder() {
        let mut ctx = setup_context();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        ctx.sys = Arc::new(FakeSys { now });

        let reminder = Reminder {
            id: Default::default(),
            user_id: Default::default(),
            name: "Typhoid dose".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            priority: Priority::Medium,
            status: ReminderStatus::Pending,
            recurrence: None,
            notifications: NotificationSettings {
                channels: vec![Channel::Push],
                advance_notice_days: vec![30, 7, 1],
            },
            government_mandated: false,
            linked_schedule_id: None,
            dispatched: Vec::new(),
            created: 0,
            updated: 0,
            completed_at: None,
            version: 0,
        };

        let mut usecase = SyncReminderDispatchesUseCase { reminder };
        let dispatches = usecase.execute(&ctx).await.unwrap();

        // The 30-day offset already passed on 2024-05-31
        assert_eq!(dispatches.len(), 2);
    }
}
