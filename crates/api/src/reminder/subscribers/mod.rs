use super::{
    complete_reminder::CompleteReminderUseCase, create_reminder::CreateReminderUseCase,
    delete_reminder::DeleteReminderUseCase, update_reminder::UpdateReminderUseCase,
};
use crate::notification::sync_reminder_dispatches::SyncReminderDispatchesUseCase;
use crate::shared::usecase::{execute, Subscriber};
use tracing::info;
use vacsched_domain::Reminder;
use vacsched_infra::VacschedContext;

pub struct SyncDispatchesOnReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for SyncDispatchesOnReminderCreated {
    async fn notify(&self, e: &Reminder, ctx: &VacschedContext) {
        let sync_dispatches = SyncReminderDispatchesUseCase {
            reminder: e.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_dispatches, ctx).await;
    }
}

pub struct SyncDispatchesOnReminderUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateReminderUseCase> for SyncDispatchesOnReminderUpdated {
    async fn notify(&self, e: &Reminder, ctx: &VacschedContext) {
        let sync_dispatches = SyncReminderDispatchesUseCase {
            reminder: e.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_dispatches, ctx).await;
    }
}

pub struct SyncDispatchesOnReminderCompleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<CompleteReminderUseCase> for SyncDispatchesOnReminderCompleted {
    async fn notify(&self, e: &Reminder, ctx: &VacschedContext) {
        // Terminal states compute to zero dispatch instants, which is
        // exactly the cancellation the scheduler needs to observe
        let sync_dispatches = SyncReminderDispatchesUseCase {
            reminder: e.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_dispatches, ctx).await;
    }
}

pub struct CancelDispatchesOnReminderDeleted;

#[async_trait::async_trait(?Send)]
impl Subscriber<DeleteReminderUseCase> for CancelDispatchesOnReminderDeleted {
    async fn notify(&self, e: &Reminder, _ctx: &VacschedContext) {
        // The record is gone, the dispatch job cannot pick it up anymore
        info!(
            reminder_id = %e.id,
            "all pending notification dispatches cancelled with deleted reminder"
        );
    }
}
