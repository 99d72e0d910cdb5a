use crate::shared::usecase::UseCase;
use actix_web::rt::time::sleep;
use chrono::Duration;
use std::time::Duration as StdDuration;
use tracing::{error, warn};
use vacsched_domain::{compute_dispatches, NotificationDispatch, Reminder};
use vacsched_infra::{DeliveryStatus, VacschedContext};

/// Scans all reminders for dispatch instants falling due within the
/// lookahead window and hands them to the external transport.
///
/// The (channel, offset) marker is claimed atomically before the hand-off,
/// so a retrying transport or an overlapping job tick can never fire the
/// same instant twice. A failed delivery never blocks the remaining
/// dispatches of this or any other reminder.
#[derive(Debug)]
pub struct SendDueDispatchesUseCase {
    /// How far ahead of their fire time instants are picked up, in millis.
    pub lookahead_millis: i64,
}

#[derive(Debug, PartialEq)]
pub struct DispatchRunSummary {
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueDispatchesUseCase {
    type Response = DispatchRunSummary;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueDispatches";

    async fn execute(&mut self, ctx: &VacschedContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.get_datetime();
        let horizon = now + Duration::milliseconds(self.lookahead_millis);

        let mut summary = DispatchRunSummary { sent: 0, failed: 0 };
        for reminder in ctx.repos.reminders.find_all().await {
            for dispatch in compute_dispatches(&reminder, now) {
                if dispatch.fire_at > horizon {
                    continue;
                }

                // Claim before sending: at-most-once even when the
                // transport promises at-least-once
                match ctx
                    .repos
                    .reminders
                    .mark_dispatched(&reminder.id, dispatch.key())
                    .await
                {
                    Ok(true) => (),
                    Ok(false) => continue,
                    // Deleted while scanning, nothing left to fire
                    Err(_) => continue,
                }

                if deliver(&dispatch, &reminder, ctx).await {
                    summary.sent += 1;
                } else {
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

async fn deliver(
    dispatch: &NotificationDispatch,
    reminder: &Reminder,
    ctx: &VacschedContext,
) -> bool {
    let message = format!(
        "{} is due on {}",
        reminder.name, reminder.scheduled_date
    );
    let max_attempts = ctx.config.dispatch_retry_limit.max(1);

    for attempt in 1..=max_attempts {
        match ctx.transport.send(dispatch, &message).await {
            DeliveryStatus::Delivered => return true,
            DeliveryStatus::PermanentFailure => {
                error!(
                    reminder_id = %dispatch.reminder_id,
                    channel = ?dispatch.channel,
                    offset_days = dispatch.offset_days,
                    "transport reported permanent failure, dispatch instant dropped"
                );
                return false;
            }
            DeliveryStatus::TransientFailure if attempt == max_attempts => {
                error!(
                    reminder_id = %dispatch.reminder_id,
                    channel = ?dispatch.channel,
                    "giving up on dispatch after {} attempts",
                    max_attempts
                );
            }
            DeliveryStatus::TransientFailure => {
                warn!(
                    reminder_id = %dispatch.reminder_id,
                    channel = ?dispatch.channel,
                    "transient transport failure, attempt {}/{}",
                    attempt,
                    max_attempts
                );
                sleep(StdDuration::from_millis(
                    ctx.config.dispatch_retry_backoff_millis * attempt as u64,
                ))
                .await;
            }
        }
    }

    false
}
