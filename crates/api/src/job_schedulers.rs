use crate::notification::send_due_dispatches::SendDueDispatchesUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::{interval, sleep};
use std::time::Duration;
use vacsched_infra::VacschedContext;

/// Seconds until the next minute boundary, shifted `secs_before_min`
/// seconds earlier so a tick can line up slightly ahead of it.
pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs the due-dispatch scan once a minute, aligned to minute
/// boundaries so advance-notice instants fire at their configured
/// time-of-day rather than at process-start offsets.
pub fn start_dispatch_job(ctx: VacschedContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        sleep(Duration::from_secs(secs_to_next_run as u64)).await;

        let mut minutely_interval = interval(Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let usecase = SendDueDispatchesUseCase {
                lookahead_millis: ctx.config.dispatch_lookahead_millis,
            };
            let _ = execute(usecase, &ctx).await;
        }
    });
}
