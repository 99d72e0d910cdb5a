use crate::reminder::{EffectiveStatus, Priority, Reminder};
use crate::shared::entity::ID;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    Month,
    Week,
}

/// Projection of a `Reminder` for a calendar window. Not persisted,
/// regenerated on every read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub reminder_id: ID,
    pub name: String,
    pub scheduled_time: NaiveTime,
    pub priority: Priority,
    pub status: EffectiveStatus,
    pub government_mandated: bool,
}

impl CalendarEvent {
    fn new(reminder: &Reminder, now: NaiveDateTime) -> Self {
        Self {
            reminder_id: reminder.id.clone(),
            name: reminder.name.clone(),
            scheduled_time: reminder.scheduled_time,
            priority: reminder.priority,
            status: reminder.effective_status(now),
            government_mandated: reminder.government_mandated,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub mode: CalendarMode,
    pub days: Vec<CalendarDay>,
}

/// For month mode the window grows to cover the full weeks containing its
/// first and last day, so a month grid always renders complete rows.
/// Weeks run Monday through Sunday. Week mode windows are used as-is.
pub fn expand_window(
    mode: CalendarMode,
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    match mode {
        CalendarMode::Month => {
            let start = window_start
                - Duration::days(window_start.weekday().num_days_from_monday() as i64);
            let end =
                window_end + Duration::days(6 - window_end.weekday().num_days_from_monday() as i64);
            (start, end)
        }
        CalendarMode::Week => (window_start, window_end),
    }
}

/// Buckets reminders per day over the requested window.
///
/// Within a day, reminders that demand attention (overdue or due today)
/// sort before pending ones, then by priority, then by time-of-day.
/// Pure read-side projection: idempotent and side-effect-free.
pub fn build_view(
    reminders: &[Reminder],
    window_start: NaiveDate,
    window_end: NaiveDate,
    mode: CalendarMode,
    now: NaiveDateTime,
) -> CalendarView {
    let (start, end) = expand_window(mode, window_start, window_end);

    let mut days: Vec<CalendarDay> = Vec::new();
    let mut date = start;
    while date <= end {
        days.push(CalendarDay {
            date,
            events: Vec::new(),
        });
        date += Duration::days(1);
    }

    for reminder in reminders {
        if reminder.scheduled_date < start || reminder.scheduled_date > end {
            continue;
        }
        let index = (reminder.scheduled_date - start).num_days() as usize;
        days[index].events.push(CalendarEvent::new(reminder, now));
    }

    for day in &mut days {
        day.events.sort_by(|a, b| {
            status_rank(a.status)
                .cmp(&status_rank(b.status))
                .then(a.priority.cmp(&b.priority))
                .then(a.scheduled_time.cmp(&b.scheduled_time))
        });
    }

    CalendarView {
        window_start: start,
        window_end: end,
        mode,
        days,
    }
}

fn status_rank(status: EffectiveStatus) -> u8 {
    match status {
        EffectiveStatus::Overdue | EffectiveStatus::DueToday => 0,
        EffectiveStatus::Pending => 1,
        EffectiveStatus::Completed | EffectiveStatus::Cancelled => 2,
    }
}
