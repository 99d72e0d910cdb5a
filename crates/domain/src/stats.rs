use crate::reminder::{EffectiveStatus, Reminder, ReminderStatus};
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const UPCOMING_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderStats {
    pub total: usize,
    /// Pending or due-today reminders scheduled within the next 30 days.
    pub upcoming: usize,
    pub overdue: usize,
    /// Reminders completed during the current calendar month, keyed on
    /// when the completion happened, not when it was scheduled.
    pub completed_this_period: usize,
}

pub fn compute_stats(reminders: &[Reminder], now: NaiveDateTime) -> ReminderStats {
    let today = now.date();
    let horizon = today + Duration::days(UPCOMING_WINDOW_DAYS);

    let mut stats = ReminderStats {
        total: reminders.len(),
        upcoming: 0,
        overdue: 0,
        completed_this_period: 0,
    };

    for reminder in reminders {
        match reminder.effective_status(now) {
            EffectiveStatus::Overdue => stats.overdue += 1,
            EffectiveStatus::Pending | EffectiveStatus::DueToday => {
                if reminder.scheduled_date >= today && reminder.scheduled_date <= horizon {
                    stats.upcoming += 1;
                }
            }
            EffectiveStatus::Completed | EffectiveStatus::Cancelled => (),
        }

        if reminder.status == ReminderStatus::Completed {
            let completed_at = reminder
                .completed_at
                .and_then(DateTime::<Utc>::from_timestamp_millis)
                .map(|dt| dt.naive_utc());
            if let Some(completed_at) = completed_at {
                if completed_at.year() == now.year() && completed_at.month() == now.month() {
                    stats.completed_this_period += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::notification::NotificationSettings;
    use crate::reminder::{Priority, ReminderCategory};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    fn millis(y: i32, m: u32, d: u32) -> i64 {
        date(y, m, d).and_time(noon()).and_utc().timestamp_millis()
    }

    fn reminder(scheduled_date: NaiveDate, status: ReminderStatus) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: Default::default(),
            name: "Hepatitis B".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date,
            scheduled_time: noon(),
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

    #[test]
    fn counts_upcoming_within_thirty_days_inclusive() {
        let now = date(2024, 6, 1).and_time(noon());
        let reminders = vec![
            reminder(date(2024, 6, 1), ReminderStatus::Pending),  // due today
            reminder(date(2024, 6, 20), ReminderStatus::Pending), // upcoming
            reminder(date(2024, 7, 1), ReminderStatus::Pending),  // day 30, inclusive
            reminder(date(2024, 7, 2), ReminderStatus::Pending),  // beyond window
            reminder(date(2024, 5, 20), ReminderStatus::Pending), // overdue
        ];

        let stats = compute_stats(&reminders, now);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.upcoming, 3);
        assert_eq!(stats.overdue, 1);
    }

    #[test]
    fn completed_counts_by_completion_month_not_schedule() {
        let now = date(2024, 6, 15).and_time(noon());

        // Scheduled in May, completed late in June: counts for June
        let mut late = reminder(date(2024, 5, 1), ReminderStatus::Completed);
        late.completed_at = Some(millis(2024, 6, 10));

        // Completed in May: does not count for June
        let mut past = reminder(date(2024, 5, 1), ReminderStatus::Completed);
        past.completed_at = Some(millis(2024, 5, 2));

        // Completed in June of another year: does not count
        let mut other_year = reminder(date(2023, 6, 1), ReminderStatus::Completed);
        other_year.completed_at = Some(millis(2023, 6, 10));

        let stats = compute_stats(&[late, past, other_year], now);
        assert_eq!(stats.completed_this_period, 1);
        assert_eq!(stats.upcoming, 0);
        assert_eq!(stats.overdue, 0);
    }

    #[test]
    fn cancelled_reminders_only_contribute_to_total() {
        let now = date(2024, 6, 1).and_time(noon());
        let reminders = vec![reminder(date(2024, 5, 1), ReminderStatus::Cancelled)];
        let stats = compute_stats(&reminders, now);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.overdue, 0);
        assert_eq!(stats.upcoming, 0);
    }
}
