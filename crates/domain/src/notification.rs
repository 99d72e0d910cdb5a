use crate::reminder::{Reminder, ReminderStatus};
use crate::shared::entity::ID;
use chrono::{Duration, NaiveDateTime};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Delivery channels are opaque to the engine; the external transport
/// decides what they mean.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Push,
    Sms,
    Email,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub channels: Vec<Channel>,
    /// Days before the scheduled date at which a notification should fire.
    pub advance_notice_days: Vec<i64>,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
            advance_notice_days: Vec::new(),
        }
    }
}

impl NotificationSettings {
    pub fn is_valid(&self) -> bool {
        self.advance_notice_days.iter().all(|offset| *offset >= 0)
    }
}

/// Identifies one configured notification instant of a reminder. Recorded
/// on the reminder once fired so the same instant never fires twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct DispatchKey {
    pub channel: Channel,
    pub offset_days: i64,
}

/// A computed notification instant. Never persisted, regenerated from the
/// reminder on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationDispatch {
    pub reminder_id: ID,
    pub user_id: ID,
    pub channel: Channel,
    pub offset_days: i64,
    pub fire_at: NaiveDateTime,
}

impl NotificationDispatch {
    pub fn key(&self) -> DispatchKey {
        DispatchKey {
            channel: self.channel,
            offset_days: self.offset_days,
        }
    }
}

/// Computes the future dispatch instants for a reminder.
///
/// One instant per enabled channel and configured advance-notice offset,
/// firing at the scheduled time-of-day `offset` days before the scheduled
/// date. Instants in the past, instants already recorded as fired, and
/// reminders in a terminal state produce nothing.
pub fn compute_dispatches(reminder: &Reminder, now: NaiveDateTime) -> Vec<NotificationDispatch> {
    match reminder.status {
        ReminderStatus::Completed | ReminderStatus::Cancelled => return Vec::new(),
        ReminderStatus::Pending | ReminderStatus::Missed => (),
    }

    let mut dispatches = Vec::new();
    for &offset_days in reminder.notifications.advance_notice_days.iter().unique() {
        let fire_at = (reminder.scheduled_date - Duration::days(offset_days))
            .and_time(reminder.scheduled_time);
        if fire_at < now {
            continue;
        }
        for &channel in reminder.notifications.channels.iter().unique() {
            let key = DispatchKey {
                channel,
                offset_days,
            };
            if reminder.has_dispatched(&key) {
                continue;
            }
            dispatches.push(NotificationDispatch {
                reminder_id: reminder.id.clone(),
                user_id: reminder.user_id.clone(),
                channel,
                offset_days,
                fire_at,
            });
        }
    }
    dispatches
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reminder::{Priority, ReminderCategory};
    use chrono::{NaiveDate, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn nine_am() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    fn reminder(offsets: Vec<i64>, channels: Vec<Channel>) -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: Default::default(),
            name: "MMR dose".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date: date(2024, 6, 30),
            scheduled_time: nine_am(),
            priority: Priority::High,
            status: ReminderStatus::Pending,
            recurrence: None,
            notifications: NotificationSettings {
                channels,
                advance_notice_days: offsets,
            },
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
    fn drops_instants_already_in_the_past() {
        let r = reminder(vec![30, 7, 1], vec![Channel::Push]);
        let now = date(2024, 6, 1).and_time(nine_am());

        // 30 days before 2024-06-30 is 2024-05-31, already past
        let dispatches = compute_dispatches(&r, now);
        let offsets: Vec<i64> = dispatches.iter().map(|d| d.offset_days).collect();
        assert_eq!(offsets, vec![7, 1]);
        assert_eq!(dispatches[0].fire_at, date(2024, 6, 23).and_time(nine_am()));
        assert_eq!(dispatches[1].fire_at, date(2024, 6, 29).and_time(nine_am()));
    }

    #[test]
    fn emits_one_instant_per_channel_and_offset() {
        let r = reminder(vec![7, 1], vec![Channel::Push, Channel::Email]);
        let now = date(2024, 6, 1).and_time(nine_am());
        assert_eq!(compute_dispatches(&r, now).len(), 4);
    }

    #[test]
    fn never_re_emits_a_fired_pair() {
        let mut r = reminder(vec![7, 1], vec![Channel::Push]);
        r.dispatched.push(DispatchKey {
            channel: Channel::Push,
            offset_days: 7,
        });
        let now = date(2024, 6, 1).and_time(nine_am());

        let dispatches = compute_dispatches(&r, now);
        assert_eq!(dispatches.len(), 1);
        assert_eq!(dispatches[0].offset_days, 1);
    }

    #[test]
    fn duplicate_configuration_entries_are_collapsed() {
        let r = reminder(vec![7, 7], vec![Channel::Push, Channel::Push]);
        let now = date(2024, 6, 1).and_time(nine_am());
        assert_eq!(compute_dispatches(&r, now).len(), 1);
    }

    #[test]
    fn terminal_reminders_produce_nothing() {
        let mut r = reminder(vec![7, 1], vec![Channel::Push]);
        let now = date(2024, 6, 1).and_time(nine_am());

        r.status = ReminderStatus::Completed;
        assert!(compute_dispatches(&r, now).is_empty());
        r.status = ReminderStatus::Cancelled;
        assert!(compute_dispatches(&r, now).is_empty());
    }
}
