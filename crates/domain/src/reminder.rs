use crate::notification::{DispatchKey, NotificationSettings};
use crate::shared::entity::{Entity, ID};
use crate::shared::recurrence::Recurrence;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Ordering is "critical first": the derived `Ord` follows declaration
/// order, so ascending sorts put higher priorities before lower ones.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// The persisted status of a `Reminder`. Only `Completed` and `Cancelled`
/// are terminal; everything else is interpreted against the scheduled date
/// at read time, see [`effective_status`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Pending,
    Completed,
    Missed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReminderCategory {
    Custom,
    GovernmentMandated,
}

/// The status as observed "right now". Never persisted for non-terminal
/// states, which is what keeps it from drifting out of sync with the
/// scheduled date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EffectiveStatus {
    Completed,
    Cancelled,
    Overdue,
    DueToday,
    Pending,
}

/// A single scheduled health obligation owned by one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: String,
    pub category: ReminderCategory,
    /// When this obligation falls due. Together with `scheduled_time` and
    /// the stored `status` this is the sole input to effective-status
    /// computation.
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub priority: Priority,
    pub status: ReminderStatus,
    pub recurrence: Option<Recurrence>,
    pub notifications: NotificationSettings,
    pub government_mandated: bool,
    /// Weak reference to the `GovernmentVaccineSchedule` this reminder was
    /// expanded from, when applicable.
    pub linked_schedule_id: Option<ID>,
    /// (channel, offset) pairs that have already fired. Guards against
    /// double-dispatch under at-least-once transport semantics.
    pub dispatched: Vec<DispatchKey>,
    pub created: i64,
    pub updated: i64,
    /// Millis timestamp, set only on the transition into `Completed`.
    pub completed_at: Option<i64>,
    /// Bumped on every save. A stale version on save is a write conflict.
    pub version: i64,
}

impl Entity for Reminder {
    fn id(&self) -> &ID {
        &self.id
    }
}

impl Reminder {
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_date.and_time(self.scheduled_time)
    }

    pub fn effective_status(&self, now: NaiveDateTime) -> EffectiveStatus {
        effective_status(self.status, self.scheduled_date, self.scheduled_time, now)
    }

    pub fn has_dispatched(&self, key: &DispatchKey) -> bool {
        self.dispatched.contains(key)
    }
}

/// Maps a stored status and a scheduled instant to the status observed at
/// `now`. Terminal states are sticky; everything else derives from the
/// date comparison. Deterministic, so it is computed on every read
/// instead of stored.
pub fn effective_status(
    stored: ReminderStatus,
    scheduled_date: NaiveDate,
    scheduled_time: NaiveTime,
    now: NaiveDateTime,
) -> EffectiveStatus {
    match stored {
        ReminderStatus::Completed => EffectiveStatus::Completed,
        ReminderStatus::Cancelled => EffectiveStatus::Cancelled,
        ReminderStatus::Pending | ReminderStatus::Missed => {
            let start_of_today = now.date().and_time(NaiveTime::MIN);
            if scheduled_date.and_time(scheduled_time) < start_of_today {
                EffectiveStatus::Overdue
            } else if scheduled_date == now.date() {
                EffectiveStatus::DueToday
            } else {
                EffectiveStatus::Pending
            }
        }
    }
}
