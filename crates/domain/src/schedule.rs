use crate::notification::NotificationSettings;
use crate::reminder::{Priority, Reminder, ReminderCategory, ReminderStatus};
use crate::shared::entity::{Entity, ID};
use crate::shared::recurrence::Recurrence;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Booster intervals of exactly one year expand into an indefinitely
/// recurring annual booster.
pub const ANNUAL_BOOSTER_INTERVAL_DAYS: i64 = 365;

/// Government reminders fall due at this time-of-day.
const DEFAULT_DUE_TIME: (u32, u32) = (9, 0);

/// An entry of a government vaccination schedule. Read-mostly reference
/// data, refreshed wholesale from an external feed and never mutated
/// per-user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentVaccineSchedule {
    pub id: ID,
    pub vaccine_name: String,
    pub age_group: String,
    pub doses: u32,
    /// Days between doses of a multi-dose vaccine.
    pub interval_between_doses: i64,
    pub booster_required: bool,
    pub booster_interval_days: i64,
    pub priority: Priority,
    pub source: String,
    pub description: String,
}

impl Entity for GovernmentVaccineSchedule {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum InvalidSchedule {
    #[error("Schedule requires at least one dose, got {0}")]
    NoDoses(u32),
    #[error("Booster interval must be non-negative, got {0} days")]
    NegativeBoosterInterval(i64),
}

impl GovernmentVaccineSchedule {
    /// Expands this schedule entry into concrete reminders for a user:
    /// always one primary dose at `reference_date`, plus a booster
    /// follow-up when the schedule requires one. Expansion is additive;
    /// de-duplication against the user's existing reminders is the
    /// caller's problem, not performed here.
    pub fn expand(
        &self,
        user_id: &ID,
        reference_date: NaiveDate,
        now_millis: i64,
    ) -> Result<Vec<Reminder>, InvalidSchedule> {
        if self.doses < 1 {
            return Err(InvalidSchedule::NoDoses(self.doses));
        }
        if self.booster_required && self.booster_interval_days < 0 {
            return Err(InvalidSchedule::NegativeBoosterInterval(
                self.booster_interval_days,
            ));
        }

        let mut reminders = vec![self.reminder(
            user_id,
            self.vaccine_name.clone(),
            reference_date,
            None,
            now_millis,
        )];

        if self.booster_required {
            let booster_date = reference_date + Duration::days(self.booster_interval_days);
            let recurrence = if self.booster_interval_days == ANNUAL_BOOSTER_INTERVAL_DAYS {
                Some(Recurrence::yearly())
            } else {
                None
            };
            reminders.push(self.reminder(
                user_id,
                format!("{} booster", self.vaccine_name),
                booster_date,
                recurrence,
                now_millis,
            ));
        }

        Ok(reminders)
    }

    fn reminder(
        &self,
        user_id: &ID,
        name: String,
        scheduled_date: NaiveDate,
        recurrence: Option<Recurrence>,
        now_millis: i64,
    ) -> Reminder {
        let (hour, minute) = DEFAULT_DUE_TIME;
        Reminder {
            id: Default::default(),
            user_id: user_id.clone(),
            name,
            description: self.description.clone(),
            category: ReminderCategory::GovernmentMandated,
            scheduled_date,
            // hour/minute are in range
            scheduled_time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap(),
            priority: self.priority,
            status: ReminderStatus::Pending,
            recurrence,
            notifications: NotificationSettings::default(),
            government_mandated: true,
            linked_schedule_id: Some(self.id.clone()),
            dispatched: Vec::new(),
            created: now_millis,
            updated: now_millis,
            completed_at: None,
            version: 0,
        }
    }
}
