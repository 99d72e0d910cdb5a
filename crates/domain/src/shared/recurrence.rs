use crate::date::month_length;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// How a `Reminder` repeats. A reminder without a `Recurrence` is a
/// one-time obligation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub freq: RecurrenceFrequency,
    pub interval: u32,
}

impl Default for Recurrence {
    fn default() -> Self {
        Self {
            freq: RecurrenceFrequency::Daily,
            interval: 1,
        }
    }
}

impl Recurrence {
    pub fn yearly() -> Self {
        Self {
            freq: RecurrenceFrequency::Yearly,
            interval: 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.interval >= 1
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum RecurrenceError {
    #[error("Cannot advance a reminder without a recurrence rule")]
    NoRecurrence,
}

/// Computes the date the next occurrence falls on, given the date of the
/// current occurrence.
///
/// Day and week arithmetic is exact calendar addition. Month and year
/// arithmetic clamps an overflowing day-of-month to the last valid day of
/// the resulting month, so Jan 31 + 1 month lands on Feb 28 (or Feb 29 in
/// a leap year).
pub fn next_occurrence(
    anchor: NaiveDate,
    rule: Option<&Recurrence>,
) -> Result<NaiveDate, RecurrenceError> {
    let rule = rule.ok_or(RecurrenceError::NoRecurrence)?;
    let interval = rule.interval.max(1);
    let next = match rule.freq {
        RecurrenceFrequency::Daily => anchor + Duration::days(interval as i64),
        RecurrenceFrequency::Weekly => anchor + Duration::days(7 * interval as i64),
        RecurrenceFrequency::Monthly => add_months_clamped(anchor, interval as i32),
        RecurrenceFrequency::Yearly => add_months_clamped(anchor, 12 * interval as i32),
    };
    Ok(next)
}

fn add_months_clamped(date: NaiveDate, months: i32) -> NaiveDate {
    let zero_based = date.year() * 12 + date.month0() as i32 + months;
    let year = zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) as u32 + 1;
    let day = date.day().min(month_length(year, month));
    // year/month/day are valid by construction
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
