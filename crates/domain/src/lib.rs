mod calendar;
mod date;
mod notification;
mod reminder;
mod schedule;
mod shared;
mod stats;

pub use calendar::{build_view, expand_window, CalendarDay, CalendarEvent, CalendarMode, CalendarView};
pub use notification::{
    compute_dispatches, Channel, DispatchKey, NotificationDispatch, NotificationSettings,
};
pub use reminder::{
    effective_status, EffectiveStatus, Priority, Reminder, ReminderCategory, ReminderStatus,
};
pub use schedule::{GovernmentVaccineSchedule, InvalidSchedule, ANNUAL_BOOSTER_INTERVAL_DAYS};
pub use shared::entity::{Entity, ID};
pub use shared::recurrence::{next_occurrence, Recurrence, RecurrenceError, RecurrenceFrequency};
pub use stats::{compute_stats, ReminderStats, UPCOMING_WINDOW_DAYS};
