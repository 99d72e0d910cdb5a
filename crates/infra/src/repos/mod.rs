mod reminder;
mod schedule;
mod shared;

pub use reminder::{IReminderRepo, InMemoryReminderRepo, SaveReminderError};
pub use schedule::{IGovernmentScheduleRepo, InMemoryGovernmentScheduleRepo};
use std::sync::Arc;

#[derive(Clone)]
pub struct Repos {
    pub reminders: Arc<dyn IReminderRepo>,
    pub schedules: Arc<dyn IGovernmentScheduleRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            reminders: Arc::new(InMemoryReminderRepo::new()),
            schedules: Arc::new(InMemoryGovernmentScheduleRepo::new()),
        }
    }
}
