mod inmemory;

pub use inmemory::InMemoryReminderRepo;
use chrono::NaiveDate;
use thiserror::Error;
use vacsched_domain::{DispatchKey, Reminder, ID};

#[derive(Debug, Error, PartialEq)]
pub enum SaveReminderError {
    #[error("Reminder with id: {0} was not found")]
    NotFound(ID),
    #[error("Reminder with id: {0} was modified concurrently")]
    VersionConflict(ID),
}

/// Single point of mutation serialization for reminders. Writes are
/// serialized per reminder id through an optimistic version check on
/// `save`; reads work against a snapshot.
#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// Persists a modified reminder. Fails with `VersionConflict` when the
    /// stored version no longer matches the one the caller read, so a
    /// concurrent "mark complete" and "edit schedule" cannot silently lose
    /// one of the updates. The stored version is bumped on success.
    async fn save(&self, reminder: &Reminder) -> Result<Reminder, SaveReminderError>;
    async fn find(&self, reminder_id: &ID) -> Option<Reminder>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Reminder>;
    async fn find_by_user_in_range(
        &self,
        user_id: &ID,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Reminder>;
    async fn find_all(&self) -> Vec<Reminder>;
    async fn delete(&self, reminder_id: &ID) -> Option<Reminder>;
    /// Atomically records that the given (channel, offset) pair fired.
    /// Returns `false` when the pair was already recorded, in which case
    /// the caller must not dispatch again.
    async fn mark_dispatched(
        &self,
        reminder_id: &ID,
        key: DispatchKey,
    ) -> Result<bool, SaveReminderError>;
}
