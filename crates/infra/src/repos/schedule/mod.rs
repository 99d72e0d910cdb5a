mod inmemory;

pub use inmemory::InMemoryGovernmentScheduleRepo;
use vacsched_domain::{GovernmentVaccineSchedule, ID};

/// Read-mostly reference data supplied by the external government feed.
#[async_trait::async_trait]
pub trait IGovernmentScheduleRepo: Send + Sync {
    /// Replaces the reference data wholesale. Entries are never mutated
    /// per-user.
    async fn refresh(&self, schedules: Vec<GovernmentVaccineSchedule>) -> anyhow::Result<()>;
    async fn find(&self, schedule_id: &ID) -> Option<GovernmentVaccineSchedule>;
    async fn all(&self) -> Vec<GovernmentVaccineSchedule>;
}
