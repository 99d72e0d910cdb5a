use super::IGovernmentScheduleRepo;
use crate::repos::shared::inmemory_repo::*;
use std::sync::Mutex;
use vacsched_domain::{GovernmentVaccineSchedule, ID};

pub struct InMemoryGovernmentScheduleRepo {
    schedules: Mutex<Vec<GovernmentVaccineSchedule>>,
}

impl InMemoryGovernmentScheduleRepo {
    pub fn new() -> Self {
        Self {
            schedules: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryGovernmentScheduleRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IGovernmentScheduleRepo for InMemoryGovernmentScheduleRepo {
    async fn refresh(&self, schedules: Vec<GovernmentVaccineSchedule>) -> anyhow::Result<()> {
        let mut collection = self.schedules.lock().unwrap();
        *collection = schedules;
        Ok(())
    }

    async fn find(&self, schedule_id: &ID) -> Option<GovernmentVaccineSchedule> {
        find(schedule_id, &self.schedules)
    }

    async fn all(&self) -> Vec<GovernmentVaccineSchedule> {
        find_by(&self.schedules, |_| true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use vacsched_domain::Priority;

    fn schedule(name: &str) -> GovernmentVaccineSchedule {
        GovernmentVaccineSchedule {
            id: Default::default(),
            vaccine_name: name.into(),
            age_group: "0-12 months".into(),
            doses: 3,
            interval_between_doses: 28,
            booster_required: false,
            booster_interval_days: 0,
            priority: Priority::Critical,
            source: "WHO".into(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn refresh_replaces_wholesale() {
        let repo = InMemoryGovernmentScheduleRepo::new();
        repo.refresh(vec![schedule("BCG"), schedule("OPV")])
            .await
            .unwrap();
        assert_eq!(repo.all().await.len(), 2);

        repo.refresh(vec![schedule("MMR")]).await.unwrap();
        let all = repo.all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].vaccine_name, "MMR");
    }
}
