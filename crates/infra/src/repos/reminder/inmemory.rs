use super::{IReminderRepo, SaveReminderError};
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDate;
use std::sync::Mutex;
use vacsched_domain::{DispatchKey, Reminder, ID};

pub struct InMemoryReminderRepo {
    reminders: Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn save(&self, reminder: &Reminder) -> Result<Reminder, SaveReminderError> {
        // Check-and-bump happens under a single lock
        let mut collection = self.reminders.lock().unwrap();
        let stored = collection
            .iter_mut()
            .find(|r| r.id == reminder.id)
            .ok_or_else(|| SaveReminderError::NotFound(reminder.id.clone()))?;
        if stored.version != reminder.version {
            return Err(SaveReminderError::VersionConflict(reminder.id.clone()));
        }
        let mut updated = reminder.clone();
        updated.version += 1;
        *stored = updated.clone();
        Ok(updated)
    }

    async fn find(&self, reminder_id: &ID) -> Option<Reminder> {
        find(reminder_id, &self.reminders)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Reminder> {
        find_by(&self.reminders, |r| r.user_id == *user_id)
    }

    async fn find_by_user_in_range(
        &self,
        user_id: &ID,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Reminder> {
        find_by(&self.reminders, |r| {
            r.user_id == *user_id && r.scheduled_date >= start && r.scheduled_date <= end
        })
    }

    async fn find_all(&self) -> Vec<Reminder> {
        find_by(&self.reminders, |_| true)
    }

    async fn delete(&self, reminder_id: &ID) -> Option<Reminder> {
        delete(reminder_id, &self.reminders)
    }

    async fn mark_dispatched(
        &self,
        reminder_id: &ID,
        key: DispatchKey,
    ) -> Result<bool, SaveReminderError> {
        let mut collection = self.reminders.lock().unwrap();
        let stored = collection
            .iter_mut()
            .find(|r| r.id == *reminder_id)
            .ok_or_else(|| SaveReminderError::NotFound(reminder_id.clone()))?;
        if stored.dispatched.contains(&key) {
            return Ok(false);
        }
        stored.dispatched.push(key);
        stored.version += 1;
        Ok(true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveTime;
    use vacsched_domain::{
        Channel, NotificationSettings, Priority, ReminderCategory, ReminderStatus,
    };

    fn reminder() -> Reminder {
        Reminder {
            id: Default::default(),
            user_id: Default::default(),
            name: "Polio dose".into(),
            description: String::new(),
            category: ReminderCategory::Custom,
            scheduled_date: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            scheduled_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            priority: Priority::Medium,
            status: ReminderStatus::Pending,
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

    #[tokio::test]
    async fn save_bumps_version_and_detects_conflicts() {
        let repo = InMemoryReminderRepo::new();
        let r = reminder();
        repo.insert(&r).await.unwrap();

        let saved = repo.save(&r).await.unwrap();
        assert_eq!(saved.version, 1);

        // A writer still holding the stale version loses
        let res = repo.save(&r).await;
        assert_eq!(res, Err(SaveReminderError::VersionConflict(r.id.clone())));
    }

    #[tokio::test]
    async fn save_of_unknown_reminder_is_not_found() {
        let repo = InMemoryReminderRepo::new();
        let r = reminder();
        assert_eq!(
            repo.save(&r).await,
            Err(SaveReminderError::NotFound(r.id.clone()))
        );
    }

    #[tokio::test]
    async fn mark_dispatched_claims_a_pair_exactly_once() {
        let repo = InMemoryReminderRepo::new();
        let r = reminder();
        repo.insert(&r).await.unwrap();

        let key = DispatchKey {
            channel: Channel::Push,
            offset_days: 7,
        };
        assert!(repo.mark_dispatched(&r.id, key).await.unwrap());
        assert!(!repo.mark_dispatched(&r.id, key).await.unwrap());

        let stored = repo.find(&r.id).await.unwrap();
        assert_eq!(stored.dispatched, vec![key]);
    }

    #[tokio::test]
    async fn range_query_is_inclusive() {
        let repo = InMemoryReminderRepo::new();
        let mut a = reminder();
        a.scheduled_date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut b = reminder();
        b.user_id = a.user_id.clone();
        b.scheduled_date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
        let mut c = reminder();
        c.user_id = a.user_id.clone();
        c.scheduled_date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        for r in [&a, &b, &c] {
            repo.insert(r).await.unwrap();
        }

        let hits = repo
            .find_by_user_in_range(
                &a.user_id,
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            )
            .await;
        assert_eq!(hits.len(), 2);
    }
}
