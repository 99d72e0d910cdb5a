use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use vacsched_domain::{
    NotificationSettings, Priority, Recurrence, Reminder, ReminderCategory, ReminderStatus, ID,
};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ReminderDTO {
    pub id: ID,
    pub user_id: ID,
    pub name: String,
    pub description: String,
    pub category: ReminderCategory,
    pub scheduled_date: NaiveDate,
    pub scheduled_time: NaiveTime,
    pub priority: Priority,
    pub status: ReminderStatus,
    pub recurrence: Option<Recurrence>,
    pub notifications: NotificationSettings,
    pub government_mandated: bool,
    pub linked_schedule_id: Option<ID>,
    pub created: i64,
    pub updated: i64,
    pub completed_at: Option<i64>,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            user_id: reminder.user_id.clone(),
            name: reminder.name,
            description: reminder.description,
            category: reminder.category,
            scheduled_date: reminder.scheduled_date,
            scheduled_time: reminder.scheduled_time,
            priority: reminder.priority,
            status: reminder.status,
            recurrence: reminder.recurrence,
            notifications: reminder.notifications,
            government_mandated: reminder.government_mandated,
            linked_schedule_id: reminder.linked_schedule_id,
            created: reminder.created,
            updated: reminder.updated,
            completed_at: reminder.completed_at,
        }
    }
}
