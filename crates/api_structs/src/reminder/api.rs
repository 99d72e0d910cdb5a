use crate::dtos::ReminderDTO;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use vacsched_domain::{
    NotificationSettings, Priority, Recurrence, Reminder, ReminderStatus, ID,
};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder: ReminderDTO,
}

impl ReminderResponse {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            reminder: ReminderDTO::new(reminder),
        }
    }
}

pub mod create_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub description: Option<String>,
        pub scheduled_date: NaiveDate,
        pub scheduled_time: NaiveTime,
        pub priority: Option<Priority>,
        pub recurrence: Option<Recurrence>,
        pub notifications: Option<NotificationSettings>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod get_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub reminders: Vec<ReminderDTO>,
    }

    impl APIResponse {
        pub fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders: reminders.into_iter().map(ReminderDTO::new).collect(),
            }
        }
    }
}

pub mod get_upcoming_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub days: Option<i64>,
    }

    pub type APIResponse = super::get_reminders::APIResponse;
}

pub mod get_overdue_reminders {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = super::get_reminders::APIResponse;
}

pub mod update_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub reminder_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub description: Option<String>,
        pub scheduled_date: Option<NaiveDate>,
        pub scheduled_time: Option<NaiveTime>,
        pub priority: Option<Priority>,
        pub status: Option<ReminderStatus>,
        pub recurrence: Option<Recurrence>,
        pub notifications: Option<NotificationSettings>,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod complete_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}

pub mod delete_reminder {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
        pub reminder_id: ID,
    }

    pub type APIResponse = ReminderResponse;
}
