use crate::dtos::{GovernmentVaccineScheduleDTO, ReminderDTO};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vacsched_domain::{GovernmentVaccineSchedule, Priority, Reminder, ID};

pub mod get_government_schedules {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub schedules: Vec<GovernmentVaccineScheduleDTO>,
    }

    impl APIResponse {
        pub fn new(schedules: Vec<GovernmentVaccineSchedule>) -> Self {
            Self {
                schedules: schedules
                    .into_iter()
                    .map(GovernmentVaccineScheduleDTO::new)
                    .collect(),
            }
        }
    }
}

pub mod refresh_government_schedules {
    use super::*;

    /// One entry of the external feed. Ids are assigned on refresh.
    #[derive(Deserialize, Serialize, Debug, Clone)]
    #[serde(rename_all = "camelCase")]
    pub struct FeedEntry {
        pub vaccine_name: String,
        pub age_group: String,
        pub doses: u32,
        pub interval_between_doses: i64,
        pub booster_required: bool,
        pub booster_interval_days: i64,
        pub priority: Priority,
        pub source: String,
        pub description: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub schedules: Vec<FeedEntry>,
    }

    pub type APIResponse = super::get_government_schedules::APIResponse;
}

pub mod sync_government_schedules {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub schedule_ids: Vec<ID>,
        pub reference_date: NaiveDate,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct FailedSchedule {
        pub schedule_id: ID,
        pub reason: String,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub created: Vec<ReminderDTO>,
        pub failed: Vec<FailedSchedule>,
    }

    impl APIResponse {
        pub fn new(created: Vec<Reminder>, failed: Vec<FailedSchedule>) -> Self {
            Self {
                created: created.into_iter().map(ReminderDTO::new).collect(),
                failed,
            }
        }
    }
}
