use serde::{Deserialize, Serialize};
use vacsched_domain::{ReminderStats, ID};

pub mod get_reminder_stats {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: ReminderStats,
    }

    impl APIResponse {
        pub fn new(stats: ReminderStats) -> Self {
            Self { stats }
        }
    }
}
