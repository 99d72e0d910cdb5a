use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use vacsched_domain::{CalendarMode, CalendarView, ID};

pub mod get_calendar_view {
    use super::*;

    #[derive(Deserialize, Serialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    #[derive(Deserialize, Serialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub window_start: NaiveDate,
        pub window_end: NaiveDate,
        pub mode: CalendarMode,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub view: CalendarView,
    }

    impl APIResponse {
        pub fn new(view: CalendarView) -> Self {
            Self { view }
        }
    }
}
