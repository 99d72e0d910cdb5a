use serde::{Deserialize, Serialize};
use vacsched_domain::{GovernmentVaccineSchedule, Priority, ID};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentVaccineScheduleDTO {
    pub id: ID,
    pub vaccine_name: String,
    pub age_group: String,
    pub doses: u32,
    pub interval_between_doses: i64,
    pub booster_required: bool,
    pub booster_interval_days: i64,
    pub priority: Priority,
    pub source: String,
    pub description: String,
}

impl GovernmentVaccineScheduleDTO {
    pub fn new(schedule: GovernmentVaccineSchedule) -> Self {
        Self {
            id: schedule.id.clone(),
            vaccine_name: schedule.vaccine_name,
            age_group: schedule.age_group,
            doses: schedule.doses,
            interval_between_doses: schedule.interval_between_doses,
            booster_required: schedule.booster_required,
            booster_interval_days: schedule.booster_interval_days,
            priority: schedule.priority,
            source: schedule.source,
            description: schedule.description,
        }
    }
}
