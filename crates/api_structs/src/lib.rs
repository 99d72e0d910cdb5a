mod calendar;
mod reminder;
mod schedule;
mod stats;
mod status;

pub mod dtos {
    pub use crate::reminder::dtos::*;
    pub use crate::schedule::dtos::*;
}

pub use crate::calendar::api::*;
pub use crate::reminder::api::*;
pub use crate::schedule::api::*;
pub use crate::stats::api::*;
pub use crate::status::api::*;
