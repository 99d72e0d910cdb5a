mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IGovernmentScheduleRepo, IReminderRepo, Repos, SaveReminderError};
pub use services::{
    DeliveryStatus, IDispatchTransport, LogDispatchTransport, RecordingDispatchTransport,
};
pub use system::{FakeSys, ISys, RealSys};
use std::sync::Arc;

#[derive(Clone)]
pub struct VacschedContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub transport: Arc<dyn IDispatchTransport>,
}

/// Sets up the infrastructure context. Storage is in-memory behind the
/// repo traits; a durable store plugs in at that seam without touching
/// the engine.
pub fn setup_context() -> VacschedContext {
    VacschedContext {
        repos: Repos::create_inmemory(),
        config: Config::new(),
        sys: Arc::new(RealSys {}),
        transport: Arc::new(LogDispatchTransport {}),
    }
}
