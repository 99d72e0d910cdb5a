use std::sync::Mutex;
use tracing::info;
use vacsched_domain::NotificationDispatch;

/// Outcome reported by the external transport for one delivery attempt.
/// Transient failures may be retried, permanent ones must not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Delivered,
    TransientFailure,
    PermanentFailure,
}

/// Hand-off boundary to the external push/SMS/email transport. The engine
/// performs no delivery of its own; whatever is wired in here owns the
/// wire protocol.
#[async_trait::async_trait]
pub trait IDispatchTransport: Send + Sync {
    async fn send(&self, dispatch: &NotificationDispatch, message: &str) -> DeliveryStatus;
}

/// Transport used when no real provider is configured. Logs the dispatch
/// and reports success.
pub struct LogDispatchTransport {}

#[async_trait::async_trait]
impl IDispatchTransport for LogDispatchTransport {
    async fn send(&self, dispatch: &NotificationDispatch, message: &str) -> DeliveryStatus {
        info!(
            reminder_id = %dispatch.reminder_id,
            user_id = %dispatch.user_id,
            channel = ?dispatch.channel,
            fire_at = %dispatch.fire_at,
            "dispatching notification: {}",
            message
        );
        DeliveryStatus::Delivered
    }
}

/// Transport for tests: records every send and answers with a scripted
/// sequence of outcomes (then `Delivered` once the script runs out).
pub struct RecordingDispatchTransport {
    pub sent: Mutex<Vec<NotificationDispatch>>,
    pub outcomes: Mutex<Vec<DeliveryStatus>>,
}

impl RecordingDispatchTransport {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcomes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_outcomes(outcomes: Vec<DeliveryStatus>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            outcomes: Mutex::new(outcomes),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Default for RecordingDispatchTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IDispatchTransport for RecordingDispatchTransport {
    async fn send(&self, dispatch: &NotificationDispatch, _message: &str) -> DeliveryStatus {
        self.sent.lock().unwrap().push(dispatch.clone());
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            DeliveryStatus::Delivered
        } else {
            outcomes.remove(0)
        }
    }
}
