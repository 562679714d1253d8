use std::fmt;

use super::event_bus::SubscriptionId;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BusError {
    #[error("Invalid event name {name:?}: {reason}")]
    InvalidEventName { name: String, reason: String },
}

/// A single handler failure recorded during a publish.
#[derive(Debug)]
pub struct HandlerFailure {
    /// Identifies which registration failed.
    pub subscription: SubscriptionId,
    pub source: anyhow::Error,
}

impl fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler {:?} failed: {}", self.subscription, self.source)
    }
}

/// One or more handlers failed during a publish.
///
/// The bus isolates handler failures: every handler registered under the
/// event name still runs, and the failures are collected here afterwards.
#[derive(Debug, thiserror::Error)]
#[error("{} handler(s) failed for event {event_name:?}", failures.len())]
pub struct PublishError {
    pub event_name: String,
    pub failures: Vec<HandlerFailure>,
}
