use std::sync::Mutex;

use anyhow::Result;
use log::info;

use super::Subscriber;
use crate::event::Payload;

/// Subscriber that logs every delivery and keeps a count per instance.
///
/// Useful as a tap on any event name during development.
pub struct LogSubscriber {
    label: String,
    delivered: Mutex<u64>,
}

impl LogSubscriber {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            delivered: Mutex::new(0),
        }
    }

    /// Number of events delivered to this subscriber so far.
    pub fn delivered(&self) -> u64 {
        *self.delivered.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Subscriber for LogSubscriber {
    fn on_event(&self, event: &str, _payload: &Payload) -> Result<()> {
        let mut delivered = self.delivered.lock().unwrap_or_else(|e| e.into_inner());
        *delivered += 1;
        info!(
            "[{}] Received event `{}` (total {}).",
            self.label, event, *delivered
        );
        Ok(())
    }
}
