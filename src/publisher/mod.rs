use std::sync::Arc;

use log::debug;

use crate::event::EventBus;
use crate::event::Payload;
use crate::event::PublishError;

/// Producer-side binding of an injected bus to one event name.
///
/// Producers hold a `Publisher` instead of the whole bus, so the event name
/// they announce under is fixed at construction and never scattered through
/// their code.
pub struct Publisher {
    event_bus: Arc<EventBus>,
    event_name: String,
}

impl Publisher {
    pub fn new(event_bus: Arc<EventBus>, event_name: impl Into<String>) -> Self {
        let event_name = event_name.into();
        debug!("Initializing Publisher for event `{}`.", event_name);
        Self {
            event_bus,
            event_name,
        }
    }

    /// Publishes `payload` under this publisher's event name.
    pub fn publish(&self, payload: &Payload) -> Result<(), PublishError> {
        self.event_bus.publish(&self.event_name, payload)
    }

    /// The event name this publisher announces under.
    pub fn event_name(&self) -> &str {
        &self.event_name
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn test_publishes_under_bound_name() {
        let bus = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_clone = seen.clone();
        bus.subscribe("order_placed", move |event, _| {
            seen_clone.lock().unwrap().push(event.to_string());
            Ok(())
        })
        .unwrap();

        let publisher = Publisher::new(bus, "order_placed");
        assert_eq!(publisher.event_name(), "order_placed");

        publisher.publish(&Payload::empty()).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec!["order_placed"]);
    }
}
