use std::sync::Arc;

use anyhow::Result;
use chrono::DateTime;
use chrono::Utc;
use log::info;

use crate::event::Payload;
use crate::publisher::Publisher;

/// Event name announced when an order finishes processing.
pub const ORDER_PLACED: &str = "order_placed";

/// Payload published under [`ORDER_PLACED`].
#[derive(Clone, Debug, PartialEq)]
pub struct OrderPlaced {
    pub order_id: String,
    pub placed_at: DateTime<Utc>,
}

/// Capability for sending a notification message.
///
/// `OrderService` depends on this trait, never on a concrete sender, so the
/// sender is swappable at construction time (and mockable in tests).
pub trait Notifier: Send + Sync {
    fn send(&self, message: &str) -> Result<()>;
}

/// Notifier that delivers by email. Stands in for a real mail gateway here;
/// delivery is represented by a log line.
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for EmailNotifier {
    fn send(&self, message: &str) -> Result<()> {
        info!("Sending email: {}", message);
        Ok(())
    }
}

/// Processes orders and announces each completion on the bus.
///
/// Both collaborators arrive through the constructor: the notifier as a
/// capability trait, the bus pre-bound to [`ORDER_PLACED`] via a
/// [`Publisher`]. The service constructs neither.
pub struct OrderService {
    notifier: Arc<dyn Notifier>,
    publisher: Publisher,
}

impl OrderService {
    pub fn new(notifier: Arc<dyn Notifier>, publisher: Publisher) -> Self {
        info!("Initializing OrderService.");
        Self {
            notifier,
            publisher,
        }
    }

    /// Processes one order: notifies, then publishes [`OrderPlaced`].
    pub fn process_order(&self, order_id: &str) -> Result<()> {
        info!("Processing order {}.", order_id);
        self.notifier
            .send(&format!("Order {} processed", order_id))?;

        let event = OrderPlaced {
            order_id: order_id.to_string(),
            placed_at: Utc::now(),
        };
        self.publisher.publish(&Payload::new(event))?;
        Ok(())
    }
}
