pub mod log_subscriber;

use anyhow::Result;

use crate::event::Payload;

/// A consumer that can be registered on the bus as a trait object.
///
/// Closures work just as well for one-off handlers; implement this when a
/// consumer carries state or serves several event names.
pub trait Subscriber: Send + Sync {
    fn on_event(&self, event: &str, payload: &Payload) -> Result<()>;
}
