use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub mod error;
pub mod event_bus;

pub use self::error::BusError;
pub use self::error::HandlerFailure;
pub use self::error::PublishError;
pub use self::event_bus::EventBus;
pub use self::event_bus::SubscriptionId;

/// Dynamically typed event payload.
///
/// Publishers attach whatever value they want; handlers that know the
/// concrete type recover it with [`Payload::get`]. The bus itself never
/// inspects the payload beyond passing it along. Cloning is cheap (the
/// inner value is shared, not copied).
#[derive(Clone)]
pub struct Payload(Arc<dyn Any + Send + Sync>);

impl Payload {
    /// Wraps a value as an event payload.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Arc::new(value))
    }

    /// Payload for events that carry no data.
    pub fn empty() -> Self {
        Self::new(())
    }

    /// Returns a reference to the payload value if it is of type `T`.
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Whether the payload value is of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.0.is::<T>()
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Payload(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_downcast() {
        let payload = Payload::new(42u32);
        assert_eq!(payload.get::<u32>(), Some(&42));
        assert!(payload.get::<String>().is_none());
        assert!(payload.is::<u32>());
    }

    #[test]
    fn test_empty_payload() {
        let payload = Payload::empty();
        assert!(payload.is::<()>());
    }

    #[test]
    fn test_clone_shares_value() {
        let payload = Payload::new("hello".to_string());
        let clone = payload.clone();
        assert_eq!(clone.get::<String>().map(String::as_str), Some("hello"));
    }
}
