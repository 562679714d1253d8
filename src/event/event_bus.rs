use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use anyhow::Result;
use log::debug;
use log::error;
use log::trace;

use super::Payload;
use super::error::BusError;
use super::error::HandlerFailure;
use super::error::PublishError;
use crate::subscriber::Subscriber;

type Handler = Arc<dyn Fn(&str, &Payload) -> Result<()> + Send + Sync>;

/// Identifies one registration on the bus.
///
/// Returned by [`EventBus::subscribe`]; the only way to target a specific
/// registration in [`EventBus::unsubscribe`]. Registering the same closure
/// twice yields two distinct ids (and two invocations per publish).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    handler: Handler,
}

/// Synchronous publish/subscribe event bus keyed by event name.
///
/// Handlers registered under a name are invoked in registration order, on
/// the publishing thread, every time that name is published. Publishing a
/// name nobody subscribed to is a no-op. The bus holds shared references to
/// its handlers only; callers retain ownership and may invoke them directly.
///
/// Subscription and publication are serialized against each other, so the
/// bus can be shared across threads behind an `Arc`. The handler list is
/// snapshotted before invocation: a handler registered while a publish is
/// in flight is not seen by that publish. A handler that never returns
/// blocks `publish` indefinitely; there is no timeout.
pub struct EventBus {
    subscribers: RwLock<HashMap<String, Vec<Subscription>>>,
    next_id: AtomicU64,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Registers `handler` to run on every future publish of `event_name`.
    ///
    /// The name must be non-empty and contain no whitespace. Duplicate
    /// registrations are permitted: the handler runs once per registration.
    pub fn subscribe<F>(&self, event_name: &str, handler: F) -> Result<SubscriptionId, BusError>
    where
        F: Fn(&str, &Payload) -> Result<()> + Send + Sync + 'static,
    {
        Self::validate_event_name(event_name)?;

        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let subscription = Subscription {
            id,
            handler: Arc::new(handler),
        };

        self.subscribers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .entry(event_name.to_string())
            .or_default()
            .push(subscription);

        debug!("Registered handler {:?} for event `{}`.", id, event_name);
        Ok(id)
    }

    /// Registers a [`Subscriber`] for `event_name`.
    pub fn register_subscriber<S>(
        &self,
        event_name: &str,
        subscriber: Arc<S>,
    ) -> Result<SubscriptionId, BusError>
    where
        S: Subscriber + 'static,
    {
        self.subscribe(event_name, move |event, payload| {
            subscriber.on_event(event, payload)
        })
    }

    /// Removes the registration identified by `id` under `event_name`.
    ///
    /// The relative order of the remaining handlers is preserved. Returns
    /// `false` if no such registration exists.
    pub fn unsubscribe(&self, event_name: &str, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write().unwrap_or_else(|e| e.into_inner());
        let Some(list) = subscribers.get_mut(event_name) else {
            return false;
        };

        let before = list.len();
        list.retain(|s| s.id != id);
        let removed = list.len() < before;

        // A name is only present while it has at least one handler.
        if list.is_empty() {
            subscribers.remove(event_name);
        }

        if removed {
            debug!("Removed handler {:?} for event `{}`.", id, event_name);
        }
        removed
    }

    /// Invokes every handler registered under `event_name` with `payload`,
    /// synchronously and in registration order.
    ///
    /// No subscribers is not an error. Handler failures are isolated: a
    /// failing handler never prevents later handlers from running, and all
    /// failures are reported together in the returned [`PublishError`].
    pub fn publish(&self, event_name: &str, payload: &Payload) -> Result<(), PublishError> {
        let snapshot: Vec<(SubscriptionId, Handler)> = {
            let subscribers = self.subscribers.read().unwrap_or_else(|e| e.into_inner());
            match subscribers.get(event_name) {
                Some(list) => list.iter().map(|s| (s.id, s.handler.clone())).collect(),
                None => {
                    trace!("No subscribers for event `{}`, skipping.", event_name);
                    return Ok(());
                }
            }
        };

        trace!(
            "Publishing event `{}` to {} handler(s).",
            event_name,
            snapshot.len()
        );

        let mut failures = Vec::new();
        for (id, handler) in snapshot {
            if let Err(e) = handler(event_name, payload) {
                error!("Handler {:?} failed for event `{}`: {:?}", id, event_name, e);
                failures.push(HandlerFailure {
                    subscription: id,
                    source: e,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PublishError {
                event_name: event_name.to_string(),
                failures,
            })
        }
    }

    /// Number of handlers currently registered under `event_name`.
    pub fn subscriber_count(&self, event_name: &str) -> usize {
        self.subscribers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(event_name)
            .map_or(0, Vec::len)
    }

    fn validate_event_name(event_name: &str) -> Result<(), BusError> {
        if event_name.is_empty() {
            return Err(BusError::InvalidEventName {
                name: event_name.to_string(),
                reason: "name is empty".to_string(),
            });
        }
        if event_name.chars().any(char::is_whitespace) {
            return Err(BusError::InvalidEventName {
                name: event_name.to_string(),
                reason: "name contains whitespace".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
