//! # Diagnostics bus.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that lets the
//! registries publish framework events without blocking and without needing
//! a runtime: `publish` is a plain synchronous call.
//!
//! ## Architecture
//! ```text
//! Publishers (sync):                  Receivers:
//!   Notifier   ──┐
//!   Controller ──┼──────► Bus ───────► Facade::subscribe() (any number)
//!   View/Model ──┤  (broadcast chan)  └► subscriber listener ─► SubscriberSet
//!   Facade     ──┘
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks.
//! - **Bounded capacity**: one ring buffer shared by all receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip `n` oldest items.
//! - **No persistence**: events are dropped if nobody is subscribed at send time.

use tokio::sync::broadcast;

use super::event::Event;

/// Broadcast channel for diagnostics events.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery guarantees.
/// - **Cloneable**: cheap to clone (internally an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active receivers.
    ///
    /// If there are no receivers the event is dropped.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that will observe subsequent events.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;

    #[test]
    fn test_publish_without_receivers_is_silent() {
        let bus = Bus::new(4);
        bus.publish(Event::new(EventKind::TornDown));
        assert_eq!(bus.receiver_count(), 0);
    }

    #[test]
    fn test_receiver_sees_events_after_subscribing() {
        let bus = Bus::new(4);
        bus.publish(Event::new(EventKind::TornDown));

        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::CommandRegistered).with_name("start"));

        let ev = rx.try_recv().expect("event");
        assert_eq!(ev.kind, EventKind::CommandRegistered);
        assert_eq!(ev.name.as_deref(), Some("start"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_lagging_receiver_skips_oldest() {
        let bus = Bus::new(1);
        let mut rx = bus.subscribe();
        bus.publish(Event::new(EventKind::ProxyRegistered));
        bus.publish(Event::new(EventKind::ProxyRemoved));

        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Lagged(1))
        ));
        assert_eq!(rx.try_recv().expect("latest").kind, EventKind::ProxyRemoved);
    }
}
