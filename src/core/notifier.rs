//! # Observer registry and notification dispatch.
//!
//! [`Notifier`] maps each notification kind to an ordered list of observers
//! and delivers notifications to them.
//!
//! ## Dispatch
//! ```text
//! notify_observers(n)
//!   ├─► lock ─► clone observers[n.kind] into a fresh Vec ─► unlock
//!   ├─► for each snapshotted observer (registration order):
//!   │       run_guarded(on_notify(n))
//!   │         └─ panic (Isolate) ─► warn! + ObserverFailed, continue
//!   └─► controller.execute_command(n)
//! ```
//!
//! ## Rules
//! - **No lock during callbacks**: observers may register/remove observers
//!   (for any kind) from inside `on_notify` without deadlocking.
//! - **Snapshot semantics**: observers added during a dispatch are seen from the
//!   next dispatch on; observers removed during a dispatch still receive the
//!   in-flight notification.
//! - **Duplicates allowed**: registering the same observer twice delivers twice.
//! - **No empty entries**: removing the last observer of a kind removes the kind.
//! - **Observers before commands**: every send reaches the observers first, then
//!   the command bound to the kind (if any).

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{trace, warn};

use super::controller::Controller;
use super::unwind::run_guarded;
use crate::events::{Bus, Event};
use crate::handlers::{ObserverRef, same_observer};
use crate::notification::{Notification, NotificationKind};
use crate::policies::FailurePolicy;

/// Observer registry: kind → ordered observers.
pub struct Notifier<K: NotificationKind> {
    observers: Mutex<HashMap<K, Vec<ObserverRef<K>>>>,
    controller: Arc<Controller<K>>,
    bus: Bus,
    failure: FailurePolicy,
}

impl<K: NotificationKind> Notifier<K> {
    /// Creates an empty registry that cascades every dispatch to `controller`.
    pub fn new(controller: Arc<Controller<K>>, bus: Bus, failure: FailurePolicy) -> Arc<Self> {
        Arc::new(Self {
            observers: Mutex::new(HashMap::new()),
            controller,
            bus,
            failure,
        })
    }

    /// Appends `observer` to the list for `kind`.
    ///
    /// No duplicate check: the same observer registered twice is notified twice.
    pub fn register_observer(&self, kind: K, observer: ObserverRef<K>) {
        trace!(?kind, observer = observer.label(), "observer registered");
        self.observers.lock().entry(kind).or_default().push(observer);
    }

    /// Removes the first registration of `observer` (by identity) for `kind`.
    ///
    /// Returns `false` if nothing matched.
    pub fn remove_observer(&self, kind: K, observer: &ObserverRef<K>) -> bool {
        let mut map = self.observers.lock();
        let Some(list) = map.get_mut(&kind) else {
            return false;
        };
        let Some(pos) = list.iter().position(|o| same_observer(o, observer)) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            map.remove(&kind);
        }
        true
    }

    /// Returns `true` if at least one observer is registered for `kind`.
    pub fn has_observers(&self, kind: K) -> bool {
        self.observers.lock().contains_key(&kind)
    }

    /// Number of registrations for `kind` (duplicates counted).
    pub fn observer_count(&self, kind: K) -> usize {
        self.observers.lock().get(&kind).map_or(0, Vec::len)
    }

    /// Returns the sorted list of kinds that currently have observers.
    pub fn kinds(&self) -> Vec<K> {
        let mut kinds: Vec<K> = self.observers.lock().keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Delivers `notification` to a snapshot of its observers, then to its command.
    pub fn notify_observers(&self, notification: &Notification<K>) {
        let kind = notification.kind();
        let snapshot: Vec<ObserverRef<K>> = {
            let map = self.observers.lock();
            map.get(&kind).cloned().unwrap_or_default()
        };

        trace!(?kind, seq = notification.seq(), observers = snapshot.len(), "dispatch");
        for observer in &snapshot {
            self.deliver(observer, notification);
        }

        self.controller.execute_command(notification);
    }

    /// Drops every registration.
    pub fn clear(&self) {
        self.observers.lock().clear();
    }

    fn deliver(&self, observer: &ObserverRef<K>, notification: &Notification<K>) {
        if let Err(reason) = run_guarded(self.failure, || observer.on_notify(notification)) {
            let kind = notification.kind();
            warn!(
                observer = observer.label(),
                ?kind,
                seq = notification.seq(),
                %reason,
                "observer panicked; continuing delivery"
            );
            self.bus
                .publish(Event::observer_failed(observer.label(), &kind, reason));
        }
    }
}
