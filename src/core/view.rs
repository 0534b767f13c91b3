//! # Mediator registry.
//!
//! [`View`] keeps mediators by name and bridges their declared interests into
//! the [`Notifier`]: registering a mediator subscribes it to every kind it is
//! interested in, removing it unsubscribes it again.
//!
//! ## Architecture
//! ```text
//! register_mediator(m)
//!   ├─► interests = m.notification_interests()        (no lock)
//!   ├─► lock names
//!   │     ├─ name taken ─► unlock, MediatorRejected, Err(DuplicateMediator)
//!   │     ├─ notifier.register_observer(k, m) for k in interests
//!   │     └─ names[m.name()] = (m, interests)
//!   ├─► unlock
//!   └─► m.on_register()                               (no lock)
//! ```
//!
//! ## Rules
//! - **Unique names**: a taken name is rejected and the original stays registered.
//! - **Captured interests**: removal unsubscribes from the interests returned at
//!   registration time, even if the mediator would answer differently now.
//! - **Hooks run unlocked**: `on_register` / `on_remove` may register or remove
//!   other mediators.
//! - **Hooks are guarded**: under [`FailurePolicy::Isolate`] a panicking hook is
//!   reported as `HookFailed` and the registry operation still completes.
//! - **Lock order**: View → Notifier. The notifier never calls back into the view
//!   while holding its own lock.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::notifier::Notifier;
use super::unwind::run_guarded;
use crate::error::MvcError;
use crate::events::{Bus, Event, EventKind};
use crate::handlers::{MediatorRef, ObserverRef};
use crate::notification::NotificationKind;
use crate::policies::{FailurePolicy, TeardownPolicy};

/// A registered mediator and the interests it was subscribed with.
struct Entry<K: NotificationKind> {
    mediator: MediatorRef<K>,
    interests: Vec<K>,
}

/// Mediator registry: name → mediator.
pub struct View<K: NotificationKind> {
    mediators: Mutex<HashMap<String, Entry<K>>>,
    notifier: Arc<Notifier<K>>,
    bus: Bus,
    teardown: TeardownPolicy,
    failure: FailurePolicy,
}

impl<K: NotificationKind> View<K> {
    /// Creates an empty registry that subscribes mediators on `notifier`.
    pub fn new(
        notifier: Arc<Notifier<K>>,
        bus: Bus,
        teardown: TeardownPolicy,
        failure: FailurePolicy,
    ) -> Arc<Self> {
        Arc::new(Self {
            mediators: Mutex::new(HashMap::new()),
            notifier,
            bus,
            teardown,
            failure,
        })
    }

    /// Registers `mediator` under its name and subscribes it to its interests.
    ///
    /// # Errors
    /// [`MvcError::DuplicateMediator`] if the name is taken; nothing changes in that case.
    pub fn register_mediator(&self, mediator: MediatorRef<K>) -> Result<(), MvcError> {
        let name = mediator.name().to_owned();
        let interests = mediator.notification_interests();

        {
            let mut map = self.mediators.lock();
            if map.contains_key(&name) {
                drop(map);
                debug!(mediator = %name, "mediator name taken; registration rejected");
                self.bus
                    .publish(Event::new(EventKind::MediatorRejected).with_name(name.as_str()));
                return Err(MvcError::DuplicateMediator { name });
            }

            let observer: ObserverRef<K> = mediator.clone();
            for kind in &interests {
                self.notifier.register_observer(*kind, observer.clone());
            }
            map.insert(
                name.clone(),
                Entry {
                    mediator: mediator.clone(),
                    interests,
                },
            );
        }

        debug!(mediator = %name, "mediator registered");
        self.bus
            .publish(Event::new(EventKind::MediatorRegistered).with_name(name.as_str()));
        self.run_hook(&name, "on_register", || mediator.on_register());
        Ok(())
    }

    pub fn retrieve_mediator(&self, name: &str) -> Option<MediatorRef<K>> {
        self.mediators.lock().get(name).map(|e| e.mediator.clone())
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.mediators.lock().contains_key(name)
    }

    /// Returns the sorted list of registered mediator names.
    pub fn mediator_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.mediators.lock().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.mediators.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.mediators.lock().is_empty()
    }

    /// Unsubscribes and removes the mediator called `name`, then runs its `on_remove` hook.
    pub fn remove_mediator(&self, name: &str) -> Option<MediatorRef<K>> {
        let entry = {
            let mut map = self.mediators.lock();
            let entry = map.remove(name)?;
            self.unsubscribe(&entry);
            entry
        };

        self.finish_removal(name, &entry);
        Some(entry.mediator)
    }

    /// Empties the registry according to the configured [`TeardownPolicy`].
    ///
    /// Returns the number of mediators that were registered.
    pub fn teardown(&self) -> usize {
        match self.teardown {
            TeardownPolicy::ClearOnly => {
                let mut map = self.mediators.lock();
                let count = map.len();
                map.clear();
                count
            }
            TeardownPolicy::Cascade => {
                let mut drained: Vec<(String, Entry<K>)> = {
                    let mut map = self.mediators.lock();
                    let drained: Vec<_> = map.drain().collect();
                    for (_, entry) in &drained {
                        self.unsubscribe(entry);
                    }
                    drained
                };

                drained.sort_unstable_by(|a, b| a.0.cmp(&b.0));
                for (name, entry) in &drained {
                    self.finish_removal(name, entry);
                }
                drained.len()
            }
        }
    }

    fn unsubscribe(&self, entry: &Entry<K>) {
        let observer: ObserverRef<K> = entry.mediator.clone();
        for kind in &entry.interests {
            self.notifier.remove_observer(*kind, &observer);
        }
    }

    fn finish_removal(&self, name: &str, entry: &Entry<K>) {
        debug!(mediator = %name, "mediator removed");
        self.bus
            .publish(Event::new(EventKind::MediatorRemoved).with_name(name));
        self.run_hook(name, "on_remove", || entry.mediator.on_remove());
    }

    fn run_hook<F: FnOnce()>(&self, name: &str, hook: &'static str, f: F) {
        if let Err(reason) = run_guarded(self.failure, f) {
            warn!(mediator = %name, hook, %reason, "mediator hook panicked");
            self.bus.publish(Event::hook_failed(name, hook, reason));
        }
    }
}
