//! # Proxy registry.
//!
//! [`Model`] keeps [`Proxy`] instances by name. It has no routing logic; the
//! facade owns it so that commands and mediators can reach application data
//! through the same entry point as the notification API.
//!
//! ## Rules
//! - **Unique names**: a taken name is rejected and the original stays registered.
//! - **Hooks run unlocked**: `on_register` / `on_remove` may use the model.
//! - **Hooks are guarded** according to the [`FailurePolicy`]; an isolated panic
//!   is reported as `HookFailed`.
//! - **Typed lookup**: [`Model::retrieve_proxy_as`] returns the concrete proxy type.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::unwind::run_guarded;

use crate::error::MvcError;
use crate::events::{Bus, Event, EventKind};
use crate::handlers::{Proxy, ProxyRef};
use crate::policies::FailurePolicy;

/// A registered proxy, kept both as a trait object and as `Any` for downcasts.
struct Entry {
    proxy: ProxyRef,
    any: Arc<dyn Any + Send + Sync>,
}

/// Proxy registry: name → proxy.
pub struct Model {
    proxies: RwLock<HashMap<String, Entry>>,
    bus: Bus,
    failure: FailurePolicy,
}

impl Model {
    /// Creates an empty registry.
    pub fn new(bus: Bus, failure: FailurePolicy) -> Arc<Self> {
        Arc::new(Self {
            proxies: RwLock::new(HashMap::new()),
            bus,
            failure,
        })
    }

    /// Registers `proxy` under its name and runs its `on_register` hook.
    ///
    /// # Errors
    /// [`MvcError::DuplicateProxy`] if the name is taken; nothing changes in that case.
    pub fn register_proxy<P: Proxy>(&self, proxy: Arc<P>) -> Result<(), MvcError> {
        let name = proxy.name().to_owned();

        let inserted = {
            let mut map = self.proxies.write();
            if map.contains_key(&name) {
                false
            } else {
                map.insert(
                    name.clone(),
                    Entry {
                        proxy: proxy.clone(),
                        any: proxy.clone(),
                    },
                );
                true
            }
        };

        if !inserted {
            debug!(proxy = %name, "proxy name taken; registration rejected");
            self.bus
                .publish(Event::new(EventKind::ProxyRejected).with_name(name.as_str()));
            return Err(MvcError::DuplicateProxy { name });
        }

        debug!(proxy = %name, "proxy registered");
        self.bus
            .publish(Event::new(EventKind::ProxyRegistered).with_name(name.as_str()));
        self.run_hook(&name, "on_register", || proxy.on_register());
        Ok(())
    }

    pub fn retrieve_proxy(&self, name: &str) -> Option<ProxyRef> {
        self.proxies.read().get(name).map(|e| e.proxy.clone())
    }

    /// Returns the proxy called `name` if it is a `T`.
    pub fn retrieve_proxy_as<T: Proxy>(&self, name: &str) -> Option<Arc<T>> {
        let any = self.proxies.read().get(name).map(|e| e.any.clone())?;
        any.downcast::<T>().ok()
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.proxies.read().contains_key(name)
    }

    /// Returns the sorted list of registered proxy names.
    pub fn proxy_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.proxies.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.proxies.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.read().is_empty()
    }

    /// Removes the proxy called `name` and runs its `on_remove` hook.
    pub fn remove_proxy(&self, name: &str) -> Option<ProxyRef> {
        let entry = self.proxies.write().remove(name)?;
        self.finish_removal(name, &entry.proxy);
        Some(entry.proxy)
    }

    /// Removes every proxy (in name order), running each `on_remove` hook.
    ///
    /// Returns the number of proxies removed.
    pub fn clear(&self) -> usize {
        let mut drained: Vec<(String, Entry)> = self.proxies.write().drain().collect();
        drained.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        for (name, entry) in &drained {
            self.finish_removal(name, &entry.proxy);
        }
        drained.len()
    }

    fn finish_removal(&self, name: &str, proxy: &ProxyRef) {
        debug!(proxy = %name, "proxy removed");
        self.bus
            .publish(Event::new(EventKind::ProxyRemoved).with_name(name));
        self.run_hook(name, "on_remove", || proxy.on_remove());
    }

    fn run_hook<F: FnOnce()>(&self, name: &str, hook: &'static str, f: F) {
        if let Err(reason) = run_guarded(self.failure, f) {
            warn!(proxy = %name, hook, %reason, "proxy hook panicked");
            self.bus.publish(Event::hook_failed(name, hook, reason));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

    #[derive(Default)]
    struct ScoreProxy {
        score: AtomicU64,
        removed: AtomicUsize,
    }

    impl Proxy for ScoreProxy {
        fn name(&self) -> &str {
            "score"
        }

        fn on_remove(&self) {
            self.removed.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Settings;

    impl Proxy for Settings {
        fn name(&self) -> &str {
            "settings"
        }
    }

    #[test]
    fn test_register_and_typed_retrieve() {
        let model = Model::new(Bus::new(8), FailurePolicy::Isolate);
        let score = Arc::new(ScoreProxy::default());
        model.register_proxy(score.clone()).expect("register");

        let typed = model.retrieve_proxy_as::<ScoreProxy>("score").expect("typed");
        typed.score.store(120, Ordering::SeqCst);
        assert_eq!(score.score.load(Ordering::SeqCst), 120);

        assert!(model.retrieve_proxy_as::<Settings>("score").is_none());
        assert_eq!(model.retrieve_proxy("score").map(|p| p.name().to_owned()).as_deref(), Some("score"));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        let model = Model::new(Bus::new(8), FailurePolicy::Isolate);
        let first = Arc::new(ScoreProxy::default());
        first.score.store(1, Ordering::SeqCst);

        model.register_proxy(first).expect("register");
        let err = model
            .register_proxy(Arc::new(ScoreProxy::default()))
            .unwrap_err();
        assert_eq!(err, MvcError::DuplicateProxy { name: "score".into() });

        let kept = model.retrieve_proxy_as::<ScoreProxy>("score").expect("kept");
        assert_eq!(kept.score.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_remove_runs_hook() {
        let model = Model::new(Bus::new(8), FailurePolicy::Isolate);
        let score = Arc::new(ScoreProxy::default());
        model.register_proxy(score.clone()).expect("register");

        assert!(model.remove_proxy("score").is_some());
        assert!(model.remove_proxy("score").is_none());
        assert!(!model.has_proxy("score"));
        assert_eq!(score.removed.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear_removes_all() {
        let bus = Bus::new(8);
        let model = Model::new(bus.clone(), FailurePolicy::Isolate);
        let score = Arc::new(ScoreProxy::default());
        model.register_proxy(score.clone()).expect("register");
        model.register_proxy(Arc::new(Settings)).expect("register");
        assert_eq!(model.proxy_names(), vec!["score", "settings"]);

        let mut rx = bus.subscribe();
        assert_eq!(model.clear(), 2);
        assert!(model.is_empty());
        assert_eq!(score.removed.load(Ordering::SeqCst), 1);

        let names: Vec<String> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter_map(|ev| ev.name.map(|n| n.to_string()))
            .collect();
        assert_eq!(names, vec!["score", "settings"]);
    }

    struct Corrupt;

    impl Proxy for Corrupt {
        fn name(&self) -> &str {
            "corrupt"
        }

        fn on_register(&self) {
            panic!("bad save file");
        }

        fn on_remove(&self) {
            panic!("bad save file");
        }
    }

    #[test]
    fn test_panicking_hooks_are_isolated() {
        let bus = Bus::new(16);
        let model = Model::new(bus.clone(), FailurePolicy::Isolate);
        let mut rx = bus.subscribe();

        model.register_proxy(Arc::new(Corrupt)).expect("register");
        assert!(model.has_proxy("corrupt"));
        model.register_proxy(Arc::new(Settings)).expect("register");

        assert_eq!(model.clear(), 2);
        assert!(model.is_empty());

        let failures: Vec<String> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|ev| ev.kind == EventKind::HookFailed)
            .filter_map(|ev| ev.reason.map(|r| r.to_string()))
            .collect();
        assert_eq!(
            failures,
            vec!["on_register: bad save file", "on_remove: bad save file"]
        );
    }
}
