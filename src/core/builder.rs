use std::sync::Arc;

use crate::{
    config::Config,
    notification::NotificationKind,
    subscribers::{Subscribe, SubscriberSet},
};

use super::facade::Facade;

/// Builder for constructing a [`Facade`] with optional features.
pub struct FacadeBuilder<K: NotificationKind> {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
    _kind: std::marker::PhantomData<fn() -> K>,
}

impl<K: NotificationKind> FacadeBuilder<K> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
            _kind: std::marker::PhantomData,
        }
    }

    /// Sets diagnostics subscribers.
    ///
    /// Subscribers receive framework events (registrations, teardown, isolated
    /// failures) through dedicated workers with bounded queues.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds and returns the facade.
    ///
    /// This consumes the builder and initializes:
    /// - diagnostics bus
    /// - model, controller, notifier and view
    /// - subscriber workers and the bus listener (only if subscribers were given)
    ///
    /// # Panics
    /// When subscribers were given and this is called outside a Tokio runtime.
    pub fn build(self) -> Arc<Facade<K>> {
        let facade = Facade::wire(self.cfg);

        if !self.subscribers.is_empty() {
            let set = SubscriberSet::new(self.subscribers, facade.bus().clone());
            facade.spawn_subscriber_listener(set);
        }
        Arc::new(facade)
    }
}
