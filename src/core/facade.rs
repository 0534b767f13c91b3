//! # Facade: composition root and single entry point.
//!
//! The [`Facade`] builds the four registries exactly once, wires them
//! together and forwards every public operation to the registry that owns it.
//! Application code (commands, mediators, scene glue) talks to the facade only.
//!
//! ## Wiring
//! ```text
//! Facade::new(cfg)
//!   ├─► Bus::new(cfg.bus_capacity)                         diagnostics events
//!   ├─► Model::new(bus, cfg.failure)                       name → proxy
//!   ├─► Controller::new(bus, cfg.failure)                  kind → command
//!   ├─► Notifier::new(controller, bus, cfg.failure)        kind → [observer]
//!   └─► View::new(notifier, bus, cfg.teardown, failure)    name → mediator
//!
//! send_notification(kind)
//!   └─► Notifier::notify_observers(&n)
//!         ├─► snapshot observers of kind, invoke each (no lock held)
//!         └─► Controller::execute_command(&n)
//! ```
//!
//! ## State
//! ```text
//! Initializing ──(first operation)──► Ready ──teardown()──► TornDown
//!                                       ▲                       │
//!                                       └──(first operation)────┘
//! ```
//! Teardown empties the registries but keeps the same instances, so handles
//! obtained through [`Facade::controller`] and friends stay valid.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use mvcore::{CommandFn, Config, Facade, FacadeState, Notification};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Note { Startup }
//!
//! let facade = Facade::<Note>::new(Config::default());
//! assert_eq!(facade.state(), FacadeState::Initializing);
//!
//! let boots = Arc::new(AtomicUsize::new(0));
//! let counter = boots.clone();
//! facade.register_command(
//!     Note::Startup,
//!     CommandFn::arc("startup", move |_: &Notification<Note>| {
//!         counter.fetch_add(1, Ordering::SeqCst);
//!     }),
//! );
//!
//! facade.send_notification(Note::Startup);
//! assert_eq!(boots.load(Ordering::SeqCst), 1);
//! assert_eq!(facade.state(), FacadeState::Ready);
//! ```

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use super::builder::FacadeBuilder;
use super::{controller::Controller, model::Model, notifier::Notifier, view::View};
use crate::config::Config;
use crate::error::MvcError;
use crate::events::{Bus, Event, EventKind};
use crate::handlers::{CommandRef, MediatorRef, ObserverRef, Proxy, ProxyRef};
use crate::notification::{Body, Notification, NotificationKind};
use crate::subscribers::SubscriberSet;

/// Lifecycle state of a [`Facade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacadeState {
    /// Registries are wired; nothing has been registered or sent yet.
    Initializing,
    /// In use.
    Ready,
    /// [`Facade::teardown`] emptied the registries; the next operation makes it `Ready` again.
    TornDown,
}

impl FacadeState {
    const fn as_u8(self) -> u8 {
        match self {
            FacadeState::Initializing => 0,
            FacadeState::Ready => 1,
            FacadeState::TornDown => 2,
        }
    }

    const fn from_u8(v: u8) -> Self {
        match v {
            0 => FacadeState::Initializing,
            1 => FacadeState::Ready,
            _ => FacadeState::TornDown,
        }
    }
}

/// Unified entry point over the model, controller, notifier and view.
pub struct Facade<K: NotificationKind> {
    cfg: Config,
    bus: Bus,
    model: Arc<Model>,
    controller: Arc<Controller<K>>,
    notifier: Arc<Notifier<K>>,
    view: Arc<View<K>>,
    state: AtomicU8,
    runtime_token: CancellationToken,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl<K: NotificationKind> Facade<K> {
    /// Creates a facade with freshly wired registries and no diagnostics subscribers.
    ///
    /// Does not need a Tokio runtime. Use [`Facade::builder`] to attach subscribers.
    pub fn new(cfg: Config) -> Arc<Self> {
        Arc::new(Self::wire(cfg))
    }

    /// Returns a builder for a facade with diagnostics subscribers.
    pub fn builder(cfg: Config) -> FacadeBuilder<K> {
        FacadeBuilder::new(cfg)
    }

    /// Builds the registries in dependency order: model, controller, notifier, view.
    pub(crate) fn wire(cfg: Config) -> Self {
        let bus = Bus::new(cfg.bus_capacity_clamped());
        let model = Model::new(bus.clone(), cfg.failure);
        let controller = Controller::new(bus.clone(), cfg.failure);
        let notifier = Notifier::new(controller.clone(), bus.clone(), cfg.failure);
        let view = View::new(notifier.clone(), bus.clone(), cfg.teardown, cfg.failure);

        debug!(failure = ?cfg.failure, teardown = ?cfg.teardown, "facade wired");
        Self {
            cfg,
            bus,
            model,
            controller,
            notifier,
            view,
            state: AtomicU8::new(FacadeState::Initializing.as_u8()),
            runtime_token: CancellationToken::new(),
            listener: Mutex::new(None),
        }
    }

    /// Spawns the task that forwards bus events to `set` until [`Facade::shutdown`].
    ///
    /// Must be called from within a Tokio runtime.
    pub(crate) fn spawn_subscriber_listener(&self, set: SubscriberSet) {
        let mut rx = self.bus.subscribe();
        let token = self.runtime_token.clone();

        let handle = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    msg = rx.recv() => match msg {
                        Ok(ev) => set.emit_arc(Arc::new(ev)),
                        Err(broadcast::error::RecvError::Lagged(skipped)) => {
                            warn!(skipped, "subscriber listener lagged behind the bus");
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                }
            }

            // deliver what was published before the cancel
            loop {
                match rx.try_recv() {
                    Ok(ev) => set.emit_arc(Arc::new(ev)),
                    Err(broadcast::error::TryRecvError::Lagged(_)) => continue,
                    Err(_) => break,
                }
            }
            set.shutdown().await;
        });
        *self.listener.lock() = Some(handle);
    }

    /// Marks the facade `Ready`; the last of `touch` and `teardown` decides the state.
    fn touch(&self) {
        self.state.store(FacadeState::Ready.as_u8(), Ordering::Release);
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FacadeState {
        FacadeState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn model(&self) -> &Arc<Model> {
        &self.model
    }

    pub fn controller(&self) -> &Arc<Controller<K>> {
        &self.controller
    }

    pub fn notifier(&self) -> &Arc<Notifier<K>> {
        &self.notifier
    }

    pub fn view(&self) -> &Arc<View<K>> {
        &self.view
    }

    /// Returns a receiver of diagnostics events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    // === Notifications ===

    /// Sends a notification with no sender and no payload.
    pub fn send_notification(&self, kind: K) {
        self.notify(Notification::new(kind));
    }

    /// Sends a notification carrying `payload`.
    pub fn send_notification_with<T: Any + Send + Sync>(&self, kind: K, payload: T) {
        self.notify(Notification::new(kind).with_payload(payload));
    }

    /// Sends a notification carrying both a sender handle and `payload`.
    pub fn send_notification_from<T: Any + Send + Sync>(&self, kind: K, sender: Body, payload: T) {
        self.notify(
            Notification::new(kind)
                .with_sender(sender)
                .with_payload(payload),
        );
    }

    /// Delivers a prebuilt notification: observers first, then the command for its kind.
    pub fn notify(&self, notification: Notification<K>) {
        self.touch();
        trace!(kind = ?notification.kind(), seq = notification.seq(), "sending notification");
        self.notifier.notify_observers(&notification);
    }

    // === Commands ===

    /// Binds `command` to `kind`, returning the command it replaced.
    pub fn register_command(&self, kind: K, command: CommandRef<K>) -> Option<CommandRef<K>> {
        self.touch();
        self.controller.register_command(kind, command)
    }

    pub fn remove_command(&self, kind: K) -> Option<CommandRef<K>> {
        self.touch();
        self.controller.remove_command(kind)
    }

    pub fn has_command(&self, kind: K) -> bool {
        self.controller.has_command(kind)
    }

    pub fn get_command(&self, kind: K) -> Option<CommandRef<K>> {
        self.controller.get_command(kind)
    }

    // === Mediators ===

    /// Registers a mediator and subscribes it to its interests.
    ///
    /// # Errors
    /// [`MvcError::DuplicateMediator`] if the name is taken.
    pub fn register_mediator(&self, mediator: MediatorRef<K>) -> Result<(), MvcError> {
        self.touch();
        self.view.register_mediator(mediator)
    }

    pub fn retrieve_mediator(&self, name: &str) -> Option<MediatorRef<K>> {
        self.view.retrieve_mediator(name)
    }

    pub fn has_mediator(&self, name: &str) -> bool {
        self.view.has_mediator(name)
    }

    pub fn remove_mediator(&self, name: &str) -> Option<MediatorRef<K>> {
        self.touch();
        self.view.remove_mediator(name)
    }

    // === Proxies ===

    /// Registers a proxy under its name.
    ///
    /// # Errors
    /// [`MvcError::DuplicateProxy`] if the name is taken.
    pub fn register_proxy<P: Proxy>(&self, proxy: Arc<P>) -> Result<(), MvcError> {
        self.touch();
        self.model.register_proxy(proxy)
    }

    pub fn retrieve_proxy(&self, name: &str) -> Option<ProxyRef> {
        self.model.retrieve_proxy(name)
    }

    /// Returns the proxy called `name` as its concrete type.
    pub fn retrieve_proxy_as<T: Proxy>(&self, name: &str) -> Option<Arc<T>> {
        self.model.retrieve_proxy_as::<T>(name)
    }

    pub fn has_proxy(&self, name: &str) -> bool {
        self.model.has_proxy(name)
    }

    pub fn remove_proxy(&self, name: &str) -> Option<ProxyRef> {
        self.touch();
        self.model.remove_proxy(name)
    }

    // === Raw observers ===

    /// Subscribes `observer` to `kind`. Registering the same observer twice delivers twice.
    pub fn register_observer(&self, kind: K, observer: ObserverRef<K>) {
        self.touch();
        self.notifier.register_observer(kind, observer);
    }

    /// Removes the first subscription of `observer` to `kind`.
    pub fn remove_observer(&self, kind: K, observer: &ObserverRef<K>) -> bool {
        self.touch();
        self.notifier.remove_observer(kind, observer)
    }

    pub fn has_observers(&self, kind: K) -> bool {
        self.notifier.has_observers(kind)
    }

    // === Lifecycle ===

    /// Empties every registry and moves the facade to [`FacadeState::TornDown`].
    ///
    /// Mediators go first (per [`TeardownPolicy`](crate::TeardownPolicy)), then the
    /// remaining observer subscriptions, command bindings and proxies. Under
    /// [`FailurePolicy::Isolate`](crate::FailurePolicy) a panicking `on_remove`
    /// hook is reported and the teardown still runs to the end.
    pub fn teardown(&self) {
        let mediators = self.view.teardown();
        self.notifier.clear();
        self.controller.clear();
        let proxies = self.model.clear();

        self.state
            .store(FacadeState::TornDown.as_u8(), Ordering::Release);
        info!(mediators, proxies, "facade torn down");
        self.bus.publish(
            Event::new(EventKind::TornDown)
                .with_reason(format!("mediators={mediators} proxies={proxies}")),
        );
    }

    /// Stops the diagnostics subscriber listener, waiting for queued events to be handled.
    ///
    /// No-op for a facade without subscribers. Registries keep working afterwards.
    pub async fn shutdown(&self) {
        self.runtime_token.cancel();
        let handle = self.listener.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "subscriber listener ended abnormally");
            }
        }
    }
}

impl<K: NotificationKind> Drop for Facade<K> {
    fn drop(&mut self) {
        self.runtime_token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{CommandFn, Mediator, Observer, ObserverFn};
    use crate::policies::{FailurePolicy, TeardownPolicy};
    use std::sync::Weak;
    use std::sync::atomic::AtomicUsize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Note {
        Startup,
        ScoreChanged,
        LivesChanged,
        Paused,
        LevelLoaded,
    }

    #[derive(Default)]
    struct Hud {
        hits: AtomicUsize,
        removed: AtomicUsize,
    }

    impl Observer<Note> for Hud {
        fn on_notify(&self, _n: &Notification<Note>) {
            self.hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    impl Mediator<Note> for Hud {
        fn name(&self) -> &str {
            "hud"
        }

        fn notification_interests(&self) -> Vec<Note> {
            vec![Note::ScoreChanged, Note::LivesChanged]
        }

        fn on_remove(&self) {
            self.removed.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, tag: &'static str) -> ObserverRef<Note> {
        let log = log.clone();
        ObserverFn::arc(tag, move |_: &Notification<Note>| log.lock().push(tag))
    }

    #[test]
    fn test_send_with_nothing_registered_returns() {
        let facade = Facade::<Note>::new(Config::default());
        facade.send_notification(Note::Startup);
        assert!(!facade.has_observers(Note::Startup));
        assert!(!facade.has_command(Note::Startup));
    }

    #[test]
    fn test_observers_in_registration_order() {
        let facade = Facade::<Note>::new(Config::default());
        let log = Arc::new(Mutex::new(Vec::new()));
        let a = recorder(&log, "a");
        let b = recorder(&log, "b");

        facade.register_observer(Note::Paused, a.clone());
        facade.register_observer(Note::Paused, b.clone());
        facade.register_observer(Note::Paused, a.clone());
        facade.send_notification(Note::Paused);
        assert_eq!(*log.lock(), vec!["a", "b", "a"]);

        log.lock().clear();
        assert!(facade.remove_observer(Note::Paused, &a));
        facade.send_notification(Note::Paused);
        assert_eq!(*log.lock(), vec!["b", "a"]);

        assert!(facade.remove_observer(Note::Paused, &a));
        assert!(facade.remove_observer(Note::Paused, &b));
        assert!(!facade.has_observers(Note::Paused));
    }

    #[test]
    fn test_mediator_interests_and_removal() {
        let facade = Facade::<Note>::new(Config::default());
        let hud = Arc::new(Hud::default());
        facade.register_mediator(hud.clone()).expect("register");

        facade.send_notification(Note::ScoreChanged);
        facade.send_notification(Note::LivesChanged);
        facade.send_notification(Note::Paused);
        assert_eq!(hud.hits.load(Ordering::SeqCst), 2);

        assert!(facade.remove_mediator("hud").is_some());
        facade.send_notification(Note::ScoreChanged);
        facade.send_notification(Note::LivesChanged);
        assert_eq!(hud.hits.load(Ordering::SeqCst), 2);
        assert_eq!(hud.removed.load(Ordering::SeqCst), 1);
        assert!(!facade.has_observers(Note::ScoreChanged));
    }

    #[test]
    fn test_duplicate_mediator_keeps_original() {
        let facade = Facade::<Note>::new(Config::default());
        let first = Arc::new(Hud::default());
        let second = Arc::new(Hud::default());

        facade.register_mediator(first.clone()).expect("register");
        let err = facade.register_mediator(second.clone()).unwrap_err();
        assert_eq!(err, MvcError::DuplicateMediator { name: "hud".into() });

        let kept = facade.retrieve_mediator("hud").expect("kept");
        let kept: ObserverRef<Note> = kept;
        let original: ObserverRef<Note> = first.clone();
        assert!(crate::handlers::same_observer(&kept, &original));

        facade.send_notification(Note::ScoreChanged);
        assert_eq!(first.hits.load(Ordering::SeqCst), 1);
        assert_eq!(second.hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_command_replacement_and_payload() {
        let facade = Facade::<Note>::new(Config::default());
        let first = Arc::new(AtomicUsize::new(0));
        let levels = Arc::new(Mutex::new(Vec::new()));

        let c1 = {
            let first = first.clone();
            CommandFn::arc("load_v1", move |_: &Notification<Note>| {
                first.fetch_add(1, Ordering::SeqCst);
            })
        };
        let c2 = {
            let levels = levels.clone();
            CommandFn::arc("load_v2", move |n: &Notification<Note>| {
                if let Some(level) = n.payload_as::<u32>() {
                    levels.lock().push(*level);
                }
            })
        };

        facade.register_command(Note::LevelLoaded, c1);
        facade.send_notification_with(Note::LevelLoaded, 1u32);
        facade.register_command(Note::LevelLoaded, c2);
        facade.send_notification_with(Note::LevelLoaded, 2u32);

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(*levels.lock(), vec![2]);
    }

    #[test]
    fn test_observers_run_before_command() {
        let facade = Facade::<Note>::new(Config::default());
        let log = Arc::new(Mutex::new(Vec::new()));
        facade.register_observer(Note::Startup, recorder(&log, "observer"));
        let cmd_log = log.clone();
        facade.register_command(
            Note::Startup,
            CommandFn::arc("startup", move |_: &Notification<Note>| {
                cmd_log.lock().push("command");
            }),
        );

        facade.send_notification(Note::Startup);
        assert_eq!(*log.lock(), vec!["observer", "command"]);
    }

    #[test]
    fn test_sender_reaches_observer() {
        let facade = Facade::<Note>::new(Config::default());
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        facade.register_observer(
            Note::ScoreChanged,
            ObserverFn::arc("score", move |n: &Notification<Note>| {
                let from = n.sender_as::<&'static str>().copied();
                let score = n.payload_as::<u64>().copied();
                *sink.lock() = Some((from, score));
            }),
        );

        let sender: Body = Arc::new("player-1");
        facade.send_notification_from(Note::ScoreChanged, sender, 500u64);
        assert_eq!(*seen.lock(), Some((Some("player-1"), Some(500))));
    }

    #[test]
    fn test_state_transitions_keep_instances() {
        let facade = Facade::<Note>::new(Config::default());
        assert_eq!(facade.state(), FacadeState::Initializing);

        let controller = facade.controller().clone();
        let notifier = facade.notifier().clone();
        facade.register_mediator(Arc::new(Hud::default())).expect("register");
        assert_eq!(facade.state(), FacadeState::Ready);

        facade.teardown();
        assert_eq!(facade.state(), FacadeState::TornDown);
        assert!(facade.view().is_empty());

        facade.send_notification(Note::Startup);
        assert_eq!(facade.state(), FacadeState::Ready);
        assert!(Arc::ptr_eq(&controller, facade.controller()));
        assert!(Arc::ptr_eq(&notifier, facade.notifier()));
    }

    #[test]
    fn test_teardown_empties_everything() {
        struct Score;
        impl Proxy for Score {
            fn name(&self) -> &str {
                "score"
            }
        }

        let facade = Facade::<Note>::new(Config::default());
        let mut rx = facade.subscribe();
        let hud = Arc::new(Hud::default());
        facade.register_mediator(hud.clone()).expect("register");
        facade.register_observer(Note::Paused, ObserverFn::arc("p", |_: &Notification<Note>| {}));
        facade.register_command(Note::Startup, CommandFn::arc("s", |_: &Notification<Note>| {}));
        facade.register_proxy(Arc::new(Score)).expect("proxy");

        facade.teardown();

        assert!(!facade.has_mediator("hud"));
        assert!(!facade.has_observers(Note::Paused));
        assert!(!facade.has_observers(Note::ScoreChanged));
        assert!(!facade.has_command(Note::Startup));
        assert!(!facade.has_proxy("score"));
        assert_eq!(hud.removed.load(Ordering::SeqCst), 1);

        let last = std::iter::from_fn(|| rx.try_recv().ok())
            .last()
            .expect("events");
        assert_eq!(last.kind, EventKind::TornDown);
        assert_eq!(last.reason.as_deref(), Some("mediators=1 proxies=1"));
    }

    #[test]
    fn test_clear_only_view_teardown_leaves_subscriptions() {
        let cfg = Config {
            teardown: TeardownPolicy::ClearOnly,
            ..Config::default()
        };
        let facade = Facade::<Note>::new(cfg);
        let hud = Arc::new(Hud::default());
        facade.register_mediator(hud.clone()).expect("register");

        facade.view().teardown();
        assert!(!facade.has_mediator("hud"));
        facade.send_notification(Note::ScoreChanged);
        assert_eq!(hud.hits.load(Ordering::SeqCst), 1);
        assert_eq!(hud.removed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_clear_only_facade_teardown_skips_remove_hooks() {
        let cfg = Config {
            teardown: TeardownPolicy::ClearOnly,
            ..Config::default()
        };
        let facade = Facade::<Note>::new(cfg);
        let mut rx = facade.subscribe();
        let hud = Arc::new(Hud::default());
        facade.register_mediator(hud.clone()).expect("register");

        facade.teardown();
        assert!(!facade.has_mediator("hud"));
        assert!(!facade.has_observers(Note::ScoreChanged));
        assert_eq!(hud.removed.load(Ordering::SeqCst), 0);

        facade.send_notification(Note::ScoreChanged);
        assert_eq!(hud.hits.load(Ordering::SeqCst), 0);
        assert!(
            std::iter::from_fn(|| rx.try_recv().ok()).all(|ev| ev.kind != EventKind::MediatorRemoved)
        );
    }

    struct Fragile;

    impl Observer<Note> for Fragile {
        fn on_notify(&self, _n: &Notification<Note>) {}
    }

    impl Mediator<Note> for Fragile {
        fn name(&self) -> &str {
            "a_fragile"
        }

        fn notification_interests(&self) -> Vec<Note> {
            vec![Note::Paused]
        }

        fn on_remove(&self) {
            panic!("scene already unloaded");
        }
    }

    #[test]
    fn test_panicking_remove_hook_still_tears_everything_down() {
        let facade = Facade::<Note>::new(Config::default());
        let mut rx = facade.subscribe();
        let hud = Arc::new(Hud::default());
        facade.register_mediator(Arc::new(Fragile)).expect("register");
        facade.register_mediator(hud.clone()).expect("register");
        facade.register_observer(Note::Startup, ObserverFn::arc("o", |_: &Notification<Note>| {}));
        facade.register_command(Note::Startup, CommandFn::arc("c", |_: &Notification<Note>| {}));

        facade.teardown();

        assert_eq!(facade.state(), FacadeState::TornDown);
        assert!(facade.view().is_empty());
        assert!(!facade.has_observers(Note::Startup));
        assert!(!facade.has_observers(Note::Paused));
        assert!(!facade.has_command(Note::Startup));
        assert_eq!(hud.removed.load(Ordering::SeqCst), 1);

        let kinds: Vec<EventKind> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|ev| ev.kind)
            .collect();
        assert!(kinds.contains(&EventKind::HookFailed));
        assert_eq!(kinds.last(), Some(&EventKind::TornDown));
    }

    #[test]
    fn test_last_of_teardown_and_operation_decides_state() {
        let facade = Facade::<Note>::new(Config::default());

        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..200 {
                        facade.teardown();
                        facade.send_notification(Note::Startup);
                    }
                });
            }
        });
        facade.send_notification(Note::Startup);
        assert_eq!(facade.state(), FacadeState::Ready);

        facade.teardown();
        assert_eq!(facade.state(), FacadeState::TornDown);
    }

    #[test]
    fn test_isolated_observer_failure_does_not_stop_delivery() {
        let facade = Facade::<Note>::new(Config::default());
        let mut rx = facade.subscribe();
        let log = Arc::new(Mutex::new(Vec::new()));

        facade.register_observer(
            Note::Paused,
            ObserverFn::arc("broken", |_: &Notification<Note>| panic!("no overlay")),
        );
        facade.register_observer(Note::Paused, recorder(&log, "after"));
        let cmd_log = log.clone();
        facade.register_command(
            Note::Paused,
            CommandFn::arc("pause", move |_: &Notification<Note>| {
                cmd_log.lock().push("command");
            }),
        );

        facade.send_notification(Note::Paused);
        assert_eq!(*log.lock(), vec!["after", "command"]);

        let failure = std::iter::from_fn(|| rx.try_recv().ok())
            .find(|ev| ev.kind == EventKind::ObserverFailed)
            .expect("failure event");
        assert_eq!(failure.name.as_deref(), Some("broken"));
        assert_eq!(failure.reason.as_deref(), Some("no overlay"));
    }

    #[test]
    fn test_propagate_policy_reaches_caller() {
        let cfg = Config {
            failure: FailurePolicy::Propagate,
            ..Config::default()
        };
        let facade = Facade::<Note>::new(cfg);
        facade.register_command(
            Note::Startup,
            CommandFn::arc("broken", |_: &Notification<Note>| panic!("boot failed")),
        );

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            facade.send_notification(Note::Startup);
        }));
        assert!(result.is_err());
    }

    struct Spawner {
        name: &'static str,
        facade: Weak<Facade<Note>>,
        child: Option<&'static str>,
    }

    impl Observer<Note> for Spawner {
        fn on_notify(&self, _n: &Notification<Note>) {}
    }

    impl Mediator<Note> for Spawner {
        fn name(&self) -> &str {
            self.name
        }

        fn notification_interests(&self) -> Vec<Note> {
            vec![Note::LevelLoaded]
        }

        fn on_register(&self) {
            let (Some(child), Some(facade)) = (self.child, self.facade.upgrade()) else {
                return;
            };
            let _ = facade.register_mediator(Arc::new(Spawner {
                name: child,
                facade: self.facade.clone(),
                child: None,
            }));
        }
    }

    #[test]
    fn test_observer_registering_nested_mediators() {
        let facade = Facade::<Note>::new(Config::default());
        let weak = Arc::downgrade(&facade);
        facade.register_observer(
            Note::LevelLoaded,
            ObserverFn::arc("loader", move |_: &Notification<Note>| {
                if let Some(f) = weak.upgrade() {
                    let _ = f.register_mediator(Arc::new(Spawner {
                        name: "level",
                        facade: weak.clone(),
                        child: Some("minimap"),
                    }));
                }
            }),
        );

        facade.send_notification(Note::LevelLoaded);
        assert!(facade.has_mediator("level"));
        assert!(facade.has_mediator("minimap"));
        assert_eq!(facade.notifier().observer_count(Note::LevelLoaded), 3);
    }

    #[test]
    fn test_concurrent_sends_and_registrations() {
        let facade = Facade::<Note>::new(Config::default());
        let hits = Arc::new(AtomicUsize::new(0));

        std::thread::scope(|s| {
            for t in 0..4 {
                let facade = &facade;
                let hits = hits.clone();
                s.spawn(move || {
                    for i in 0..200 {
                        if i % 10 == 0 {
                            let hits = hits.clone();
                            facade.register_observer(
                                Note::ScoreChanged,
                                ObserverFn::arc("counter", move |_: &Notification<Note>| {
                                    hits.fetch_add(1, Ordering::SeqCst);
                                }),
                            );
                        }
                        facade.send_notification_with(Note::ScoreChanged, (t, i));
                        if i == 100 {
                            let _ = facade.register_mediator(Arc::new(Hud::default()));
                        }
                    }
                });
            }
        });

        assert_eq!(facade.notifier().observer_count(Note::ScoreChanged), 4 * 20 + 1);
        assert!(hits.load(Ordering::SeqCst) > 0);
        assert!(facade.has_mediator("hud"));
    }
}
