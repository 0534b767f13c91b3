//! # mvcore
//!
//! **mvcore** is an in-process Model-View-Controller mediation framework.
//!
//! It routes typed notifications from senders to observers, mediators and
//! commands through a single [`Facade`]. Delivery is synchronous, on the
//! calling thread, in registration order. Registries may be changed from any
//! thread, including from inside a callback that is being delivered.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  send_notification(kind, payload)
//!            │
//!            ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Facade (composition root)                                        │
//! │  - Model      name → Proxy                                        │
//! │  - Controller kind → Command                                      │
//! │  - Notifier   kind → [Observer]   (holds the Controller)          │
//! │  - View       name → Mediator     (subscribes via the Notifier)   │
//! └──────┬────────────────────────────────────────────────────────────┘
//!        ▼
//!  Notifier::notify_observers(&n)
//!    ├─► lock, clone observers of n.kind, unlock
//!    ├─► observer[0].on_notify(&n)     (no lock held)
//!    ├─► observer[1].on_notify(&n)     mediators are observers too
//!    ├─► ...
//!    └─► Controller::execute_command(&n)   (at most one command)
//!
//!  Registries ── publish(Event) ──► Bus (broadcast channel)
//!                                      │
//!                    ┌─────────────────┴──────────────────┐
//!                    ▼                                    ▼
//!           Facade::subscribe()                  subscriber listener
//!           (any receiver)                       (FacadeBuilder::build)
//!                                                         │
//!                                                   SubscriberSet
//!                                               ┌─────────┼─────────┐
//!                                               ▼         ▼         ▼
//!                                            sub1      sub2   ...  subN
//! ```
//!
//! ### Mediator lifecycle
//! ```text
//! register_mediator(m)
//!   ├─ name taken? ──► Err(DuplicateMediator), original untouched
//!   ├─ interests = m.notification_interests()
//!   ├─ Notifier::register_observer(k, m) for k in interests
//!   └─ m.on_register()
//!
//! remove_mediator(name) / teardown() with TeardownPolicy::Cascade
//!   ├─ Notifier::remove_observer(k, m) for k in captured interests
//!   └─ m.on_remove()
//! ```
//!
//! ## Features
//! | Area              | Description                                                   | Key types / traits                         |
//! |-------------------|---------------------------------------------------------------|--------------------------------------------|
//! | **Facade**        | Single entry point, lifecycle state, teardown.                | [`Facade`], [`FacadeBuilder`]              |
//! | **Notifications** | Kind + optional sender + optional payload.                    | [`Notification`], [`NotificationKind`]     |
//! | **Handlers**      | Observers, commands, mediators and proxies.                   | [`Observer`], [`Command`], [`Mediator`], [`Proxy`] |
//! | **Policies**      | Panic isolation and mediator teardown behaviour.              | [`FailurePolicy`], [`TeardownPolicy`]      |
//! | **Diagnostics**   | Framework events and async subscribers.                       | [`Event`], [`Bus`], [`Subscribe`]          |
//! | **Errors**        | Typed registration errors.                                    | [`MvcError`]                               |
//! | **Configuration** | Centralize facade settings.                                   | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//! use mvcore::{Config, CommandFn, Facade, Mediator, Notification, Observer, Proxy};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Note { Startup, AddPoints, ScoreChanged }
//!
//! #[derive(Default)]
//! struct ScoreProxy { score: AtomicU64 }
//!
//! impl Proxy for ScoreProxy {
//!     fn name(&self) -> &str { "score" }
//! }
//!
//! #[derive(Default)]
//! struct Hud { shown: AtomicU64 }
//!
//! impl Observer<Note> for Hud {
//!     fn on_notify(&self, n: &Notification<Note>) {
//!         if let Some(score) = n.payload_as::<u64>() {
//!             self.shown.store(*score, Ordering::SeqCst);
//!         }
//!     }
//! }
//!
//! impl Mediator<Note> for Hud {
//!     fn name(&self) -> &str { "hud" }
//!     fn notification_interests(&self) -> Vec<Note> { vec![Note::ScoreChanged] }
//! }
//!
//! let facade = Facade::<Note>::new(Config::default());
//! facade.register_proxy(Arc::new(ScoreProxy::default())).unwrap();
//! let hud = Arc::new(Hud::default());
//! facade.register_mediator(hud.clone()).unwrap();
//!
//! let weak = Arc::downgrade(&facade);
//! facade.register_command(
//!     Note::AddPoints,
//!     CommandFn::arc("add_points", move |n: &Notification<Note>| {
//!         let Some(facade) = weak.upgrade() else { return };
//!         let Some(points) = n.payload_as::<u64>() else { return };
//!         if let Some(proxy) = facade.retrieve_proxy_as::<ScoreProxy>("score") {
//!             let total = proxy.score.fetch_add(*points, Ordering::SeqCst) + points;
//!             facade.send_notification_with(Note::ScoreChanged, total);
//!         }
//!     }),
//! );
//!
//! facade.send_notification(Note::Startup);
//! facade.send_notification_with(Note::AddPoints, 10u64);
//! facade.send_notification_with(Note::AddPoints, 5u64);
//! assert_eq!(hud.shown.load(Ordering::SeqCst), 15);
//!
//! facade.teardown();
//! assert!(!facade.has_mediator("hud"));
//! ```

mod config;
mod core;
mod error;
mod events;
mod handlers;
mod notification;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{Controller, Facade, FacadeBuilder, FacadeState, Model, Notifier, View};
pub use config::Config;
pub use error::MvcError;
pub use events::{Bus, Event, EventKind};
pub use handlers::{
    Command, CommandFn, CommandRef, MacroCommand, Mediator, MediatorRef, Observer, ObserverFn,
    ObserverRef, Proxy, ProxyRef, same_observer,
};
pub use notification::{Body, Notification, NotificationKind};
pub use policies::{FailurePolicy, TeardownPolicy};
pub use subscribers::{Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
