//! # Framework events published by the registries.
//!
//! The [`EventKind`] enum classifies events across three categories:
//! - **Registration events**: mediators, commands and proxies added or removed
//! - **Failure events**: isolated observer/command/hook panics, subscriber problems
//! - **Lifecycle events**: facade teardown
//!
//! The [`Event`] struct carries metadata such as the entry name, the
//! notification kind involved and a reason string.
//!
//! ## Example
//! ```rust
//! use mvcore::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::ObserverFailed)
//!     .with_name("HudMediator")
//!     .with_notification("ScoreChanged")
//!     .with_reason("index out of bounds");
//!
//! assert_eq!(ev.kind, EventKind::ObserverFailed);
//! assert_eq!(ev.name.as_deref(), Some("HudMediator"));
//! assert!(ev.is_failure());
//! ```

use std::fmt::Debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of framework events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Failure events ===
    /// An observer (or mediator) panicked while handling a notification.
    ///
    /// Sets:
    /// - `name`: observer label
    /// - `notification`: notification kind
    /// - `reason`: panic message
    ObserverFailed,

    /// A command panicked while executing.
    ///
    /// Sets:
    /// - `name`: command label
    /// - `notification`: notification kind
    /// - `reason`: panic message
    CommandFailed,

    /// A mediator or proxy lifecycle hook (`on_register` / `on_remove`) panicked.
    ///
    /// Sets:
    /// - `name`: mediator or proxy name
    /// - `reason`: `"<hook>: <panic message>"`
    HookFailed,

    /// Diagnostics subscriber panicked during event processing.
    ///
    /// Sets:
    /// - `name`: subscriber name
    /// - `reason`: panic message
    SubscriberPanicked,

    /// Diagnostics subscriber dropped an event (queue full or worker closed).
    ///
    /// Sets:
    /// - `name`: subscriber name
    /// - `reason`: "full" or "closed"
    SubscriberOverflow,

    // === Registration events ===
    /// A mediator was registered.
    ///
    /// Sets:
    /// - `name`: mediator name
    MediatorRegistered,

    /// A mediator registration was rejected because the name is taken.
    ///
    /// Sets:
    /// - `name`: mediator name
    MediatorRejected,

    /// A mediator was removed.
    ///
    /// Sets:
    /// - `name`: mediator name
    MediatorRemoved,

    /// A command was bound to a notification kind (possibly replacing another).
    ///
    /// Sets:
    /// - `name`: command label
    /// - `notification`: notification kind
    CommandRegistered,

    /// A command binding was removed.
    ///
    /// Sets:
    /// - `name`: command label
    /// - `notification`: notification kind
    CommandRemoved,

    /// A proxy was registered.
    ///
    /// Sets:
    /// - `name`: proxy name
    ProxyRegistered,

    /// A proxy registration was rejected because the name is taken.
    ///
    /// Sets:
    /// - `name`: proxy name
    ProxyRejected,

    /// A proxy was removed.
    ///
    /// Sets:
    /// - `name`: proxy name
    ProxyRemoved,

    // === Lifecycle events ===
    /// The facade cleared all of its registries.
    TornDown,
}

/// Framework event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Name of the mediator, proxy, command, observer or subscriber involved.
    pub name: Option<Arc<str>>,
    /// Notification kind involved, rendered with `Debug`.
    pub notification: Option<Arc<str>>,
    /// Human-readable reason (panic message, overflow details, etc.).
    pub reason: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            name: None,
            notification: None,
            reason: None,
        }
    }

    /// Attaches the name of the entry involved.
    #[inline]
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attaches the notification kind label.
    #[inline]
    pub fn with_notification(mut self, kind: impl Into<Arc<str>>) -> Self {
        self.notification = Some(kind.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a notification kind, rendered with `Debug`.
    #[inline]
    pub(crate) fn with_kind<K: Debug>(self, kind: &K) -> Self {
        self.with_notification(format!("{kind:?}"))
    }

    /// Creates an observer failure event.
    #[inline]
    pub(crate) fn observer_failed<K: Debug>(observer: &str, kind: &K, reason: String) -> Self {
        Event::new(EventKind::ObserverFailed)
            .with_name(observer)
            .with_kind(kind)
            .with_reason(reason)
    }

    /// Creates a command failure event.
    #[inline]
    pub(crate) fn command_failed<K: Debug>(command: &str, kind: &K, reason: String) -> Self {
        Event::new(EventKind::CommandFailed)
            .with_name(command)
            .with_kind(kind)
            .with_reason(reason)
    }

    /// Creates a lifecycle hook failure event.
    #[inline]
    pub(crate) fn hook_failed(owner: &str, hook: &'static str, reason: String) -> Self {
        Event::new(EventKind::HookFailed)
            .with_name(owner)
            .with_reason(format!("{hook}: {reason}"))
    }

    /// Creates a subscriber overflow event.
    #[inline]
    pub fn subscriber_overflow(subscriber: &'static str, reason: &'static str) -> Self {
        Event::new(EventKind::SubscriberOverflow)
            .with_name(subscriber)
            .with_reason(format!("subscriber={subscriber} reason={reason}"))
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &'static str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_name(subscriber)
            .with_reason(info)
    }

    /// Returns `true` for events that report a callback or subscriber failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(
            self.kind,
            EventKind::ObserverFailed
                | EventKind::CommandFailed
                | EventKind::HookFailed
                | EventKind::SubscriberPanicked
                | EventKind::SubscriberOverflow
        )
    }

    #[inline]
    pub fn is_subscriber_overflow(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberOverflow)
    }

    #[inline]
    pub fn is_subscriber_panicked(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberPanicked)
    }
}
