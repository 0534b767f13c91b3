//! # Failure policy for user callbacks.
//!
//! [`FailurePolicy`] decides what happens when an observer, mediator or command
//! panics while a notification is being delivered.
//!
//! - [`FailurePolicy::Isolate`] the panic is caught, logged and reported as a
//!   diagnostics event; delivery continues with the next callback (default).
//! - [`FailurePolicy::Propagate`] the panic unwinds into the caller of
//!   `send_notification`; remaining observers and the command are skipped.
//!
//! ## Ordering
//! ```text
//! observer 1 ─► observer 2 (panics) ─► observer 3 ─► command
//!                    │
//!        Isolate:    └─► warn! + ObserverFailed, continue
//!        Propagate:  └─► unwind to caller
//! ```
//!
//! Observers always run before the command, so a failing command never
//! prevents observers from having seen the notification.
//!
//! The same policy guards mediator and proxy `on_register` / `on_remove`
//! hooks. Under `Isolate` a panicking hook is reported as `HookFailed` and the
//! registration, removal or teardown it belongs to still completes.

/// Policy controlling how panicking callbacks are handled during delivery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Catch the panic per callback and keep delivering (default).
    #[default]
    Isolate,
    /// Let the panic unwind to the sender.
    Propagate,
}

impl FailurePolicy {
    /// Returns `true` if panics are caught per callback.
    #[inline]
    pub fn isolates(&self) -> bool {
        matches!(self, FailurePolicy::Isolate)
    }
}
