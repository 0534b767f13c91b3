//! # Observer capability and closure-backed observer.
//!
//! An [`Observer`] receives every notification of the kinds it was registered
//! for. Observers are shared as [`ObserverRef`] (`Arc<dyn Observer<K>>`) and
//! compared by **identity**: two handles are the same observer when they point
//! to the same allocation, see [`same_observer`].
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use mvcore::{Notification, Observer, ObserverFn, ObserverRef};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Note { Tick }
//!
//! let ticks = Arc::new(AtomicUsize::new(0));
//! let seen = ticks.clone();
//! let obs: ObserverRef<Note> = ObserverFn::arc("ticker", move |_n: &Notification<Note>| {
//!     seen.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! obs.on_notify(&Notification::new(Note::Tick));
//! assert_eq!(ticks.load(Ordering::SeqCst), 1);
//! assert_eq!(obs.label(), "ticker");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::notification::{Notification, NotificationKind};

/// Receiver of broadcast notifications.
///
/// Called synchronously on the sending thread, with no registry lock held:
/// implementations may register or remove observers, mediators and commands
/// from inside `on_notify`.
pub trait Observer<K: NotificationKind>: Send + Sync + 'static {
    /// Handles one notification.
    fn on_notify(&self, notification: &Notification<K>);

    /// Label used in logs and diagnostics events.
    ///
    /// The default uses `type_name::<Self>()`; override it when possible.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared observer handle.
pub type ObserverRef<K> = Arc<dyn Observer<K>>;

/// Returns `true` if both handles refer to the same observer instance.
///
/// Compares data pointers only, so a mediator upcast to an observer is still
/// recognised as itself.
#[inline]
pub fn same_observer<K: NotificationKind>(a: &ObserverRef<K>, b: &ObserverRef<K>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Closure-backed observer.
pub struct ObserverFn<F> {
    label: Cow<'static, str>,
    f: F,
}

impl<F> ObserverFn<F> {
    /// Creates a new closure-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need an [`ObserverRef`].
    pub fn new(label: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }

    /// Creates the observer as a shared handle.
    pub fn arc(label: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(label, f))
    }
}

impl<K, F> Observer<K> for ObserverFn<F>
where
    K: NotificationKind,
    F: Fn(&Notification<K>) + Send + Sync + 'static,
{
    fn on_notify(&self, notification: &Notification<K>) {
        (self.f)(notification)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Note {
        Tick,
    }

    #[test]
    fn test_identity_is_per_allocation() {
        let a: ObserverRef<Note> = ObserverFn::arc("a", |_: &Notification<Note>| {});
        let b: ObserverRef<Note> = ObserverFn::arc("a", |_: &Notification<Note>| {});
        let a2 = a.clone();

        assert!(same_observer(&a, &a2));
        assert!(!same_observer(&a, &b));
    }

    #[test]
    fn test_default_label_is_type_name() {
        struct Quiet;
        impl Observer<Note> for Quiet {
            fn on_notify(&self, _: &Notification<Note>) {}
        }
        assert!(Quiet.label().ends_with("Quiet"));
    }
}
