//! # Mediator capability.
//!
//! A [`Mediator`] is a named [`Observer`] that binds a UI or scene component to
//! the notification bus. When registered with the [`View`](crate::View) it
//! declares the kinds it is interested in; the view subscribes it to each of
//! them and unsubscribes it again on removal.
//!
//! ## Lifecycle
//! ```text
//! View::register_mediator(m)
//!   ├─► m.notification_interests()      (no lock held)
//!   ├─► store by m.name(), subscribe to every interest
//!   └─► m.on_register()                 (no lock held)
//!
//! View::remove_mediator(name)
//!   ├─► unsubscribe from the interests captured at registration
//!   └─► m.on_remove()                   (no lock held)
//! ```
//!
//! Hooks may register or remove other mediators; no registry lock is held
//! while they run.

use std::sync::Arc;

use super::observer::Observer;
use crate::notification::NotificationKind;

/// Named observer with declared interests and lifecycle hooks.
///
/// ## Example
/// ```rust
/// use mvcore::{Mediator, Notification, Observer};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Note { ScoreChanged, GameOver }
///
/// struct Hud;
///
/// impl Observer<Note> for Hud {
///     fn on_notify(&self, n: &Notification<Note>) {
///         match n.kind() {
///             Note::ScoreChanged => { /* redraw score */ }
///             Note::GameOver => { /* show banner */ }
///         }
///     }
/// }
///
/// impl Mediator<Note> for Hud {
///     fn name(&self) -> &str { "hud" }
///     fn notification_interests(&self) -> Vec<Note> {
///         vec![Note::ScoreChanged, Note::GameOver]
///     }
/// }
/// # assert_eq!(Hud.name(), "hud");
/// ```
pub trait Mediator<K: NotificationKind>: Observer<K> {
    /// Unique name; the primary key in the view.
    fn name(&self) -> &str;

    /// Kinds this mediator wants delivered. Queried once, at registration.
    fn notification_interests(&self) -> Vec<K> {
        Vec::new()
    }

    /// Called after the mediator has been registered and subscribed.
    fn on_register(&self) {}

    /// Called after the mediator has been removed and unsubscribed.
    fn on_remove(&self) {}
}

/// Shared mediator handle.
pub type MediatorRef<K> = Arc<dyn Mediator<K>>;
