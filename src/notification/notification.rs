//! # Notification value.
//!
//! A [`Notification`] carries a kind, an optional sender and an optional
//! payload. It is built per send and is immutable afterwards: the builder
//! methods consume `self`, and delivery only ever hands out `&Notification`.
//!
//! Sender and payload are type-erased [`Body`] handles (`Arc<dyn Any>`);
//! receivers read them back with [`Notification::payload_as`] and
//! [`Notification::sender_as`].
//!
//! ## Ordering
//! Each notification gets a process-wide sequence number (`seq`) that
//! increases monotonically. It only serves to correlate log lines.
//!
//! ## Example
//! ```rust
//! use mvcore::Notification;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Note { ScoreChanged }
//!
//! let n = Notification::new(Note::ScoreChanged).with_payload(42u32);
//!
//! assert_eq!(n.kind(), Note::ScoreChanged);
//! assert_eq!(n.payload_as::<u32>(), Some(&42));
//! assert!(n.payload_as::<String>().is_none());
//! assert!(n.sender().is_none());
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use super::kind::NotificationKind;

/// Global sequence counter for notifications.
static NOTIFICATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Shared, type-erased sender or payload.
pub type Body = Arc<dyn Any + Send + Sync>;

/// A routed notification.
#[derive(Clone)]
pub struct Notification<K> {
    seq: u64,
    kind: K,
    sender: Option<Body>,
    payload: Option<Body>,
}

impl<K: NotificationKind> Notification<K> {
    /// Creates a notification of the given kind with no sender and no payload.
    pub fn new(kind: K) -> Self {
        Self {
            seq: NOTIFICATION_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            kind,
            sender: None,
            payload: None,
        }
    }

    /// Attaches a payload value.
    #[inline]
    pub fn with_payload<T: Any + Send + Sync>(self, payload: T) -> Self {
        self.with_payload_body(Arc::new(payload))
    }

    /// Attaches an already shared payload.
    #[inline]
    pub fn with_payload_body(mut self, payload: Body) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches the sender (typically an `Arc` of the mediator or proxy that sends).
    #[inline]
    pub fn with_sender(mut self, sender: Body) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Notification kind.
    #[inline]
    pub fn kind(&self) -> K {
        self.kind
    }

    /// Process-wide sequence number.
    #[inline]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    #[inline]
    pub fn sender(&self) -> Option<&Body> {
        self.sender.as_ref()
    }

    #[inline]
    pub fn payload(&self) -> Option<&Body> {
        self.payload.as_ref()
    }

    /// Returns the payload if it is a `T`.
    pub fn payload_as<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref()?.downcast_ref::<T>()
    }

    /// Returns the sender if it is a `T`.
    pub fn sender_as<T: Any>(&self) -> Option<&T> {
        self.sender.as_deref()?.downcast_ref::<T>()
    }
}

impl<K: fmt::Debug> fmt::Debug for Notification<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("seq", &self.seq)
            .field("kind", &self.kind)
            .field("has_sender", &self.sender.is_some())
            .field("has_payload", &self.payload.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    enum Note {
        Startup,
        Moved,
    }

    struct Player {
        id: u32,
    }

    #[test]
    fn test_sequence_increases() {
        let a = Notification::new(Note::Startup);
        let b = Notification::new(Note::Startup);
        assert!(b.seq() > a.seq());
    }

    #[test]
    fn test_sender_downcast() {
        let player: Body = Arc::new(Player { id: 7 });
        let n = Notification::new(Note::Moved)
            .with_sender(player)
            .with_payload((3i32, 4i32));

        assert_eq!(n.sender_as::<Player>().map(|p| p.id), Some(7));
        assert_eq!(n.payload_as::<(i32, i32)>(), Some(&(3, 4)));
        assert!(n.sender_as::<String>().is_none());
    }

    #[test]
    fn test_clone_shares_payload() {
        let n = Notification::new(Note::Moved).with_payload(String::from("north"));
        let c = n.clone();

        let (Some(a), Some(b)) = (n.payload(), c.payload()) else {
            panic!("payload missing");
        };
        assert!(Arc::ptr_eq(a, b));
        assert_eq!(c.seq(), n.seq());
    }

    #[test]
    fn test_debug_hides_bodies() {
        let n = Notification::new(Note::Startup).with_payload(1u8);
        let s = format!("{n:?}");
        assert!(s.contains("Startup"));
        assert!(s.contains("has_payload: true"));
    }
}
