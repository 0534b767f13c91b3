//! # Notification kinds.
//!
//! A kind identifies an event category. Applications declare a fieldless enum
//! and get [`NotificationKind`] for free through the blanket impl:
//!
//! ```rust
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! enum Note {
//!     Startup,
//!     ScoreChanged,
//! }
//!
//! fn assert_kind<K: mvcore::NotificationKind>() {}
//! assert_kind::<Note>();
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a notification category.
///
/// Totally ordered and hashable so it can key the observer and command maps;
/// `Debug` is used to label log lines and diagnostics events.
pub trait NotificationKind: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {}

impl<T> NotificationKind for T where T: Copy + Eq + Ord + Hash + Debug + Send + Sync + 'static {}
