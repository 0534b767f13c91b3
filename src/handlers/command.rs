//! # Command capability and closure-backed command.
//!
//! A [`Command`] is bound to exactly one notification kind in the
//! [`Controller`](crate::Controller) and runs after every observer of that kind
//! has been notified. The same instance is reused for every execution, so any
//! state it keeps must be behind its own synchronisation.
//!
//! Commands that need to talk back to the framework usually hold a
//! `Weak<Facade<K>>` captured when they are registered.

use std::borrow::Cow;
use std::sync::Arc;

use crate::notification::{Notification, NotificationKind};

/// Business-logic handler for one notification kind.
pub trait Command<K: NotificationKind>: Send + Sync + 'static {
    /// Executes the command for the given notification.
    fn execute(&self, notification: &Notification<K>);

    /// Label used in logs and diagnostics events.
    fn label(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared command handle.
pub type CommandRef<K> = Arc<dyn Command<K>>;

/// Closure-backed command.
///
/// ## Example
/// ```rust
/// use mvcore::{Command, CommandFn, CommandRef, Notification};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Note { Startup }
///
/// let cmd: CommandRef<Note> = CommandFn::arc("startup", |n: &Notification<Note>| {
///     assert_eq!(n.kind(), Note::Startup);
/// });
/// cmd.execute(&Notification::new(Note::Startup));
/// assert_eq!(cmd.label(), "startup");
/// ```
pub struct CommandFn<F> {
    label: Cow<'static, str>,
    f: F,
}

impl<F> CommandFn<F> {
    /// Creates a new closure-backed command.
    pub fn new(label: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            label: label.into(),
            f,
        }
    }

    /// Creates the command as a shared handle.
    pub fn arc(label: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(label, f))
    }
}

impl<K, F> Command<K> for CommandFn<F>
where
    K: NotificationKind,
    F: Fn(&Notification<K>) + Send + Sync + 'static,
{
    fn execute(&self, notification: &Notification<K>) {
        (self.f)(notification)
    }

    fn label(&self) -> &str {
        &self.label
    }
}
