//! # Composite command.
//!
//! [`MacroCommand`] runs a fixed list of sub-commands, in the order they were
//! added, against the same notification. It is itself a single [`Command`], so
//! it occupies one slot in the controller.
//!
//! Sub-commands are not isolated from each other: if one panics, the panic
//! reaches the controller, which applies its [`FailurePolicy`](crate::FailurePolicy)
//! to the macro command as a whole.

use std::borrow::Cow;
use std::sync::Arc;

use super::command::{Command, CommandRef};
use crate::notification::{Notification, NotificationKind};

/// Ordered sequence of commands executed as one.
///
/// ## Example
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use mvcore::{Command, CommandFn, MacroCommand, Notification};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// enum Note { Startup }
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let (l1, l2) = (log.clone(), log.clone());
///
/// let startup = MacroCommand::<Note>::new("startup")
///     .with(CommandFn::arc("model", move |_: &Notification<Note>| l1.lock().unwrap().push("model")))
///     .with(CommandFn::arc("view", move |_: &Notification<Note>| l2.lock().unwrap().push("view")));
///
/// startup.execute(&Notification::new(Note::Startup));
/// assert_eq!(*log.lock().unwrap(), vec!["model", "view"]);
/// ```
pub struct MacroCommand<K: NotificationKind> {
    label: Cow<'static, str>,
    steps: Vec<CommandRef<K>>,
}

impl<K: NotificationKind> MacroCommand<K> {
    /// Creates an empty macro command.
    pub fn new(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a sub-command.
    #[must_use]
    pub fn with(mut self, command: CommandRef<K>) -> Self {
        self.steps.push(command);
        self
    }

    /// Appends a sub-command in place.
    pub fn push(&mut self, command: CommandRef<K>) {
        self.steps.push(command);
    }

    /// Number of sub-commands.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Wraps the macro command as a shared handle.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl<K: NotificationKind> Command<K> for MacroCommand<K> {
    fn execute(&self, notification: &Notification<K>) {
        for step in &self.steps {
            step.execute(notification);
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}
