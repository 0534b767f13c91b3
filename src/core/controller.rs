//! # Command registry.
//!
//! [`Controller`] binds at most one [`Command`](crate::Command) to each
//! notification kind and executes it when the [`Notifier`](super::Notifier)
//! has finished delivering a notification of that kind.
//!
//! ## Rules
//! - **Last registration wins**: binding a kind again replaces the previous command.
//! - **Absent is fine**: executing a kind with no command is a no-op.
//! - **No lock during execution**: the command handle is cloned under a read
//!   lock and executed after the lock is released, so commands may (re)bind
//!   commands, including their own kind.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::unwind::run_guarded;
use crate::events::{Bus, Event, EventKind};
use crate::handlers::CommandRef;
use crate::notification::{Notification, NotificationKind};
use crate::policies::FailurePolicy;

/// Command registry: kind → command.
pub struct Controller<K: NotificationKind> {
    commands: RwLock<HashMap<K, CommandRef<K>>>,
    bus: Bus,
    failure: FailurePolicy,
}

impl<K: NotificationKind> Controller<K> {
    /// Creates an empty registry.
    pub fn new(bus: Bus, failure: FailurePolicy) -> Arc<Self> {
        Arc::new(Self {
            commands: RwLock::new(HashMap::new()),
            bus,
            failure,
        })
    }

    /// Binds `command` to `kind`, returning the command it replaced.
    pub fn register_command(&self, kind: K, command: CommandRef<K>) -> Option<CommandRef<K>> {
        let label = command.label().to_owned();
        let previous = self.commands.write().insert(kind, command);

        debug!(?kind, command = %label, replaced = previous.is_some(), "command registered");
        self.bus.publish(
            Event::new(EventKind::CommandRegistered)
                .with_name(label)
                .with_kind(&kind),
        );
        previous
    }

    /// Unbinds the command for `kind`, returning it if there was one.
    pub fn remove_command(&self, kind: K) -> Option<CommandRef<K>> {
        let removed = self.commands.write().remove(&kind)?;

        debug!(?kind, command = removed.label(), "command removed");
        self.bus.publish(
            Event::new(EventKind::CommandRemoved)
                .with_name(removed.label())
                .with_kind(&kind),
        );
        Some(removed)
    }

    pub fn has_command(&self, kind: K) -> bool {
        self.commands.read().contains_key(&kind)
    }

    pub fn get_command(&self, kind: K) -> Option<CommandRef<K>> {
        self.commands.read().get(&kind).cloned()
    }

    /// Returns the sorted list of kinds that have a command.
    pub fn kinds(&self) -> Vec<K> {
        let mut kinds: Vec<K> = self.commands.read().keys().copied().collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.commands.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.read().is_empty()
    }

    /// Executes the command bound to the notification's kind, if any.
    pub fn execute_command(&self, notification: &Notification<K>) {
        let Some(command) = self.get_command(notification.kind()) else {
            return;
        };

        if let Err(reason) = run_guarded(self.failure, || command.execute(notification)) {
            let kind = notification.kind();
            warn!(
                command = command.label(),
                ?kind,
                seq = notification.seq(),
                %reason,
                "command panicked"
            );
            self.bus
                .publish(Event::command_failed(command.label(), &kind, reason));
        }
    }

    /// Drops every binding.
    pub fn clear(&self) {
        self.commands.write().clear();
    }
}
