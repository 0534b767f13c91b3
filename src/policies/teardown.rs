//! # Teardown policy for the mediator registry.
//!
//! [`TeardownPolicy`] decides what `View::teardown` does with the observer
//! subscriptions that mediators created when they were registered.
//!
//! - [`TeardownPolicy::Cascade`] every mediator is unsubscribed from all of its
//!   interests and its `on_remove` hook runs, exactly as if each one had been
//!   removed by name (default).
//! - [`TeardownPolicy::ClearOnly`] only the name map is cleared. Subscriptions
//!   stay in the notifier until the notifier itself is cleared, and no
//!   `on_remove` hook runs.
//!
//! `Facade::teardown` clears the notifier as well, so both policies end with
//! empty registries there. At the facade level `ClearOnly` therefore only
//! skips the `on_remove` hooks and the `MediatorRemoved` events; orphaned
//! subscriptions are observable only when `View::teardown` is called on its own.

/// Policy controlling how the mediator registry is emptied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TeardownPolicy {
    /// Unregister every mediator from its interests and run `on_remove` (default).
    #[default]
    Cascade,
    /// Clear the name map only; no `on_remove` hook runs.
    ///
    /// Through `Facade::teardown` the subscriptions are dropped anyway when the
    /// notifier is cleared.
    ClearOnly,
}
