//! # Facade configuration.
//!
//! Provides [`Config`], the settings used when the [`Facade`](crate::Facade)
//! wires its registries.
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]
//!
//! # Example
//! ```
//! use mvcore::{Config, FailurePolicy, TeardownPolicy};
//!
//! let mut cfg = Config::default();
//! cfg.failure = FailurePolicy::Propagate;
//! cfg.teardown = TeardownPolicy::ClearOnly;
//!
//! assert_eq!(cfg.bus_capacity_clamped(), 256);
//! ```

use crate::policies::{FailurePolicy, TeardownPolicy};

/// Configuration for a [`Facade`](crate::Facade) and its registries.
///
/// ## Field semantics
/// - `bus_capacity`: ring buffer size of the diagnostics bus (min 1)
/// - `failure`: what happens when an observer/command panics during delivery
/// - `teardown`: whether mediator teardown cascades through the notifier
#[derive(Clone, Debug)]
pub struct Config {
    /// Capacity of the diagnostics broadcast channel.
    ///
    /// Receivers that fall behind by more than this many events observe
    /// `Lagged` and skip the oldest ones. Notifications never go through it.
    pub bus_capacity: usize,

    /// Callback failure handling, see [`FailurePolicy`].
    pub failure: FailurePolicy,

    /// Mediator teardown behaviour, see [`TeardownPolicy`].
    pub teardown: TeardownPolicy,
}

impl Config {
    /// Returns the bus capacity clamped to a minimum of 1.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `bus_capacity = 256`
    /// - `failure = FailurePolicy::Isolate`
    /// - `teardown = TeardownPolicy::Cascade`
    fn default() -> Self {
        Self {
            bus_capacity: 256,
            failure: FailurePolicy::default(),
            teardown: TeardownPolicy::default(),
        }
    }
}
