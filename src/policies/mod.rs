//! Delivery and teardown policies.
//!
//! This module groups the knobs that control **what happens when a callback
//! fails** and **how registries are emptied**.
//!
//! ## Contents
//! - [`FailurePolicy`] isolate or propagate panicking observers/commands
//! - [`TeardownPolicy`] cascade mediator teardown through the notifier, or clear names only
//!
//! ## Quick wiring
//! ```text
//! Config { failure: FailurePolicy, teardown: TeardownPolicy, .. }
//!      ├─► Notifier / Controller use `failure` around every callback
//!      └─► View uses `teardown` in View::teardown()
//! ```
//!
//! ## Defaults
//! - `FailurePolicy::Isolate`
//! - `TeardownPolicy::Cascade`

mod failure;
mod teardown;

pub use failure::FailurePolicy;
pub use teardown::TeardownPolicy;
