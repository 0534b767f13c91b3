//! Panic isolation around user callbacks.
//!
//! Every observer, mediator and command invocation goes through
//! [`run_guarded`]. Under [`FailurePolicy::Isolate`] the call runs inside
//! `catch_unwind` and a panic comes back as its message; under
//! [`FailurePolicy::Propagate`] the call runs bare.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a callback panics while holding one of its own locks. Registry locks are
//! never held during callbacks, so the registries themselves stay consistent.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::policies::FailurePolicy;

/// Runs `f` according to `policy`, returning the panic message if it was caught.
pub(crate) fn run_guarded<F: FnOnce()>(policy: FailurePolicy, f: F) -> Result<(), String> {
    match policy {
        FailurePolicy::Propagate => {
            f();
            Ok(())
        }
        FailurePolicy::Isolate => {
            catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
        }
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
