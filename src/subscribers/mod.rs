//! # Diagnostics subscribers.
//!
//! Optional async consumers of framework [`Event`](crate::Event)s. A
//! [`SubscriberSet`] gives each [`Subscribe`] implementation its own bounded
//! queue and worker task, so a slow consumer never holds up notification
//! delivery.
//!
//! ## Architecture
//! ```text
//! Registries ── publish(Event) ──► Bus ──► listener task (FacadeBuilder::build)
//!                                              │
//!                                              ▼
//!                                        SubscriberSet::emit_arc
//!                                              │
//!                                   ┌──────────┼──────────┐
//!                                   ▼          ▼          ▼
//!                               LogWriter   Metrics    Custom ...
//! ```
//!
//! Enable the `logging` feature for the built-in [`LogWriter`].

#[cfg(feature = "logging")]
mod embedded;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
pub use embedded::LogWriter;
pub use set::SubscriberSet;
pub use subscribe::Subscribe;
