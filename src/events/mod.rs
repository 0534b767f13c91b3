//! Diagnostics events: types and broadcast bus.
//!
//! This module groups the **framework event** model and the **bus** used to
//! report what the registries do: registrations, removals, teardown and
//! isolated callback failures.
//!
//! Notifications are *not* events. They are delivered synchronously by the
//! [`Notifier`](crate::Notifier); the bus only carries side-channel records
//! for logging and monitoring.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `Notifier`, `Controller`, `View`, `Model`, `Facade`,
//!   `SubscriberSet` workers (overflow/panic).
//! - **Consumers**: `Facade::subscribe()` receivers and the optional subscriber
//!   listener spawned by `FacadeBuilder::build` (fans out to `SubscriberSet`).

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
