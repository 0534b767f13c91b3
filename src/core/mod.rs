//! Registries and the facade that composes them.
//!
//! The public entry point is [`Facade`]; the registries are exported for hosts
//! that want to hold one directly (tests, tools, custom composition roots).
//!
//! Internal modules:
//! - [`notifier`]: kind → observers, snapshot-then-invoke delivery, command cascade;
//! - [`controller`]: kind → command, guarded execution;
//! - [`view`]: name → mediator, bridges interests into the notifier;
//! - [`model`]: name → proxy, typed retrieval;
//! - [`facade`]: wiring, forwarding, lifecycle state, subscriber listener;
//! - [`builder`]: optional diagnostics subscribers;
//! - [`unwind`]: panic isolation shared by the registries.

mod builder;
mod controller;
mod facade;
mod model;
mod notifier;
pub(crate) mod unwind;
mod view;

pub use builder::FacadeBuilder;
pub use controller::Controller;
pub use facade::{Facade, FacadeState};
pub use model::Model;
pub use notifier::Notifier;
pub use view::View;
