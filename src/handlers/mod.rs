//! # Capabilities consumed by the registries.
//!
//! This module provides the traits application code implements, plus
//! closure-backed helpers:
//! - [`Observer`] / [`ObserverFn`] / [`ObserverRef`] - raw subscriptions
//! - [`Command`] / [`CommandFn`] / [`MacroCommand`] / [`CommandRef`] - one handler per kind
//! - [`Mediator`] / [`MediatorRef`] - named observers with declared interests
//! - [`Proxy`] / [`ProxyRef`] - named data holders kept by the model

mod command;
mod macro_command;
mod mediator;
mod observer;
mod proxy;

pub use command::{Command, CommandFn, CommandRef};
pub use macro_command::MacroCommand;
pub use mediator::{Mediator, MediatorRef};
pub use observer::{Observer, ObserverFn, ObserverRef, same_observer};
pub use proxy::{Proxy, ProxyRef};
