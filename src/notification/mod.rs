//! Notifications: the values routed by the framework.
//!
//! ## Contents
//! - [`NotificationKind`] marker trait for the application's kind enum
//! - [`Notification`] kind + optional sender + optional payload
//! - [`Body`] shared, type-erased sender/payload handle

mod kind;
mod notification;

pub use kind::NotificationKind;
pub use notification::{Body, Notification};
