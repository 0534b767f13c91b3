//! Error types returned by the registries.
//!
//! Lookups and removals of things that are not registered are **not** errors;
//! they return `None` / `false`. The only hard errors are duplicate
//! registrations, which leave the registry untouched.
//!
//! [`MvcError`] provides `as_label` / `as_message` helpers for logs and
//! diagnostics events.

use thiserror::Error;

/// # Errors produced by the mediation registries.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MvcError {
    /// A mediator with this name is already registered; the original stays in place.
    #[error("mediator {name:?} is already registered")]
    DuplicateMediator {
        /// Name of the rejected mediator.
        name: String,
    },

    /// A proxy with this name is already registered; the original stays in place.
    #[error("proxy {name:?} is already registered")]
    DuplicateProxy {
        /// Name of the rejected proxy.
        name: String,
    },
}

impl MvcError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use mvcore::MvcError;
    ///
    /// let err = MvcError::DuplicateMediator { name: "hud".into() };
    /// assert_eq!(err.as_label(), "mediator_duplicate");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            MvcError::DuplicateMediator { .. } => "mediator_duplicate",
            MvcError::DuplicateProxy { .. } => "proxy_duplicate",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            MvcError::DuplicateMediator { name } => format!("duplicate mediator: {name}"),
            MvcError::DuplicateProxy { name } => format!("duplicate proxy: {name}"),
        }
    }

    /// Name of the entry the error refers to.
    pub fn name(&self) -> &str {
        match self {
            MvcError::DuplicateMediator { name } | MvcError::DuplicateProxy { name } => name,
        }
    }
}
