//! # Proxy capability.
//!
//! A [`Proxy`] owns a slice of application data and is kept by name in the
//! [`Model`](crate::Model). The model hands proxies back either as
//! [`ProxyRef`] or, through `Model::retrieve_proxy_as`, as their concrete type.
//!
//! Proxies usually keep their data behind a lock and send notifications
//! through a `Weak<Facade<K>>` when it changes.

use std::any::Any;
use std::sync::Arc;

/// Named data holder.
///
/// ## Example
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use mvcore::Proxy;
///
/// #[derive(Default)]
/// struct ScoreProxy {
///     score: AtomicU64,
/// }
///
/// impl Proxy for ScoreProxy {
///     fn name(&self) -> &str { "score" }
/// }
///
/// let p = ScoreProxy::default();
/// p.score.fetch_add(10, Ordering::Relaxed);
/// assert_eq!(p.name(), "score");
/// ```
pub trait Proxy: Any + Send + Sync {
    /// Unique name; the primary key in the model.
    fn name(&self) -> &str;

    /// Called after the proxy has been registered.
    fn on_register(&self) {}

    /// Called after the proxy has been removed.
    fn on_remove(&self) {}
}

/// Shared proxy handle.
pub type ProxyRef = Arc<dyn Proxy>;
