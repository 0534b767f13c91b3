//! # Example: diagnostics
//!
//! Framework events through `tracing`, plus a custom subscriber.
//!
//! Demonstrates how to:
//! - Attach the built-in [`LogWriter`] and a custom [`Subscribe`] implementation.
//! - See isolated observer panics reported as `ObserverFailed`.
//! - Stop the subscriber workers with [`Facade::shutdown`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example diagnostics --features logging
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mvcore::{Config, Event, Facade, LogWriter, Notification, ObserverFn, Subscribe};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Note {
    Save,
}

#[derive(Default)]
struct FailureCounter {
    failures: AtomicUsize,
}

#[async_trait]
impl Subscribe for FailureCounter {
    async fn on_event(&self, ev: &Event) {
        if ev.is_failure() {
            self.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn name(&self) -> &'static str {
        "failure-counter"
    }

    fn queue_capacity(&self) -> usize {
        64
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let counter = Arc::new(FailureCounter::default());
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new()), counter.clone()];
    let facade = Facade::<Note>::builder(Config::default())
        .with_subscribers(subs)
        .build();

    facade.register_observer(
        Note::Save,
        ObserverFn::arc("flaky_disk", |_: &Notification<Note>| panic!("disk full")),
    );
    facade.register_observer(
        Note::Save,
        ObserverFn::arc("status_bar", |_: &Notification<Note>| {
            tracing::info!("status bar: saved");
        }),
    );

    facade.send_notification(Note::Save);
    facade.teardown();
    facade.shutdown().await;

    tracing::info!(failures = counter.failures.load(Ordering::Relaxed), "done");
}
