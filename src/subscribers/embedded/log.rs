//! # LogWriter: framework events as `tracing` records
//!
//! A minimal subscriber that turns incoming [`Event`]s into log lines.
//! Failures are logged at `WARN`, everything else at `INFO`.
//! Use it for tests, demos, or as a starting point for a real sink.
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO mvcore: mediator registered name="HudMediator"
//! INFO mvcore: command registered name="StartupCommand" notification="Startup"
//! WARN mvcore: observer failed name="HudMediator" notification="ScoreChanged" reason="boom"
//! INFO mvcore: torn down
//! ```

use async_trait::async_trait;
use tracing::{info, warn};

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn field(v: &Option<std::sync::Arc<str>>) -> &str {
    v.as_deref().unwrap_or("-")
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let name = field(&e.name);
        let notification = field(&e.notification);
        let reason = field(&e.reason);

        match e.kind {
            EventKind::ObserverFailed => {
                warn!(target: "mvcore", name, notification, reason, "observer failed");
            }
            EventKind::CommandFailed => {
                warn!(target: "mvcore", name, notification, reason, "command failed");
            }
            EventKind::HookFailed => {
                warn!(target: "mvcore", name, reason, "lifecycle hook failed");
            }
            EventKind::SubscriberPanicked => {
                warn!(target: "mvcore", subscriber = name, reason, "subscriber panicked");
            }
            EventKind::SubscriberOverflow => {
                warn!(target: "mvcore", subscriber = name, reason, "subscriber overflow");
            }
            EventKind::MediatorRejected => {
                warn!(target: "mvcore", name, "duplicate mediator rejected");
            }
            EventKind::ProxyRejected => {
                warn!(target: "mvcore", name, "duplicate proxy rejected");
            }
            EventKind::MediatorRegistered => {
                info!(target: "mvcore", name, "mediator registered");
            }
            EventKind::MediatorRemoved => {
                info!(target: "mvcore", name, "mediator removed");
            }
            EventKind::CommandRegistered => {
                info!(target: "mvcore", name, notification, "command registered");
            }
            EventKind::CommandRemoved => {
                info!(target: "mvcore", name, notification, "command removed");
            }
            EventKind::ProxyRegistered => {
                info!(target: "mvcore", name, "proxy registered");
            }
            EventKind::ProxyRemoved => {
                info!(target: "mvcore", name, "proxy removed");
            }
            EventKind::TornDown => {
                info!(target: "mvcore", "torn down");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
