//! # Example: quickstart
//!
//! Minimal facade wiring: one proxy, one command, one raw observer.
//!
//! Demonstrates how to:
//! - Define a notification kind as a plain `enum`.
//! - Bind a [`CommandFn`] to a kind and read the payload.
//! - Reach a proxy from inside a command and notify observers of the result.
//!
//! ## Flow
//! ```text
//! send_notification_with(AddPoints, 10)
//!     ├─► observers of AddPoints (none)
//!     └─► "add_points" command
//!           ├─► ScoreProxy.score += 10
//!           └─► send_notification_with(ScoreChanged, total)
//!                 └─► "printer" observer
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example quickstart
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mvcore::{CommandFn, Config, Facade, Notification, ObserverFn, Proxy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Note {
    Startup,
    AddPoints,
    ScoreChanged,
}

#[derive(Default)]
struct ScoreProxy {
    score: AtomicU64,
}

impl Proxy for ScoreProxy {
    fn name(&self) -> &str {
        "score"
    }

    fn on_register(&self) {
        println!("[score] registered");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Wire the registries
    let facade = Facade::<Note>::new(Config::default());

    // 2. Application data
    facade.register_proxy(Arc::new(ScoreProxy::default()))?;

    // 3. Business logic: one command per kind
    let weak = Arc::downgrade(&facade);
    facade.register_command(
        Note::AddPoints,
        CommandFn::arc("add_points", move |n: &Notification<Note>| {
            let (Some(facade), Some(points)) = (weak.upgrade(), n.payload_as::<u64>()) else {
                return;
            };
            if let Some(proxy) = facade.retrieve_proxy_as::<ScoreProxy>("score") {
                let total = proxy.score.fetch_add(*points, Ordering::SeqCst) + points;
                facade.send_notification_with(Note::ScoreChanged, total);
            }
        }),
    );

    // 4. Presentation: a raw observer
    facade.register_observer(
        Note::ScoreChanged,
        ObserverFn::arc("printer", |n: &Notification<Note>| {
            if let Some(total) = n.payload_as::<u64>() {
                println!("[printer] score is now {total}");
            }
        }),
    );

    // 5. Nothing listens to Startup; that is fine
    facade.send_notification(Note::Startup);

    for points in [10u64, 25, 5] {
        facade.send_notification_with(Note::AddPoints, points);
    }

    facade.teardown();
    println!("[quickstart] done, state = {:?}", facade.state());
    Ok(())
}
