//! # Example: singleton
//!
//! One facade per process, kept by the host in a `static`.
//!
//! The registries themselves are plain instances; a host that wants global
//! access stores the `Arc<Facade<_>>` in a [`LazyLock`] and hands out clones.
//!
//! ## Run
//! ```bash
//! cargo run --example singleton
//! ```

use std::sync::{Arc, LazyLock};
use std::thread;

use mvcore::{CommandFn, Config, Facade, Notification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Note {
    Tick,
}

static APP: LazyLock<Arc<Facade<Note>>> = LazyLock::new(|| {
    let facade = Facade::new(Config::default());
    facade.register_command(
        Note::Tick,
        CommandFn::arc("tick", |n: &Notification<Note>| {
            if let Some(worker) = n.payload_as::<usize>() {
                println!("[tick] from worker {worker}");
            }
        }),
    );
    facade
});

fn app() -> Arc<Facade<Note>> {
    Arc::clone(&APP)
}

fn main() {
    let workers: Vec<_> = (0..4usize)
        .map(|i| thread::spawn(move || app().send_notification_with(Note::Tick, i)))
        .collect();

    for w in workers {
        if w.join().is_err() {
            eprintln!("[singleton] worker panicked");
        }
    }
    println!("[singleton] same instance: {}", Arc::ptr_eq(&app(), &app()));
}
