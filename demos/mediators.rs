//! # Example: mediators
//!
//! Mediators bridging "scene" components to the notification bus.
//!
//! Demonstrates how to:
//! - Declare interests with [`Mediator::notification_interests`].
//! - Register a child mediator from a parent's `on_register` hook.
//! - Handle a duplicate name as an explicit error.
//! - Tear everything down with the cascading [`TeardownPolicy`].
//!
//! ## Flow
//! ```text
//! register_mediator(Level)
//!     ├─► subscribe Level to [LevelLoaded, Paused]
//!     └─► Level.on_register()
//!           └─► register_mediator(PauseMenu)   (reentrant, no lock held)
//!
//! send_notification(Paused)  ─► Level, PauseMenu
//! teardown()                 ─► on_remove for every mediator (name order)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example mediators
//! ```

use std::sync::{Arc, Weak};

use mvcore::{Config, Facade, Mediator, MvcError, Notification, Observer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Note {
    LevelLoaded,
    Paused,
    Resumed,
}

struct Level {
    facade: Weak<Facade<Note>>,
}

impl Observer<Note> for Level {
    fn on_notify(&self, n: &Notification<Note>) {
        println!("[level] {:?} (seq {})", n.kind(), n.seq());
    }

    fn label(&self) -> &str {
        "level"
    }
}

impl Mediator<Note> for Level {
    fn name(&self) -> &str {
        "level"
    }

    fn notification_interests(&self) -> Vec<Note> {
        vec![Note::LevelLoaded, Note::Paused]
    }

    fn on_register(&self) {
        let Some(facade) = self.facade.upgrade() else {
            return;
        };
        if let Err(e) = facade.register_mediator(Arc::new(PauseMenu)) {
            println!("[level] could not add pause menu: {e}");
        }
    }

    fn on_remove(&self) {
        println!("[level] removed");
    }
}

struct PauseMenu;

impl Observer<Note> for PauseMenu {
    fn on_notify(&self, n: &Notification<Note>) {
        match n.kind() {
            Note::Paused => println!("[pause_menu] shown"),
            Note::Resumed => println!("[pause_menu] hidden"),
            Note::LevelLoaded => {}
        }
    }

    fn label(&self) -> &str {
        "pause_menu"
    }
}

impl Mediator<Note> for PauseMenu {
    fn name(&self) -> &str {
        "pause_menu"
    }

    fn notification_interests(&self) -> Vec<Note> {
        vec![Note::Paused, Note::Resumed]
    }

    fn on_remove(&self) {
        println!("[pause_menu] removed");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let facade = Facade::<Note>::new(Config::default());

    facade.register_mediator(Arc::new(Level {
        facade: Arc::downgrade(&facade),
    }))?;
    println!("[main] mediators: {:?}", facade.view().mediator_names());

    facade.send_notification(Note::LevelLoaded);
    facade.send_notification(Note::Paused);
    facade.send_notification(Note::Resumed);

    match facade.register_mediator(Arc::new(PauseMenu)) {
        Err(MvcError::DuplicateMediator { name }) => println!("[main] {name} already present"),
        Err(e) => return Err(e.into()),
        Ok(()) => println!("[main] unexpected second pause menu"),
    }

    facade.teardown();
    facade.send_notification(Note::Paused);
    println!("[main] after teardown: {:?}", facade.view().mediator_names());
    Ok(())
}
