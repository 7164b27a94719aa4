//! Window events demo
//!
//! Logs the parameters of every event the window receives, then applies the
//! default controller reactions.

use hello_window_app::{config_from_args, exit_on_error, open_session};
use std::path::PathBuf;
use window_session::logging;
use window_session::prelude::*;

/// Logs each event before handing it to the default controller
struct EventLogger {
    inner: SessionController,
}

impl EventHandler for EventLogger {
    fn on_key(&mut self, session: &mut WindowSession, key: Key, action: Action) {
        log::info!("Key {:?} {:?}", key, action);
        self.inner.on_key(session, key, action);
    }

    fn on_cursor_moved(&mut self, session: &mut WindowSession, x: f64, y: f64) {
        self.inner.on_cursor_moved(session, x, y);
    }

    fn on_mouse_button(&mut self, session: &mut WindowSession, button: MouseButton, action: Action) {
        log::info!("Mouse {:?} {:?}", button, action);
        self.inner.on_mouse_button(session, button, action);
    }

    fn on_file_drop(&mut self, session: &mut WindowSession, paths: &[PathBuf]) {
        log::info!("{} file(s) dropped", paths.len());
        self.inner.on_file_drop(session, paths);
    }

    fn on_resized(&mut self, session: &mut WindowSession, size: Size) {
        self.inner.on_resized(session, size);
    }

    fn on_framebuffer_resized(&mut self, _session: &mut WindowSession, size: Size) {
        log::info!("Framebuffer size is: {} x {}", size.width, size.height);
    }

    fn on_iconified(&mut self, session: &mut WindowSession, iconified: bool) {
        log::info!("Iconified: {}", iconified);
        self.inner.on_iconified(session, iconified);
    }

    fn on_moved(&mut self, _session: &mut WindowSession, position: Position) {
        log::info!("Window moved to ({}, {})", position.x, position.y);
    }

    fn on_focus(&mut self, _session: &mut WindowSession, focused: bool) {
        log::info!("Focused: {}", focused);
    }

    fn on_close_requested(&mut self, _session: &mut WindowSession) {
        log::info!("Close requested");
    }
}

fn run() -> Result<(), SessionError> {
    let config = config_from_args()?;
    let mut logger = EventLogger {
        inner: SessionController::new(config.input),
    };
    let mut session = open_session(config)?;

    run_session(&mut session, &mut logger);
    Ok(())
}

fn main() {
    logging::init();
    exit_on_error(run);
}
