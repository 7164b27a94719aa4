//! Hello window demo
//!
//! Opens the classic "Hello, GLFW!" window: fps readout in the title,
//! Escape closes, R resizes to 1280x720.

use hello_window_app::{config_from_args, exit_on_error, open_session};
use window_session::logging;
use window_session::prelude::*;

fn run() -> Result<(), SessionError> {
    let config = config_from_args()?;
    let mut controller = SessionController::new(config.input);
    let mut session = open_session(config)?;

    let summary = run_session(&mut session, &mut controller);
    log::info!("Rendered {} frames", summary.frames);
    Ok(())
}

fn main() {
    logging::init();
    exit_on_error(run);
}
