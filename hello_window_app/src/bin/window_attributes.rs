//! Window attributes demo
//!
//! Starts centered on the primary display. C re-centers, I toggles iconify,
//! A requests attention, N/H/D switch the cursor mode.

use hello_window_app::{config_from_args, exit_on_error, open_session};
use window_session::logging;
use window_session::prelude::*;

fn run() -> Result<(), SessionError> {
    let config = config_from_args()?;

    let mut controller = SessionController::new(config.input);
    let mut session = open_session(config)?;

    match session.center_on_primary_display() {
        Some(position) => log::info!("Centered at ({}, {})", position.x, position.y),
        None => log::warn!("No primary display reported, keeping initial position"),
    }

    run_session(&mut session, &mut controller);

    log::info!(
        "Final state: {:?}, cursor {:?}, last click {:?}",
        session.iconify_state(),
        session.cursor_mode(),
        session.last_click()
    );
    Ok(())
}

fn main() {
    logging::init();
    exit_on_error(run);
}
