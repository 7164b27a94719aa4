//! Shared start-up for the demo programs
//!
//! Each demo takes an optional TOML or RON config path as its first
//! argument and falls back to the built-in defaults otherwise.

use window_session::prelude::*;

/// Load the session config named on the command line, or the defaults
pub fn config_from_args() -> Result<SessionConfig, SessionError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading session config from {}", path);
            Ok(SessionConfig::load_from_file(path)?)
        }
        None => Ok(SessionConfig::default()),
    }
}

/// Create the GLFW window and wrap it in a session
pub fn open_session(config: SessionConfig) -> Result<WindowSession, SessionError> {
    let backend = GlfwBackend::new(&config)?;
    WindowSession::new(config, Box::new(backend))
}

/// Run `demo`, logging a fatal error and exiting with status 1 on failure
pub fn exit_on_error(demo: impl FnOnce() -> Result<(), SessionError>) {
    if let Err(e) = demo() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
