//! # Window Session
//!
//! A single on-screen window with an OpenGL context, driven by GLFW and
//! modelled as an explicit [`WindowSession`].
//!
//! ## Features
//!
//! - **Centering**: place the window in the middle of the primary display
//! - **Size constraints**: minimum/maximum limits and a fixed aspect ratio
//! - **Iconify state machine**: toggle between normal and iconified
//! - **Fps title**: the title shows the frame rate, refreshed every few frames
//! - **Event dispatch**: backend events routed to an [`EventHandler`]
//! - **Headless backend**: the whole session runs without a display in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use window_session::prelude::*;
//!
//! fn main() -> Result<(), SessionError> {
//!     let config = SessionConfig::default();
//!     let backend = GlfwBackend::new(&config)?;
//!     let mut controller = SessionController::new(config.input);
//!     let mut session = WindowSession::new(config, Box::new(backend))?;
//!
//!     session.center_on_primary_display();
//!     run_session(&mut session, &mut controller);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod geometry;
pub mod logging;
pub mod runner;
pub mod session;
pub mod timing;

pub use error::{SessionError, SessionResult};
pub use session::WindowSession;

/// Common imports for session users
pub mod prelude {
    pub use crate::{
        backend::{GlfwBackend, HeadlessBackend, WindowBackend},
        config::{Config, ConfigError, ContextConfig, InputConfig, SessionConfig, WindowHints},
        controller::{KeyCommand, SessionController},
        error::{SessionError, SessionResult},
        events::{dispatch, Action, EventHandler, Key, MouseButton, NoopHandler, WindowEvent},
        geometry::{AspectRatio, Position, Size, SizeLimits},
        runner::{run_frames, run_session, RunSummary},
        session::{CursorMode, IconifyState, WindowSession},
        timing::{FrameClock, FrameTick},
    };
}
