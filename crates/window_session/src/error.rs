//! Session error types

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised while bringing a window session up
///
/// Only initialization can fail. Once a session is running every operation
/// normalizes its input instead of rejecting it.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The windowing backend could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window or its rendering context could not be created
    #[error("Window creation failed")]
    CreationFailed,

    /// GL entry points could not be resolved through the backend
    #[error("Failed to load GL functions: {0}")]
    ContextLoadFailed(String),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read or parsed
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result alias used across the crate
pub type SessionResult<T> = Result<T, SessionError>;
