//! Error types for the runtime loop.

use thiserror::Error;

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that terminate the loop.
///
/// There is no retry policy: a failed flush propagates out of the loop and
/// ends the process.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("Control error: {0}")]
    Control(#[from] gh_controls::ControlError),

    #[error("Log error: {0}")]
    Log(#[from] gh_log::LogError),
}
