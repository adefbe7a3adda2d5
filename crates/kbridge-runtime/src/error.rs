//! Runtime error types

use kbridge_core::CoreError;
use thiserror::Error;

/// Runtime error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuntimeError {
    /// Contract violation detected by a core type
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Malformed numeric input (NaN, infinity, out of range)
    #[error("{stage}: invalid input: {reason}")]
    InvalidInput { stage: &'static str, reason: String },
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
