//! Error types for KBridge Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("{stage}: input length mismatch (left has {left} points, right has {right})")]
    InputLengthMismatch {
        stage: &'static str,
        left: usize,
        right: usize,
    },

    #[error("{stage}: period mismatch at index {index} (left period {left}, right period {right})")]
    PeriodMismatch {
        stage: &'static str,
        index: usize,
        left: u32,
        right: u32,
    },

    #[error("Invalid observation: {0}")]
    InvalidObservation(String),

    #[error("Invalid weights: {0}")]
    InvalidWeights(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
