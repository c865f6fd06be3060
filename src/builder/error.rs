//! Build errors for calculator configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Input length must be at least 1. Call .max_input_len(n) with n > 0")]
    ZeroInputLength,

    #[error("History limit must be at least 1. Use .unbounded_history() to keep every tap")]
    ZeroHistoryLimit,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Initial state breaks an engine invariant: {0}")]
    InvalidState(String),
}
