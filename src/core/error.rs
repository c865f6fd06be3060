//! Arithmetic failures surfaced by the equals key.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while resolving a pending operation.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Result of {left} and {right} is not a finite number")]
    NonFinite { left: f64, right: f64 },

    #[error("Readout '{0}' is not a number")]
    InvalidOperand(String),
}
