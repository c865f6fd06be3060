//! Errors raised while saving or restoring a calculator snapshot.

use thiserror::Error;

/// Why a snapshot could not be written or turned back into a calculator.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Could not encode calculator snapshot: {0}")]
    SerializationFailed(String),

    #[error("Could not decode calculator snapshot: {0}")]
    DeserializationFailed(String),

    /// Written by a newer or older release with another layout.
    #[error("Snapshot format {found} cannot be restored (this build reads format {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The decoded state or settings break an engine invariant.
    #[error("Snapshot refused: {0}")]
    ValidationFailed(String),
}

/// A broken invariant found in a restored engine state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateViolation {
    #[error("Readout '{0}' is not a finite number")]
    InvalidDisplay(String),

    #[error("Accumulator {0} is not finite")]
    NonFiniteAccumulator(f64),

    #[error("Trace offset {offset} does not fall on a character of a {len}-byte trace")]
    TraceOffset { offset: usize, len: usize },

    #[error("Configuration rejected: {0}")]
    Config(String),
}
