//! Checkpoint and resume functionality for calculator sessions.
//!
//! A checkpoint captures the engine state and configuration so a host can
//! rebuild its view (for example after the app is suspended). Checkpoints
//! are plain values; writing them anywhere is the host's business. The tap
//! history is not part of a checkpoint.

use crate::config::EngineConfig;
use crate::core::EngineState;
use crate::engine::Calculator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{CheckpointError, StateViolation};

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a calculator session.
///
/// # Example
///
/// ```rust
/// use abacus::checkpoint::Checkpoint;
/// use abacus::{keys, Calculator};
///
/// let mut calc = Calculator::new();
/// calc.press_all(keys![6 * 7]);
///
/// let json = calc.checkpoint().to_json().unwrap();
/// let restored = Checkpoint::from_json(&json).unwrap().resume().unwrap();
/// assert_eq!(restored.equation(), "6 × 7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Engine settings in effect
    pub config: EngineConfig,

    /// Engine state at checkpoint time
    pub state: EngineState,
}

impl Checkpoint {
    /// Capture a state and configuration.
    pub fn new(config: EngineConfig, state: EngineState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            config,
            state,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the captured configuration and state, accumulating ALL
    /// violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<StateViolation>> {
        let mut checks = vec![match self.config.validate() {
            Ok(()) => Validation::success(()),
            Err(e) => Validation::fail(StateViolation::Config(e.to_string())),
        }];
        checks.extend(state_checks(&self.state));

        Validation::all_vec(checks).map(|_| ())
    }

    /// Rebuild a calculator from this checkpoint.
    ///
    /// Fails on an unknown format version or if the state breaks any engine
    /// invariant; every violation is listed in the error.
    pub fn resume(self) -> Result<Calculator, CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        if let Validation::Failure(violations) = self.validate() {
            let message = describe(&violations);
            tracing::warn!(checkpoint = %self.id, violations = %message, "refusing checkpoint");
            return Err(CheckpointError::ValidationFailed(message));
        }

        tracing::debug!(checkpoint = %self.id, "resuming from checkpoint");
        Ok(Calculator::from_parts(self.config, self.state))
    }
}

/// Check a state against the engine invariants, accumulating ALL
/// violations.
///
/// Every state the engine produces passes; hand-built and restored states
/// may not.
pub fn validate_state(state: &EngineState) -> Validation<(), NonEmptyVec<StateViolation>> {
    Validation::all_vec(state_checks(state)).map(|_| ())
}

fn state_checks(state: &EngineState) -> Vec<Validation<(), NonEmptyVec<StateViolation>>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<StateViolation>>> = Vec::new();

    checks.push(if state.value().is_some() {
        Validation::success(())
    } else {
        Validation::fail(StateViolation::InvalidDisplay(
            state.display_value.clone(),
        ))
    });

    checks.push(if state.accumulator.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(StateViolation::NonFiniteAccumulator(state.accumulator))
    });

    if let Some(offset) = state.number_start {
        checks.push(if state.equation_trace.is_char_boundary(offset) {
            Validation::success(())
        } else {
            Validation::fail(StateViolation::TraceOffset {
                offset,
                len: state.equation_trace.len(),
            })
        });
    }

    checks
}

/// Flatten violations into one readable message.
pub(crate) fn describe(violations: &NonEmptyVec<StateViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl Calculator {
    /// Snapshot the current state and configuration.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.config().clone(), self.state().clone())
    }
}
