//! The explicit engine state threaded through every transition.
//!
//! State is a plain value: the engine never mutates it in place, it returns
//! a new `EngineState` for every accepted symbol.

use super::number::parse_number;
use super::symbol::Operation;
use serde::{Deserialize, Serialize};

/// Coarse phase of the engine, derived from the state fields.
///
/// Phases are not stored; they exist for display and logging.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Typing the first operand.
    Entry,
    /// An operator is pending its right-hand operand, possibly chosen right
    /// after a result.
    Operand,
    /// The readout holds the result of an equals press.
    Evaluated,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Entry => "Entry",
            Self::Operand => "Operand",
            Self::Evaluated => "Evaluated",
        }
    }
}

/// Complete calculator state.
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, Operation};
///
/// let state = EngineState::new();
/// assert_eq!(state.display_value(), "0");
/// assert_eq!(state.equation_trace(), "");
/// assert_eq!(state.pending_operation(), Operation::None);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EngineState {
    pub(crate) display_value: String,
    pub(crate) equation_trace: String,
    pub(crate) accumulator: f64,
    pub(crate) pending_operation: Operation,
    pub(crate) just_evaluated: bool,
    pub(crate) decimal_entered: bool,
    /// Byte offset of the current number inside `equation_trace`, `None`
    /// when the readout is not part of the trace.
    pub(crate) number_start: Option<usize>,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineState {
    /// The state at application start and after clear.
    pub fn new() -> Self {
        Self {
            display_value: "0".to_string(),
            equation_trace: String::new(),
            accumulator: 0.0,
            pending_operation: Operation::None,
            just_evaluated: false,
            decimal_entered: false,
            number_start: Some(0),
        }
    }

    /// Primary readout: the number being typed or the last result.
    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Secondary line: everything typed since the last clear.
    pub fn equation_trace(&self) -> &str {
        &self.equation_trace
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn pending_operation(&self) -> Operation {
        self.pending_operation
    }

    pub fn just_evaluated(&self) -> bool {
        self.just_evaluated
    }

    pub fn decimal_entered(&self) -> bool {
        self.decimal_entered
    }

    pub fn number_start(&self) -> Option<usize> {
        self.number_start
    }

    /// Numeric value of the readout, `None` if it does not parse.
    pub fn value(&self) -> Option<f64> {
        parse_number(&self.display_value)
    }

    /// Check if this is the pristine initial state.
    pub fn is_initial(&self) -> bool {
        *self == Self::new()
    }

    pub fn phase(&self) -> Phase {
        if self.pending_operation.is_pending() {
            Phase::Operand
        } else if self.just_evaluated {
            Phase::Evaluated
        } else {
            Phase::Entry
        }
    }
}
