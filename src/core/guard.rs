//! Guard predicates that refuse symbols.
//!
//! Guards are pure boolean functions over the engine state. A guard that
//! fails turns the press into a no-op and names the reason.

use super::state::EngineState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a symbol was refused. The state is always left unchanged.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Readout is longer than {max} characters")]
    InputTooLong { max: usize },

    #[error("Readout already contains a decimal point")]
    DecimalAlreadyEntered,

    #[error("Symbol is locked while a decimal number is being typed")]
    DecimalPending,

    #[error("Zero has no sign to toggle")]
    ZeroHasNoSign,

    #[error("Operator key carries no operation")]
    NoOperation,

    #[error("Digit {0} is outside 0-9")]
    InvalidDigit(u8),
}

/// Pure predicate that must hold for a symbol to be accepted.
///
/// # Example
///
/// ```rust
/// use abacus::core::{EngineState, Guard, Rejection};
///
/// let lock = Guard::decimal_lock();
/// assert_eq!(lock.check(&EngineState::new()), Ok(()));
///
/// let fresh_only = Guard::new(Rejection::DecimalPending, |s: &EngineState| s.is_initial());
/// assert!(fresh_only.check(&EngineState::new()).is_ok());
/// ```
pub struct Guard {
    rejection: Rejection,
    predicate: Box<dyn Fn(&EngineState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate and the reason reported when it
    /// does not hold.
    pub fn new<F>(rejection: Rejection, predicate: F) -> Self
    where
        F: Fn(&EngineState) -> bool + Send + Sync + 'static,
    {
        Guard {
            rejection,
            predicate: Box::new(predicate),
        }
    }

    /// Refuse while a decimal point is pending in the typed number.
    pub fn decimal_lock() -> Self {
        Self::new(Rejection::DecimalPending, |s| !s.decimal_entered)
    }

    /// Refuse digits once the readout is longer than `max` characters,
    /// results of an evaluation included.
    pub fn input_len(max: usize) -> Self {
        Self::new(Rejection::InputTooLong { max }, move |s| {
            s.display_value.chars().count() <= max
        })
    }

    /// Evaluate the predicate (pure).
    pub fn check(&self, state: &EngineState) -> Result<(), Rejection> {
        if (self.predicate)(state) {
            Ok(())
        } else {
            Err(self.rejection)
        }
    }

    pub fn rejection(&self) -> Rejection {
        self.rejection
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("rejection", &self.rejection)
            .finish_non_exhaustive()
    }
}
