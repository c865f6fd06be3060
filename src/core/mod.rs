//! Core calculator types.
//!
//! This module contains the pure building blocks of the engine:
//! - Keypad symbols and operations
//! - The explicit `EngineState` value
//! - Guard predicates and rejection reasons
//! - Number formatting (the decimal-trim rule)
//! - Immutable tap history
//!
//! Nothing in this module performs I/O or keeps hidden state.

mod error;
mod guard;
mod history;
mod number;
mod state;
mod symbol;

pub use error::ArithmeticError;
pub use guard::{Guard, Rejection};
pub use history::{Tap, TapHistory, TapResult};
pub use number::{format_number, parse_number};
pub use state::{EngineState, Phase};
pub use symbol::{KeyError, Operation, Symbol};
