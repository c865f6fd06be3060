//! Abacus: a pure functional calculator engine
//!
//! Abacus follows the "pure core, imperative shell" philosophy. The engine is
//! a total, deterministic function from (state, key press) to the next state;
//! a thin session shell owns that state, records the taps and logs them.
//! Rendering is left to whatever UI toolkit hosts the keypad: it feeds
//! [`core::Symbol`] presses in and reads two strings back out.
//!
//! # Core Concepts
//!
//! - **Symbol**: one of the 19 keypad keys
//! - **EngineState**: readout, equation trace, accumulator and entry flags
//! - **Outcome**: every press is applied, rejected as a guarded no-op, or
//!   failed with an explicit arithmetic error
//! - **Calculator**: the stateful session a UI talks to
//!
//! # Example
//!
//! ```rust
//! use abacus::{keys, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.press_all(keys![3 + 4 =]);
//!
//! assert_eq!(calc.display(), "7");
//! assert_eq!(calc.equation(), "3 + 4 = ");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod engine;
pub mod keypad;

// Re-export commonly used types
pub use builder::{BuildError, CalculatorBuilder};
pub use config::EngineConfig;
pub use crate::core::{ArithmeticError, EngineState, Operation, Rejection, Symbol};
pub use engine::{apply, Calculator, Engine, Outcome};
