//! Calculator engine: the pure transition function and its session shell.
//!
//! # Key Concepts
//!
//! - **Engine**: transition rules compiled from an `EngineConfig`; `apply`
//!   maps a state and a symbol to an [`Outcome`] without side effects
//! - **Outcome**: applied, rejected (guarded no-op) or failed (arithmetic error)
//! - **Calculator**: owns one state, records the tap history, logs presses

mod machine;
mod transition;

pub use machine::Calculator;
pub use transition::{apply, Engine, Outcome};
