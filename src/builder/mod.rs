//! Builder API for ergonomic calculator construction.
//!
//! This module provides a fluent builder and the `keys!` macro for creating
//! calculators and key sequences with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::CalculatorBuilder;

use crate::engine::Calculator;

/// Create a calculator with the classic keypad rules, decimal lock included.
///
/// Same as [`Calculator::new`]; spelled out for hosts that want to make the
/// choice visible.
///
/// # Example
///
/// ```
/// use abacus::builder::classic_calculator;
///
/// let calc = classic_calculator();
/// assert!(calc.config().decimal_lock);
/// ```
pub fn classic_calculator() -> Calculator {
    Calculator::new()
}

/// Create a calculator without the decimal lock, so `3.5 + 2` can be typed.
///
/// # Example
///
/// ```
/// use abacus::builder::relaxed_calculator;
/// use abacus::keys;
///
/// let mut calc = relaxed_calculator();
/// calc.press_all(keys![3 . 5 + 2 =]);
/// assert_eq!(calc.display(), "5.5");
/// ```
pub fn relaxed_calculator() -> Calculator {
    CalculatorBuilder::new()
        .decimal_lock(false)
        .build()
        .unwrap_or_default()
}
