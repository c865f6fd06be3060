//! Reading key sequences from text.
//!
//! Uses Stillwater's `Validation` to report every unknown label in one pass
//! instead of stopping at the first bad key.
//!
//! # Example
//!
//! ```rust
//! use abacus::keypad::parse_keys;
//! use abacus::core::Symbol;
//! use stillwater::validation::Validation;
//!
//! match parse_keys("7 % =") {
//!     Validation::Success(symbols) => {
//!         assert_eq!(symbols, vec![Symbol::Digit(7), Symbol::Percent, Symbol::Equals]);
//!     }
//!     Validation::Failure(_) => unreachable!(),
//! }
//!
//! assert!(parse_keys("7 sqrt 2 ^").is_failure());
//! ```

use crate::core::{KeyError, Symbol};
use crate::engine::Calculator;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Parse whitespace-separated keypad labels, accumulating ALL unknown labels.
pub fn parse_keys(input: &str) -> Validation<Vec<Symbol>, NonEmptyVec<KeyError>> {
    let checks: Vec<Validation<Symbol, NonEmptyVec<KeyError>>> = input
        .split_whitespace()
        .enumerate()
        .map(|(position, label)| match label.parse::<Symbol>() {
            Ok(symbol) => Validation::success(symbol),
            Err(_) => Validation::fail(KeyError::UnknownKey {
                label: label.to_string(),
                position,
            }),
        })
        .collect();

    if checks.is_empty() {
        return Validation::fail(KeyError::Empty);
    }

    Validation::all_vec(checks)
}

/// Same as [`parse_keys`], flattened into a `Result`.
pub fn read_keys(input: &str) -> Result<Vec<Symbol>, Vec<KeyError>> {
    match parse_keys(input) {
        Validation::Success(symbols) => Ok(symbols),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

impl Calculator {
    /// Parse a label sequence and press it.
    ///
    /// Nothing is pressed unless every label is known. Returns the number of
    /// accepted presses.
    ///
    /// ```rust
    /// use abacus::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.press_labels("1 ÷ 4 =").unwrap();
    /// assert_eq!(calc.display(), "0.25");
    /// ```
    pub fn press_labels(&mut self, input: &str) -> Result<usize, Vec<KeyError>> {
        let symbols = read_keys(input)?;
        Ok(self.press_all(symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn parses_keypad_labels() {
        let symbols = read_keys("3 + 4 = AC -/+ .").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::Digit(3),
                Symbol::Operator(Operation::Add),
                Symbol::Digit(4),
                Symbol::Equals,
                Symbol::Clear,
                Symbol::Negate,
                Symbol::Decimal,
            ]
        );
    }

    #[test]
    fn accumulates_all_unknown_labels() {
        let result = parse_keys("1 sin 2 cos 3 tan");

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                let positions: Vec<usize> = errors
                    .iter()
                    .filter_map(|e| match e {
                        KeyError::UnknownKey { position, .. } => Some(*position),
                        KeyError::Empty => None,
                    })
                    .collect();
                assert_eq!(positions, vec![1, 3, 5]);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(read_keys("   "), Err(vec![KeyError::Empty]));
    }

    #[test]
    fn press_labels_is_all_or_nothing() {
        let mut calc = Calculator::new();
        let result = calc.press_labels("9 9 ^ 9");

        assert!(result.is_err());
        assert!(calc.state().is_initial());
        assert!(calc.history().is_empty());

        assert_eq!(calc.press_labels("9 × 9 ="), Ok(4));
        assert_eq!(calc.display(), "81");
    }
}
