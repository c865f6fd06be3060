//! Keypad symbols and the binary operations they select.
//!
//! A [`Symbol`] is one discrete press on the keypad. Symbols carry no state;
//! all meaning comes from the engine transition that consumes them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Binary operation waiting for its right-hand operand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    None,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Glyph written into the equation trace, surrounding spaces included.
    ///
    /// Returns `None` for [`Operation::None`], which never reaches the trace.
    ///
    /// ```rust
    /// use abacus::core::Operation;
    ///
    /// assert_eq!(Operation::Multiply.trace_glyph(), Some(" × "));
    /// assert_eq!(Operation::None.trace_glyph(), None);
    /// ```
    pub fn trace_glyph(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Add => Some(" + "),
            Self::Subtract => Some(" - "),
            Self::Multiply => Some(" × "),
            Self::Divide => Some(" ÷ "),
        }
    }

    /// Apply the operation to two operands (pure).
    ///
    /// [`Operation::None`] yields `None`. Non-finite results are returned as-is;
    /// the engine decides what to do with them.
    pub fn apply(&self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Add => Some(left + right),
            Self::Subtract => Some(left - right),
            Self::Multiply => Some(left * right),
            Self::Divide => Some(left / right),
        }
    }

    pub fn is_pending(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// One key on the calculator keypad.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Operation, Symbol};
///
/// let symbol: Symbol = "×".parse().unwrap();
/// assert_eq!(symbol, Symbol::Operator(Operation::Multiply));
/// assert_eq!(Symbol::Negate.label(), "-/+");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// A digit key, always in `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operation),
    Equals,
    Clear,
    Negate,
    Percent,
}

impl Symbol {
    /// Every key on the keypad, in row order.
    pub const ALL: [Symbol; 19] = [
        Symbol::Clear,
        Symbol::Negate,
        Symbol::Percent,
        Symbol::Operator(Operation::Divide),
        Symbol::Digit(7),
        Symbol::Digit(8),
        Symbol::Digit(9),
        Symbol::Operator(Operation::Multiply),
        Symbol::Digit(4),
        Symbol::Digit(5),
        Symbol::Digit(6),
        Symbol::Operator(Operation::Subtract),
        Symbol::Digit(1),
        Symbol::Digit(2),
        Symbol::Digit(3),
        Symbol::Operator(Operation::Add),
        Symbol::Digit(0),
        Symbol::Decimal,
        Symbol::Equals,
    ];

    /// Build a digit symbol, refusing anything outside `0..=9`.
    pub fn digit(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self::Digit(value))
    }

    /// Label printed on the key.
    pub fn label(&self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Self::Digit(d) => DIGITS.get(usize::from(*d)).copied().unwrap_or("?"),
            Self::Decimal => ".",
            Self::Operator(Operation::Add) => "+",
            Self::Operator(Operation::Subtract) => "-",
            Self::Operator(Operation::Multiply) => "×",
            Self::Operator(Operation::Divide) => "÷",
            Self::Operator(Operation::None) => "",
            Self::Equals => "=",
            Self::Clear => "AC",
            Self::Negate => "-/+",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors produced while reading keypad labels.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Unknown key '{label}' at position {position}")]
    UnknownKey { label: String, position: usize },

    #[error("Empty key sequence")]
    Empty,
}

impl FromStr for Symbol {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = match s {
            "." | "," => Self::Decimal,
            "+" => Self::Operator(Operation::Add),
            "-" | "−" => Self::Operator(Operation::Subtract),
            "×" | "*" | "x" | "X" => Self::Operator(Operation::Multiply),
            "÷" | "/" => Self::Operator(Operation::Divide),
            "=" => Self::Equals,
            "AC" | "C" | "ac" => Self::Clear,
            "-/+" | "+/-" | "±" | "neg" => Self::Negate,
            "%" => Self::Percent,
            other => {
                let mut chars = other.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    // to_digit(10) is always below 10
                    (Some(d), None) => Self::Digit(d as u8),
                    _ => {
                        return Err(KeyError::UnknownKey {
                            label: other.to_string(),
                            position: 0,
                        })
                    }
                }
            }
        };
        Ok(symbol)
    }
}
