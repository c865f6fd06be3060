//! Macros for writing keypad sequences.

/// Build a `Vec<Symbol>` from keypad tokens separated by spaces.
///
/// Digits `0`-`9`, `.`, `+`, `-`, `*` (or `x`), `/`, `%` and `=` map to their
/// keys; `neg` is the sign toggle and `ac` is clear. Tokens must be separated
/// by whitespace (`= =`, not `==`).
///
/// # Example
///
/// ```
/// use abacus::core::{Operation, Symbol};
/// use abacus::keys;
///
/// let symbols = keys![1 2 + 3 =];
/// assert_eq!(
///     symbols,
///     vec![
///         Symbol::Digit(1),
///         Symbol::Digit(2),
///         Symbol::Operator(Operation::Add),
///         Symbol::Digit(3),
///         Symbol::Equals,
///     ]
/// );
/// ```
#[macro_export]
macro_rules! keys {
    (@key 0) => { $crate::core::Symbol::Digit(0) };
    (@key 1) => { $crate::core::Symbol::Digit(1) };
    (@key 2) => { $crate::core::Symbol::Digit(2) };
    (@key 3) => { $crate::core::Symbol::Digit(3) };
    (@key 4) => { $crate::core::Symbol::Digit(4) };
    (@key 5) => { $crate::core::Symbol::Digit(5) };
    (@key 6) => { $crate::core::Symbol::Digit(6) };
    (@key 7) => { $crate::core::Symbol::Digit(7) };
    (@key 8) => { $crate::core::Symbol::Digit(8) };
    (@key 9) => { $crate::core::Symbol::Digit(9) };
    (@key .) => { $crate::core::Symbol::Decimal };
    (@key +) => { $crate::core::Symbol::Operator($crate::core::Operation::Add) };
    (@key -) => { $crate::core::Symbol::Operator($crate::core::Operation::Subtract) };
    (@key *) => { $crate::core::Symbol::Operator($crate::core::Operation::Multiply) };
    (@key x) => { $crate::core::Symbol::Operator($crate::core::Operation::Multiply) };
    (@key /) => { $crate::core::Symbol::Operator($crate::core::Operation::Divide) };
    (@key %) => { $crate::core::Symbol::Percent };
    (@key =) => { $crate::core::Symbol::Equals };
    (@key neg) => { $crate::core::Symbol::Negate };
    (@key ac) => { $crate::core::Symbol::Clear };
    ($($key:tt)*) => {{
        let symbols: ::std::vec::Vec<$crate::core::Symbol> = vec![$($crate::keys!(@key $key)),*];
        symbols
    }};
}
