//! Tap history tracking.
//!
//! Provides immutable, in-memory tracking of every symbol pressed during a
//! session, following functional programming principles.

use super::error::ArithmeticError;
use super::guard::Rejection;
use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// What became of a single press.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TapResult {
    Accepted,
    Rejected(Rejection),
    Failed(ArithmeticError),
}

/// Record of a single key press.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Symbol, Tap, TapResult};
/// use chrono::Utc;
///
/// let tap = Tap {
///     symbol: Symbol::Digit(3),
///     result: TapResult::Accepted,
///     timestamp: Utc::now(),
/// };
/// assert!(tap.is_accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    /// The key that was pressed
    pub symbol: Symbol,
    /// Whether the engine accepted it
    pub result: TapResult,
    /// When the press was handled
    pub timestamp: DateTime<Utc>,
}

impl Tap {
    pub fn is_accepted(&self) -> bool {
        matches!(self.result, TapResult::Accepted)
    }
}

/// Ordered history of key presses.
///
/// History is immutable - the `record` method returns a new history with the
/// tap added. When a limit is set, the oldest taps are dropped first.
///
/// # Example
///
/// ```rust
/// use abacus::core::{Symbol, Tap, TapHistory, TapResult};
/// use chrono::Utc;
///
/// let history = TapHistory::new();
/// let history = history.record(Tap {
///     symbol: Symbol::Digit(1),
///     result: TapResult::Accepted,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.symbols(), vec![Symbol::Digit(1)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TapHistory {
    taps: VecDeque<Tap>,
    limit: Option<usize>,
}

impl TapHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            taps: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` taps.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            taps: VecDeque::new(),
            limit,
        }
    }

    /// Record a tap, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history.
    pub fn record(&self, tap: Tap) -> Self {
        let mut taps = self.taps.clone();
        taps.push_back(tap);
        if let Some(limit) = self.limit {
            while taps.len() > limit {
                taps.pop_front();
            }
        }
        Self {
            taps,
            limit: self.limit,
        }
    }

    /// Symbols in the order they were pressed.
    pub fn symbols(&self) -> Vec<Symbol> {
        self.taps.iter().map(|t| t.symbol).collect()
    }

    /// Symbols the engine accepted, in order.
    pub fn accepted(&self) -> Vec<Symbol> {
        self.taps
            .iter()
            .filter(|t| t.is_accepted())
            .map(|t| t.symbol)
            .collect()
    }

    pub fn rejected_count(&self) -> usize {
        self.taps.iter().filter(|t| !t.is_accepted()).count()
    }

    /// Time between the first and last recorded tap.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.taps.front(), self.taps.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn taps(&self) -> impl Iterator<Item = &Tap> {
        self.taps.iter()
    }

    pub fn len(&self) -> usize {
        self.taps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taps.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(symbol: Symbol) -> Tap {
        Tap {
            symbol,
            result: TapResult::Accepted,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TapHistory::new();
        assert!(history.is_empty());
        assert!(history.symbols().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TapHistory::new();
        let new_history = history.record(tap(Symbol::Digit(4)));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn symbols_keep_press_order() {
        let history = TapHistory::new()
            .record(tap(Symbol::Digit(3)))
            .record(tap(Symbol::Equals))
            .record(tap(Symbol::Clear));

        assert_eq!(
            history.symbols(),
            vec![Symbol::Digit(3), Symbol::Equals, Symbol::Clear]
        );
    }

    #[test]
    fn limit_drops_oldest_taps() {
        let mut history = TapHistory::with_limit(Some(2));
        for d in 1..=4 {
            history = history.record(tap(Symbol::Digit(d)));
        }

        assert_eq!(history.symbols(), vec![Symbol::Digit(3), Symbol::Digit(4)]);
        assert_eq!(history.limit(), Some(2));
    }

    #[test]
    fn rejected_taps_are_counted_but_not_accepted() {
        let history = TapHistory::new().record(tap(Symbol::Digit(1))).record(Tap {
            symbol: Symbol::Decimal,
            result: TapResult::Rejected(Rejection::DecimalAlreadyEntered),
            timestamp: Utc::now(),
        });

        assert_eq!(history.rejected_count(), 1);
        assert_eq!(history.accepted(), vec![Symbol::Digit(1)]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = TapHistory::new()
            .record(Tap {
                symbol: Symbol::Digit(1),
                result: TapResult::Accepted,
                timestamp: start,
            })
            .record(Tap {
                symbol: Symbol::Equals,
                result: TapResult::Accepted,
                timestamp: start + chrono::Duration::milliseconds(25),
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TapHistory::with_limit(Some(8)).record(tap(Symbol::Percent));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TapHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
