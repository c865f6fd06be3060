//! Calculator session that owns the engine state.

use crate::builder::BuildError;
use crate::config::EngineConfig;
use crate::core::{ArithmeticError, EngineState, Symbol, Tap, TapHistory};
use crate::engine::transition::{Engine, Outcome};
use chrono::Utc;

/// Stateful shell around the pure engine.
///
/// Presentation layers feed key presses into [`Calculator::press`] and read
/// [`Calculator::display`] and [`Calculator::equation`] afterwards.
///
/// # Example
///
/// ```rust
/// use abacus::{keys, Calculator};
///
/// let mut calc = Calculator::new();
/// calc.press_all(keys![1 2 * 3 =]);
///
/// assert_eq!(calc.display(), "36");
/// assert_eq!(calc.equation(), "12 × 3 = ");
/// ```
#[derive(Debug)]
pub struct Calculator {
    engine: Engine,
    current: EngineState,
    history: TapHistory,
    last: Option<Outcome>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator in the initial state with default settings.
    pub fn new() -> Self {
        Self::from_parts(EngineConfig::default(), EngineState::new())
    }

    /// Create a calculator in the initial state.
    ///
    /// Fails if the configuration is unusable (see [`EngineConfig::validate`]).
    pub fn with_config(config: EngineConfig) -> Result<Self, BuildError> {
        config.validate()?;
        Ok(Self::from_parts(config, EngineState::new()))
    }

    pub(crate) fn from_parts(config: EngineConfig, state: EngineState) -> Self {
        let history = TapHistory::with_limit(config.history_limit);
        Self {
            engine: Engine::new(config),
            current: state,
            history,
            last: None,
        }
    }

    /// Handle one key press.
    pub fn press(&mut self, symbol: Symbol) -> &Outcome {
        let outcome = self.engine.apply(&self.current, symbol);

        match &outcome {
            Outcome::Applied(next) => {
                tracing::debug!(
                    key = %symbol,
                    phase = next.phase().name(),
                    display = next.display_value(),
                    "key accepted"
                );
            }
            Outcome::Rejected { reason, .. } => {
                tracing::debug!(key = %symbol, %reason, "key refused");
            }
            Outcome::Failed { error, .. } => {
                tracing::warn!(key = %symbol, %error, "evaluation failed");
            }
        }

        self.history = self.history.record(Tap {
            symbol,
            result: outcome.tap_result(),
            timestamp: Utc::now(),
        });
        if let Outcome::Applied(next) = &outcome {
            self.current = next.clone();
        }
        self.last.insert(outcome)
    }

    /// Press every symbol in order, returning how many were accepted.
    pub fn press_all<I>(&mut self, symbols: I) -> usize
    where
        I: IntoIterator<Item = Symbol>,
    {
        symbols
            .into_iter()
            .filter(|&symbol| self.press(symbol).is_applied())
            .count()
    }

    /// Return to the initial state and forget the tap history.
    pub fn reset(&mut self) {
        self.current = EngineState::new();
        self.history = TapHistory::with_limit(self.engine.config().history_limit);
        self.last = None;
    }

    /// Primary readout.
    pub fn display(&self) -> &str {
        self.current.display_value()
    }

    /// Secondary trace line.
    pub fn equation(&self) -> &str {
        self.current.equation_trace()
    }

    pub fn state(&self) -> &EngineState {
        &self.current
    }

    pub fn config(&self) -> &EngineConfig {
        self.engine.config()
    }

    pub fn history(&self) -> &TapHistory {
        &self.history
    }

    /// Outcome of the most recent press, if any.
    pub fn last_outcome(&self) -> Option<&Outcome> {
        self.last.as_ref()
    }

    /// Arithmetic error raised by the most recent press.
    ///
    /// Hosts typically show this instead of the readout until the next press.
    pub fn last_error(&self) -> Option<&ArithmeticError> {
        self.last.as_ref().and_then(Outcome::error)
    }
}
