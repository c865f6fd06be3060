//! Builder for constructing calculators.

use crate::builder::error::BuildError;
use crate::checkpoint::{describe, validate_state};
use crate::config::EngineConfig;
use crate::core::EngineState;
use crate::engine::Calculator;
use stillwater::validation::Validation;

/// Builder for constructing calculators with a fluent API.
///
/// # Example
///
/// ```
/// use abacus::builder::CalculatorBuilder;
///
/// let calc = CalculatorBuilder::new()
///     .max_input_len(12)
///     .decimal_lock(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(calc.config().max_input_len, 12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: EngineConfig,
    initial: Option<EngineState>,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the digit-length cap.
    pub fn max_input_len(mut self, len: usize) -> Self {
        self.config.max_input_len = len;
        self
    }

    /// Enable or disable the decimal lock on operators, percent and sign toggle.
    pub fn decimal_lock(mut self, enabled: bool) -> Self {
        self.config.decimal_lock = enabled;
        self
    }

    /// Keep at most `limit` taps in the session history.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Keep every tap in the session history.
    pub fn unbounded_history(mut self) -> Self {
        self.config.history_limit = None;
        self
    }

    /// Start from a given state instead of the initial one.
    pub fn initial(mut self, state: EngineState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Build the calculator.
    /// Returns an error if the configuration is unusable or the initial
    /// state breaks an engine invariant.
    pub fn build(self) -> Result<Calculator, BuildError> {
        self.config.validate()?;
        let state = self.initial.unwrap_or_default();
        if let Validation::Failure(violations) = validate_state(&state) {
            return Err(BuildError::InvalidState(describe(&violations)));
        }
        Ok(Calculator::from_parts(self.config, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys;

    #[test]
    fn builder_validates_input_length() {
        let result = CalculatorBuilder::new().max_input_len(0).build();

        assert!(matches!(result, Err(BuildError::ZeroInputLength)));
    }

    #[test]
    fn builder_validates_history_limit() {
        let result = CalculatorBuilder::new().history_limit(0).build();

        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    #[test]
    fn fluent_api_builds_calculator() {
        let calc = CalculatorBuilder::new()
            .max_input_len(4)
            .decimal_lock(false)
            .unbounded_history()
            .build()
            .unwrap();

        assert_eq!(calc.config().max_input_len, 4);
        assert!(!calc.config().decimal_lock);
        assert_eq!(calc.history().limit(), None);
        assert!(calc.state().is_initial());
    }

    #[test]
    fn initial_state_is_used() {
        let mut seed = Calculator::new();
        seed.press_all(keys![4 2]);

        let mut calc = CalculatorBuilder::new()
            .initial(seed.state().clone())
            .build()
            .unwrap();
        calc.press_all(keys![+ 8 =]);

        assert_eq!(calc.display(), "50");
        assert_eq!(calc.equation(), "42 + 8 = ");
    }

    #[test]
    fn broken_initial_state_is_refused() {
        let mut state = Calculator::new().state().clone();
        state.display_value = "1.2.3".to_string();
        state.accumulator = f64::INFINITY;

        match CalculatorBuilder::new().initial(state).build() {
            Err(BuildError::InvalidState(message)) => {
                assert!(message.contains("1.2.3"));
                assert!(message.contains("inf"));
            }
            other => panic!("Expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn config_replaces_all_settings() {
        let config = EngineConfig {
            max_input_len: 3,
            decimal_lock: false,
            history_limit: Some(5),
        };
        let calc = CalculatorBuilder::new().config(config.clone()).build().unwrap();

        assert_eq!(calc.config(), &config);
    }
}
