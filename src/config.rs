//! Engine configuration.

use crate::builder::BuildError;
use serde::{Deserialize, Serialize};

/// Default digit-length cap of the readout.
pub const DEFAULT_MAX_INPUT_LEN: usize = 10;

/// Default number of taps kept in the session history.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Tunable engine behavior.
///
/// Missing fields take their defaults when deserializing.
///
/// ```rust
/// use abacus::EngineConfig;
///
/// let config = EngineConfig::from_json(r#"{ "max_input_len": 12 }"#).unwrap();
/// assert_eq!(config.max_input_len, 12);
/// assert!(config.decimal_lock);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Digits are refused once the readout is longer than this.
    pub max_input_len: usize,

    /// Refuse operators, percent and sign toggle while a decimal number is
    /// being typed.
    pub decimal_lock: bool,

    /// Taps kept in the session history; `None` keeps everything.
    pub history_limit: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            decimal_lock: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl EngineConfig {
    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.max_input_len == 0 {
            return Err(BuildError::ZeroInputLength);
        }
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_lock_decimals_and_cap_input() {
        let config = EngineConfig::default();
        assert_eq!(config.max_input_len, 10);
        assert!(config.decimal_lock);
        assert_eq!(config.history_limit, Some(256));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config =
            EngineConfig::from_json(r#"{ "decimal_lock": false, "history_limit": null }"#)
                .unwrap();
        assert!(!config.decimal_lock);
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn zero_values_are_refused() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "max_input_len": 0 }"#),
            Err(BuildError::ZeroInputLength)
        ));
        assert!(matches!(
            EngineConfig::from_json(r#"{ "history_limit": 0 }"#),
            Err(BuildError::ZeroHistoryLimit)
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = EngineConfig::from_json("{ max_input_len: }");
        assert!(matches!(result, Err(BuildError::InvalidConfig(_))));
    }
}
