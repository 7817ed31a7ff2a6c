//! Calculator configuration loaded from TOML.
//!
//! Every field is optional in the file; missing fields fall back to the
//! same defaults `Calculator::new` uses.
//!
//! ```toml
//! decimals = 4
//! rounding = "half-even"
//! tape_limit = 50
//! ```

use crate::core::{RoundingMode, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings that shape how results are rounded and recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Fractional digits kept in displayed results.
    pub decimals: u32,
    /// Tie-breaking rule for rounding.
    pub rounding: RoundingMode,
    /// Maximum number of calculations kept on the tape. Unbounded if absent.
    pub tape_limit: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
            rounding: RoundingMode::default(),
            tape_limit: None,
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.decimals, 6);
    }

    #[test]
    fn all_fields_parse() {
        let config = CalculatorConfig::from_toml_str(
            r#"
            decimals = 4
            rounding = "half-even"
            tape_limit = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.decimals, 4);
        assert_eq!(config.rounding, RoundingMode::HalfEven);
        assert_eq!(config.tape_limit, Some(50));
    }

    #[test]
    fn unknown_rounding_mode_is_rejected() {
        let result = CalculatorConfig::from_toml_str(r#"rounding = "stochastic""#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = CalculatorConfig::from_toml_str("precision = 3");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let result = CalculatorConfig::from_path("/nonexistent/abacus.toml");
        match result {
            Err(ConfigError::Read { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/abacus.toml"));
            }
            other => panic!("Expected read error, got {other:?}"),
        }
    }
}
