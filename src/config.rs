//! Engine configuration.
//!
//! This module provides the [`EngineConfig`] type, loadable from a YAML
//! file or constructed with defaults. Configuration covers the tunable
//! constants of the payroll computation (the meal allowance amount), the
//! reporting engine (top-earner list size) and the data-access discipline
//! (per-call timeout for report reads).

use std::fs;
use std::path::Path;
use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

fn default_meal_allowance() -> Decimal {
    Decimal::from(25_000)
}

fn default_top_earner_limit() -> usize {
    10
}

fn default_query_timeout_secs() -> u64 {
    30
}

/// Runtime configuration for the payroll engine.
///
/// Every field has a default, so a partial (or absent) configuration file
/// still yields a working engine.
///
/// # Example
///
/// ```
/// use payroll_engine::config::EngineConfig;
/// use rust_decimal::Decimal;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.meal_allowance_per_day, Decimal::from(25_000));
/// assert_eq!(config.top_earner_limit, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Fixed amount paid per attendance day flagged with a meal allowance.
    #[serde(default = "default_meal_allowance")]
    pub meal_allowance_per_day: Decimal,
    /// Number of employees listed in the payroll report's top-earner table.
    #[serde(default = "default_top_earner_limit")]
    pub top_earner_limit: usize,
    /// Upper bound, in seconds, for a single report computation. Reads that
    /// exceed it surface as retryable `Unexpected` errors; mutating
    /// operations are never bounded or retried this way.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            meal_allowance_per_day: default_meal_allowance(),
            top_earner_limit: default_top_earner_limit(),
            query_timeout_secs: default_query_timeout_secs(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns an `EngineConfig` on success, or an error if the file is
    /// missing (`ConfigNotFound`) or contains invalid YAML
    /// (`ConfigParseError`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// The report timeout as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = EngineConfig::default();
        assert_eq!(config.meal_allowance_per_day, Decimal::from(25_000));
        assert_eq!(config.top_earner_limit, 10);
        assert_eq!(config.query_timeout_secs, 30);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EngineConfig = serde_yaml::from_str("meal_allowance_per_day: 30000").unwrap();
        assert_eq!(config.meal_allowance_per_day, Decimal::from(30_000));
        assert_eq!(config.top_earner_limit, 10);
        assert_eq!(config.query_timeout_secs, 30);
    }

    #[test]
    fn test_empty_yaml_is_all_defaults() {
        let config: EngineConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = EngineConfig::load("/nonexistent/engine.yaml");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("engine.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_query_timeout_duration() {
        let config = EngineConfig {
            query_timeout_secs: 5,
            ..EngineConfig::default()
        };
        assert_eq!(config.query_timeout(), Duration::from_secs(5));
    }
}
