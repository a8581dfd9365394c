//! Daemon configuration with TOML file support.

use florin_types::EconomyParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for the florin daemon.
///
/// Can be loaded from a TOML file via [`EconomyConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Path of the ledger log file.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Control-loop parameters (amounts in micro-units).
    #[serde(default)]
    pub params: EconomyParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_ledger_path() -> PathBuf {
    PathBuf::from("./florin_data/ledger")
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl EconomyConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("EconomyConfig is always serializable to TOML")
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
            log_level: default_log_level(),
            params: EconomyParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use florin_types::Amount;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = EconomyConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = EconomyConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.ledger_path, config.ledger_path);
        assert_eq!(parsed.params.stipend_interval_ms, config.params.stipend_interval_ms);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = EconomyConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.params.target_per_user, Amount::from_units(100));
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            log_level = "debug"

            [params]
            target_per_user = 200000000
            base_stipend = 10000000
            base_fee_rate = 0.05
            stipend_interval_ms = 3600000
        "#;
        let config = EconomyConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.params.target_per_user, Amount::from_units(200));
        assert_eq!(config.params.base_fee_rate, 0.05);
        assert_eq!(config.ledger_path, PathBuf::from("./florin_data/ledger")); // default
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = EconomyConfig::from_toml_file(std::path::Path::new("/nonexistent/florin.toml"));
        assert!(matches!(result, Err(ConfigError::Read(_))));
    }
}
