//! Configuration for algokit (TOML)
//!
//! ```toml
//! [dijkstra]
//! direction = "both"
//! max_cost = 25.0
//!
//! [log]
//! level = "debug"
//! json = false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AlgoError, Result};
use crate::graph::TraversalOptions;

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Shortest-path traversal defaults
    #[serde(default)]
    pub dijkstra: TraversalOptions,

    /// Logging setup
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging configuration, see [`crate::logging::init_from_config`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level or full filter directive (e.g. `debug` or `algokit=trace`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| AlgoError::invalid_argument("config", e))?;
        config.dijkstra.validate()?;
        Ok(config)
    }

    /// Load configuration from disk; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AlgoError::invalid_argument(
                "config",
                format!("failed to read {}: {}", path.display(), e),
            )
        })?;

        Self::from_toml_str(&content)
    }

    /// Serialize configuration back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| AlgoError::invalid_argument("config", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn test_empty_document_is_default() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.dijkstra.direction, Direction::Out);
        assert!(config.dijkstra.max_cost.is_none());
    }

    #[test]
    fn test_parse_full_document() {
        let config = Config::from_toml_str(
            r#"
            [dijkstra]
            direction = "both"
            max_cost = 12.5

            [log]
            level = "trace"
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.dijkstra.direction, Direction::Both);
        assert_eq!(config.dijkstra.max_cost, Some(12.5));
        assert_eq!(config.log.level.as_deref(), Some("trace"));
        assert!(config.log.json);
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let err = Config::from_toml_str("[dijkstra]\ndirection = \"sideways\"\n").unwrap_err();
        assert_eq!(err.context(), "config");
    }

    #[test]
    fn test_negative_max_cost_rejected() {
        let err = Config::from_toml_str("[dijkstra]\nmax_cost = -1.0\n").unwrap_err();
        assert_eq!(err.context(), "max_cost");
    }

    #[test]
    fn test_toml_roundtrip_keeps_options() {
        let mut config = Config::default();
        config.dijkstra.direction = Direction::In;
        config.dijkstra.max_cost = Some(3.0);

        let text = config.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
