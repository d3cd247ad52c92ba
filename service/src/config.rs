//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use touchgrass_types::EngineParams;

use crate::ServiceError;

/// Configuration for an embedded touchgrass core.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Default search radius for patch discovery, in meters.
    #[serde(default = "default_search_radius_m")]
    pub search_radius_m: u32,

    /// Engine and scoring parameters. Absent sections fall back to the
    /// touchgrass defaults.
    #[serde(default)]
    pub params: EngineParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_search_radius_m() -> u32 {
    5_000
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            log_level: default_log_level(),
            search_radius_m: default_search_radius_m(),
            params: EngineParams::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_the_default_config() {
        let parsed = ServiceConfig::from_toml_str("").unwrap();
        let defaults = ServiceConfig::default();
        assert_eq!(parsed.log_format, defaults.log_format);
        assert_eq!(parsed.log_level, defaults.log_level);
        assert_eq!(parsed.search_radius_m, defaults.search_radius_m);
        assert_eq!(parsed.params.challenge_duration_secs, 3600);
        assert_eq!(parsed.params.success_base_award, 25);
    }

    #[test]
    fn overrides_compose_with_defaults() {
        let parsed = ServiceConfig::from_toml_str(
            r#"
            log_level = "debug"
            search_radius_m = 1200

            [params]
            challenge_duration_secs = 900
            "#,
        )
        .unwrap();
        assert_eq!(parsed.log_level, "debug");
        assert_eq!(parsed.search_radius_m, 1200);
        assert_eq!(parsed.params.challenge_duration_secs, 900);
        // Untouched fields keep their defaults.
        assert_eq!(parsed.log_format, "human");
        assert_eq!(parsed.params.failure_penalty, 15);
    }

    #[test]
    fn serialized_config_parses_back_identically() {
        let config = ServiceConfig::default();
        let parsed = ServiceConfig::from_toml_str(&config.to_toml_string()).unwrap();
        assert_eq!(parsed.search_radius_m, config.search_radius_m);
        assert_eq!(parsed.params.confidence_bonus_threshold, 80);
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let err = ServiceConfig::from_toml_file("/nonexistent/touchgrass.toml").unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }
}
