//! Client Configuration
//!
//! Defaults, overridable at build time (`TODO_API_BASE_URL`) or at runtime
//! with a JSON document supplied by the host page.

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_NOTIFICATION_TIMEOUT_MS: u32 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin (plus optional prefix) that serves `/todos`
    pub api_base_url: String,
    /// How long a notification stays open before dismissing itself
    pub notification_timeout_ms: u32,
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
}

/// Runtime override document; every field optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct Overrides {
    api_base_url: Option<String>,
    notification_timeout_ms: Option<u32>,
    log_level: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notification_timeout_ms: DEFAULT_NOTIFICATION_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Defaults plus whatever was baked in at compile time
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("TODO_API_BASE_URL") {
            config.api_base_url = url.to_string();
        }
        config.normalized()
    }

    /// Defaults overlaid with a JSON document
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        Self::default().overlay_json(raw)
    }

    /// Fields present in `raw` win; absent ones keep their current value
    pub fn overlay_json(mut self, raw: &str) -> Result<Self, serde_json::Error> {
        let overrides: Overrides = serde_json::from_str(raw)?;
        if let Some(url) = overrides.api_base_url {
            self.api_base_url = url;
        }
        if let Some(ms) = overrides.notification_timeout_ms {
            self.notification_timeout_ms = ms;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        Ok(self.normalized())
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = trimmed.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5001");
        assert_eq!(config.notification_timeout_ms, 3000);
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ClientConfig::from_json(r#"{"api_base_url": "https://todo.example/api/"}"#).unwrap();
        assert_eq!(config.api_base_url, "https://todo.example/api");
        assert_eq!(config.notification_timeout_ms, 3000);
    }

    #[test]
    fn test_overlay_keeps_existing_values() {
        let base = ClientConfig::default().with_base_url("http://built.in:9000");
        let config = base.overlay_json(r#"{"notification_timeout_ms": 500}"#).unwrap();
        assert_eq!(config.api_base_url, "http://built.in:9000");
        assert_eq!(config.notification_timeout_ms, 500);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(ClientConfig::from_json(r#"{"api_url": "http://typo"}"#).is_err());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClientConfig::from_json("{ nope").is_err());
    }

    #[test]
    fn test_level_filter_parsing() {
        let config = ClientConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);

        let config = ClientConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_with_base_url_trims_slashes() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:8080//");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }
}
