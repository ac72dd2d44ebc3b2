//! Server configuration for the Aarav relay.
//!
//! `AppConfig` is deserializable from an optional `aarav.toml`; every
//! field has a default so an absent or empty file works. Environment
//! overrides (`PORT`, `AARAV_MODEL`) are applied by the loader in
//! aarav-infra.

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// TCP port the HTTP server binds.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Generation model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Deadline for a single provider call, in seconds. A timeout is
    /// treated like any other provider failure.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            model: default_model(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
port = 8080
model = "gemini-2.0-pro"
"#,
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.model, "gemini-2.0-pro");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = AppConfig {
            port: 9000,
            host: "127.0.0.1".to_string(),
            model: "gemini-2.5-flash".to_string(),
            request_timeout_secs: 30,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.port, 9000);
        assert_eq!(parsed.host, "127.0.0.1");
    }
}
