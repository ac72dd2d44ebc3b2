//! Configuration and secret loading.
//!
//! `AppConfig` comes from an optional `aarav.toml` with environment
//! overrides applied on top: `PORT` (kept for parity with typical PaaS
//! conventions) and `AARAV_MODEL`. The provider credential is sourced
//! exclusively from the environment; it is never read from the config
//! file and never embedded in code.

use std::path::Path;

use secrecy::SecretString;
use tracing::warn;

use aarav_types::config::AppConfig;

/// Load configuration from an optional TOML file plus env overrides.
///
/// A missing file yields defaults; an unreadable or malformed file is an
/// error (silently ignoring a config the operator wrote would be worse).
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path).await?;
            toml::from_str(&raw)?
        }
        None => AppConfig::default(),
    };

    if let Some(port) = env_var("PORT") {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => warn!(value = %port, "ignoring non-numeric PORT"),
        }
    }
    if let Some(model) = env_var("AARAV_MODEL") {
        config.model = model;
    }

    Ok(config)
}

/// Read the provider API key from the environment.
///
/// Checks `GEMINI_API_KEY` first, then `GOOGLE_API_KEY`. Returns `None`
/// when neither is set; callers decide whether that is fatal (it is for
/// `serve`).
pub fn api_key_from_env() -> Option<SecretString> {
    env_var("GEMINI_API_KEY")
        .or_else(|| env_var("GOOGLE_API_KEY"))
        .map(SecretString::from)
}

/// `std::env::var` with non-Unicode values treated as unset: secrets and
/// settings must be valid strings.
fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => Some(val),
        _ => None,
    }
}
