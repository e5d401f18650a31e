//! Gateway configuration.
//!
//! Deserialized from `config.toml` by the infra loader. The upstream API
//! key is wrapped in [`secrecy::SecretString`] so it never appears in
//! Debug output or logs.

use secrecy::SecretString;
use serde::Deserialize;

use crate::settings::Settings;

/// Top-level gateway configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Downstream engine connection.
    pub upstream: UpstreamConfig,
    /// Endpoint settings (loosely typed; booleans may be spelled as strings).
    pub settings: Settings,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8780".to_string(),
            upstream: UpstreamConfig::default(),
            settings: Settings::new(),
        }
    }
}

/// Connection details for the upstream engine API.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the engine API.
    pub base_url: String,
    /// Bearer token for the engine API. Never logged.
    pub api_key: SecretString,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5001/v1".to_string(),
            api_key: SecretString::from(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.bind_addr, "127.0.0.1:8780");
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:5001/v1");
        assert!(config.upstream.api_key.expose_secret().is_empty());
        assert!(config.settings.is_empty());
    }

    #[test]
    fn test_api_key_not_in_debug_output() {
        let mut config = GatewayConfig::default();
        config.upstream.api_key = SecretString::from("super-secret".to_string());
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GatewayConfig = toml::from_str(
            r#"
bind_addr = "0.0.0.0:9000"

[settings]
static_app_id = "app-1"
explicit_inputs = "true"
"#,
        )
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:5001/v1");
        assert_eq!(config.settings.text("static_app_id"), Some("app-1"));
    }
}
