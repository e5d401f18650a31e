//! Gateway configuration loader.
//!
//! Reads `config.toml` and deserializes it into
//! [`GatewayConfig`]. Falls back to defaults when the file is missing or
//! malformed, so a bare `hookrelay serve` still starts against a local
//! engine.

use std::path::Path;

use hookrelay_types::config::GatewayConfig;

/// Load gateway configuration from the given TOML file.
///
/// - If the file does not exist, returns [`GatewayConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(path: &Path) -> GatewayConfig {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return GatewayConfig::default();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using defaults", path.display());
            return GatewayConfig::default();
        }
    };

    match toml::from_str::<GatewayConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using defaults", path.display());
            GatewayConfig::default()
        }
    }
}
