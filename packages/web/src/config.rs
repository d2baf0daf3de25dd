//! Client configuration compiled into the binary.

use store::ClientConfig;

const EMBEDDED: &str = include_str!("../tutoring.toml");

/// Build-time override for `api.base_url`.
const API_URL_OVERRIDE: Option<&str> = option_env!("TUTORING_API_URL");

pub fn load() -> ClientConfig {
    resolve(EMBEDDED, API_URL_OVERRIDE)
}

fn resolve(text: &str, base_url: Option<&str>) -> ClientConfig {
    let mut config = ClientConfig::from_toml(text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, file = ClientConfig::filename(), "invalid config, using defaults");
        ClientConfig::default()
    });
    if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
        config.api.base_url = url.to_string();
    }
    tracing::debug!(base_url = %config.api.base_url, "client configured");
    config
}
