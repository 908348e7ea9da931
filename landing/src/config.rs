//! Site configuration.
//!
//! Read from `site.toml`, which is compiled into the bundle. A malformed file
//! falls back to defaults instead of breaking the page.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::time::Duration;

const EMBEDDED: &str = include_str!("../site.toml");

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| SiteConfig::load_from_str(EMBEDDED));

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Product name shown in the navbar, titles and footer.
    pub product: String,
    /// Package name used in install snippets (`pip install <package>`).
    pub package: String,
    pub repository: String,
    pub logo: String,
    /// Default gateway address used throughout the code samples.
    pub gateway_url: String,
    /// How long a code window shows "Copied" after a copy.
    pub copy_feedback_ms: u64,
    /// `tracing` max level: `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            product: "OllaBridge".into(),
            package: "ollabridge".into(),
            repository: "https://github.com/ruslanmv/ollabridge".into(),
            logo: "https://raw.githubusercontent.com/ruslanmv/ollabridge/refs/heads/master/assets/logo.svg"
                .into(),
            gateway_url: "http://localhost:11435".into(),
            copy_feedback_ms: 1200,
            log_level: "info".into(),
        }
    }
}

impl SiteConfig {
    /// The configuration embedded in this build.
    pub fn get() -> &'static SiteConfig {
        &CONFIG
    }

    /// Parse `content`, returning defaults if it is not valid TOML.
    pub fn load_from_str(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to parse site.toml, using defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// OpenAI-compatible base URL of the gateway.
    pub fn api_base(&self) -> String {
        format!("{}/v1", self.gateway_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_parses() {
        let config = SiteConfig::load_from_str(EMBEDDED);
        assert_eq!(config.product, "OllaBridge");
        assert_eq!(config.copy_feedback(), Duration::from_millis(1200));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = SiteConfig::load_from_str("product = \"Bridge\"\n");
        assert_eq!(config.product, "Bridge");
        assert_eq!(config.gateway_url, "http://localhost:11435");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn invalid_toml_falls_back_to_defaults() {
        let config = SiteConfig::load_from_str("product = [");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn api_base_appends_v1_once() {
        let mut config = SiteConfig::default();
        assert_eq!(config.api_base(), "http://localhost:11435/v1");

        config.gateway_url = "https://gateway.example.com/".into();
        assert_eq!(config.api_base(), "https://gateway.example.com/v1");
    }
}
