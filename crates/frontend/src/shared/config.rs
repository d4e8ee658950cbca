//! Client configuration, parsed once from the `config.toml` embedded at build time

use contracts::shared::config::{ClientConfig, DEFAULT_CONFIG};
use once_cell::sync::Lazy;

const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

static CONFIG: Lazy<ClientConfig> = Lazy::new(|| load(EMBEDDED_CONFIG));

/// Active configuration
pub fn config() -> &'static ClientConfig {
    &CONFIG
}

fn load(contents: &str) -> ClientConfig {
    match ClientConfig::from_toml(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            ClientConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
        }
    }
}
