use anyhow::{Context, Result};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::stores::profiles::DEFAULT_USER_ID;

/// Client configuration. Every field has a default, so a stored override may
/// name only the fields it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub brand_name: String,
    pub logo_url: String,
    /// Profile shown on `/profile`
    pub default_user_id: String,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_name: "ChatAndBuild".to_string(),
            logo_url: "/logo.svg".to_string(),
            default_user_id: DEFAULT_USER_ID.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid client configuration")
    }

    /// Configured log level, `Info` when unrecognised
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

/// Global client configuration
pub static APP_CONFIG: GlobalSignal<AppConfig> = Signal::global(AppConfig::default);

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const STORAGE_KEY: &str = "chatandbuild_config";

/// Read the stored override from localStorage, falling back to defaults
pub fn load_config() -> AppConfig {
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_storage::{LocalStorage, Storage};

        if let Ok(Some(raw)) = LocalStorage::raw().get_item(STORAGE_KEY) {
            match AppConfig::from_json(&raw) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring stored configuration: {:#}", e),
            }
        }
    }

    AppConfig::default()
}

/// Initialize the global configuration signal
pub fn init_config() {
    let config = load_config();
    if *APP_CONFIG.read() != config {
        log::info!("Loaded client configuration: {:?}", config);
        *APP_CONFIG.write() = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.brand_name, "ChatAndBuild");
        assert_eq!(config.default_user_id, "alexjohnson");
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_default_logo_is_served_from_public() {
        let logo = AppConfig::default().logo_url;
        let file = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(logo.trim_start_matches('/'));
        assert!(file.is_file(), "missing {}", file.display());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"log_level": "debug"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Debug);
        assert_eq!(config.brand_name, "ChatAndBuild");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = AppConfig::from_json(r#"{"log_level": "loud"}"#).unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let err = AppConfig::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("Invalid client configuration"));
    }
}
