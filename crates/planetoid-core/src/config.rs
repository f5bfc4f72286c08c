use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::CoreError;

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub endpoints: EndpointsConfig,
    pub logging: LoggingConfig,
}

/// Full URLs of the three remote services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub players: String,
    pub pokemon: String,
    /// Includes the search term.
    pub series: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
}

impl AppConfig {
    /// Load config: user file (if exists) merged over built-in defaults.
    pub fn load() -> Result<Self, CoreError> {
        let user_path = Self::config_path();
        if user_path.exists() {
            Self::load_from(&user_path)
        } else {
            tracing::debug!(path = %user_path.display(), "no user config, using defaults");
            Self::from_toml_str("")
        }
    }

    /// Load a specific file merged over the built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        let user_str = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading user config");
        Self::from_toml_str(&user_str)
    }

    /// Parse `user` and lay it over the built-in defaults, key by key.
    pub fn from_toml_str(user: &str) -> Result<Self, CoreError> {
        let mut merged: toml::Table =
            toml::from_str(DEFAULT_CONFIG).map_err(|e| CoreError::Config(e.to_string()))?;
        let overrides: toml::Table =
            toml::from_str(user).map_err(|e| CoreError::Config(e.to_string()))?;
        merge_tables(&mut merged, overrides);

        let config: AppConfig = toml::Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Every endpoint must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, raw) in [
            ("players", &self.endpoints.players),
            ("pokemon", &self.endpoints.pokemon),
            ("series", &self.endpoints.series),
        ] {
            let url = Url::parse(raw)
                .map_err(|e| CoreError::Config(format!("invalid {name} endpoint {raw:?}: {e}")))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(CoreError::Config(format!(
                    "{name} endpoint must use http or https, got {:?}",
                    url.scheme()
                )));
            }
        }
        Ok(())
    }

    /// Render the effective config as TOML.
    pub fn to_toml_string(&self) -> Result<String, CoreError> {
        toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "planetoid")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

fn merge_tables(base: &mut toml::Table, overrides: toml::Table) {
    for (key, value) in overrides {
        match value {
            toml::Value::Table(child) => {
                if let Some(toml::Value::Table(base_child)) = base.get_mut(&key) {
                    merge_tables(base_child, child);
                    continue;
                }
                base.insert(key, toml::Value::Table(child));
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("built-in default config is valid TOML")
    }
}
