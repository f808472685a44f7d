//! Client configuration
//!
//! TOML file under the platform config dir, generated with defaults on
//! first run. Env vars override file values; the CLI overrides both.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::constants::{api, config};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the HR backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Initial window width in points
    #[serde(default = "default_window_width")]
    pub window_width: u16,

    /// Initial window height in points
    #[serde(default = "default_window_height")]
    pub window_height: u16,
}

fn default_api_base_url() -> String {
    api::DEFAULT_BASE_URL.to_string()
}

fn default_window_width() -> u16 {
    1000
}

fn default_window_height() -> u16 {
    720
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl AppConfig {
    fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    pub fn load() -> Self {
        let config_path = Self::config_path();
        if let Ok(contents) = fs::read_to_string(&config_path) {
            match toml::from_str::<AppConfig>(&contents) {
                Ok(mut loaded) => {
                    loaded.apply_env_overrides();
                    loaded.validate_and_clamp();
                    return loaded;
                }
                Err(e) => {
                    error!(path = %config_path.display(), error = %e, "Failed to parse config file");
                    error!(path = %config_path.display(), "Please fix the syntax errors in your config file.");
                    std::process::exit(1);
                }
            }
        }

        // No config file yet - write defaults so the user has something to edit
        info!("No config file found, generating default");
        let mut generated = AppConfig::default();
        generated.apply_env_overrides();
        generated.validate_and_clamp();
        if let Err(e) = generated.save() {
            error!(error = ?e, "Failed to save generated config");
        } else {
            info!(path = %config_path.display(), "Generated config file for user to edit (env vars still override)");
        }
        generated
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(&path, contents)
            .context(format!("Failed to write config file to {}", path.display()))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var(api::BASE_URL_ENV) {
            self.api_base_url = url;
        }
    }

    /// Normalize the base URL and clamp window geometry to safe ranges.
    /// Called after loading and again after CLI overrides.
    pub fn validate_and_clamp(&mut self) {
        use crate::constants::validation::*;

        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        if reqwest::Url::parse(&self.api_base_url).is_err() {
            error!(api_base_url = %self.api_base_url, "Invalid api_base_url, using default");
            self.api_base_url = default_api_base_url();
        }

        if self.window_width < MIN_WINDOW_DIMENSION {
            warn!(window_width = self.window_width, min = MIN_WINDOW_DIMENSION, "window_width below minimum, clamping");
            self.window_width = MIN_WINDOW_DIMENSION;
        } else if self.window_width > MAX_WINDOW_DIMENSION {
            warn!(window_width = self.window_width, max = MAX_WINDOW_DIMENSION, "window_width exceeds maximum, clamping");
            self.window_width = MAX_WINDOW_DIMENSION;
        }

        if self.window_height < MIN_WINDOW_DIMENSION {
            warn!(window_height = self.window_height, min = MIN_WINDOW_DIMENSION, "window_height below minimum, clamping");
            self.window_height = MIN_WINDOW_DIMENSION;
        } else if self.window_height > MAX_WINDOW_DIMENSION {
            warn!(window_height = self.window_height, max = MAX_WINDOW_DIMENSION, "window_height exceeds maximum, clamping");
            self.window_height = MAX_WINDOW_DIMENSION;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::validation;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, api::DEFAULT_BASE_URL);
        assert_eq!(config.window_width, 1000);
        assert_eq!(config.window_height, 720);
    }

    #[test]
    fn validate_trims_trailing_slashes() {
        let mut config = AppConfig {
            api_base_url: "http://hr.example.com/".to_string(),
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.api_base_url, "http://hr.example.com");
    }

    #[test]
    fn validate_rejects_unparseable_base_url() {
        let mut config = AppConfig {
            api_base_url: "not a url".to_string(),
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.api_base_url, api::DEFAULT_BASE_URL);
    }

    #[test]
    fn validate_clamps_window_geometry() {
        let mut config = AppConfig {
            window_width: 10,
            window_height: 50_000,
            ..AppConfig::default()
        };
        config.validate_and_clamp();
        assert_eq!(config.window_width, validation::MIN_WINDOW_DIMENSION);
        assert_eq!(config.window_height, validation::MAX_WINDOW_DIMENSION);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            api_base_url: "http://10.0.0.5:8000".to_string(),
            window_width: 1280,
            window_height: 800,
        };
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.api_base_url, config.api_base_url);
        assert_eq!(parsed.window_width, 1280);
        assert_eq!(parsed.window_height, 800);
    }
}
