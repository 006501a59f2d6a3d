//! Global configuration for the serving surfaces
//!
//! The core operations take all tunables as explicit arguments; settings
//! only feed the CLI and web layers, which turn them into a
//! `FragmentConfig` per call.

use std::sync::{Arc, LazyLock, RwLock};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{
    FragmentConfig, DEFAULT_HEALTH_CHECK_INTERVAL, DEFAULT_HEALTH_CHECK_URL,
    DEFAULT_REFRESH_INTERVAL,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings structure to hold global configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Path the settings were loaded from, empty for built-in defaults
    #[serde(skip)]
    pub pref_path: String,

    // Server
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u32,

    // Conversion defaults
    #[serde(default = "default_target")]
    pub default_target: String,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u32,
    #[serde(default = "default_health_check_interval")]
    pub health_check_interval: u32,
    #[serde(default = "default_health_check_url")]
    pub health_check_url: String,
}

// Default value functions for serde
fn default_listen_address() -> String {
    "127.0.0.1".to_string()
}

fn default_listen_port() -> u32 {
    25500
}

fn default_target() -> String {
    "clash".to_string()
}

fn default_refresh_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL
}

fn default_health_check_interval() -> u32 {
    DEFAULT_HEALTH_CHECK_INTERVAL
}

fn default_health_check_url() -> String {
    DEFAULT_HEALTH_CHECK_URL.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            pref_path: String::new(),
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            default_target: default_target(),
            refresh_interval: default_refresh_interval(),
            health_check_interval: default_health_check_interval(),
            health_check_url: default_health_check_url(),
        }
    }
}

impl Settings {
    /// Create a new settings instance with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current() -> Arc<Settings> {
        global.read().unwrap().clone()
    }

    /// Parse settings from TOML content
    pub fn load_from_content(content: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = toml::from_str(content)?;
        if settings.listen_address.trim().is_empty() {
            settings.listen_address = default_listen_address();
        }
        Ok(settings)
    }

    /// Load settings from a file path
    pub fn load_from_file(path: &str) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let mut settings = Settings::load_from_content(&content)?;
        settings.pref_path = path.to_owned();
        Ok(settings)
    }

    /// Build the per-call fragment constants from these settings
    pub fn fragment_config(&self) -> FragmentConfig {
        FragmentConfig {
            refresh_interval: self.refresh_interval,
            health_check_interval: self.health_check_interval,
            health_check_url: self.health_check_url.clone(),
        }
    }
}

// Global settings instance
#[allow(non_upper_case_globals)]
pub static global: LazyLock<RwLock<Arc<Settings>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Settings::new())));

/// Initialize global settings, from a config file when a path is given
pub fn init_settings(path: &str) -> Result<(), SettingsError> {
    let settings = if path.is_empty() {
        Settings::new()
    } else {
        Settings::load_from_file(path)?
    };
    *global.write().unwrap() = Arc::new(settings);
    Ok(())
}

/// Replace global settings from TOML content
pub fn update_settings_from_content(content: &str) -> Result<(), SettingsError> {
    let settings = Settings::load_from_content(content)?;
    *global.write().unwrap() = Arc::new(settings);
    Ok(())
}
