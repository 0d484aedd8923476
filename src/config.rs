//! Configuration System
//!
//! Handles loading configuration from TOML and environment variables.
//! The browser build embeds a TOML file at compile time and only uses
//! [`Config::from_toml_str`].

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::identity::IdentityKeys;
use crate::layout::DEFAULT_MOBILE_BREAKPOINT;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Sibling campus apps listed in the "other apps" modal
    #[serde(default)]
    pub other_apps: Vec<OtherApp>,
}

/// Backend API location
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Responsive layout configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint_px: u32,
}

fn default_mobile_breakpoint() -> u32 {
    DEFAULT_MOBILE_BREAKPOINT
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: default_mobile_breakpoint(),
        }
    }
}

/// Storage keys for the notification integration
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_user_id_key")]
    pub user_id_key: String,

    #[serde(default = "default_user_role_key")]
    pub user_role_key: String,
}

fn default_user_id_key() -> String {
    IdentityKeys::default().user_id
}

fn default_user_role_key() -> String {
    IdentityKeys::default().user_role
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_id_key: default_user_id_key(),
            user_role_key: default_user_role_key(),
        }
    }
}

impl IdentityConfig {
    pub fn keys(&self) -> IdentityKeys {
        IdentityKeys {
            user_id: self.user_id_key.clone(),
            user_role: self.user_role_key.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Entry in the "other apps" modal
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OtherApp {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("venue-hub").join("config.toml")),
            Some(PathBuf::from("/etc/venue-hub/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("VENUE_HUB_API_URL") {
            self.api.base_url = url;
        }
        if let Ok(breakpoint) = std::env::var("VENUE_HUB_MOBILE_BREAKPOINT") {
            match breakpoint.parse() {
                Ok(px) => self.layout.mobile_breakpoint_px = px,
                Err(_) => tracing::warn!("Ignoring invalid VENUE_HUB_MOBILE_BREAKPOINT: {}", breakpoint),
            }
        }
        if let Ok(level) = std::env::var("VENUE_HUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("VENUE_HUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// API base without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Venue Hub Configuration
#
# Environment variables override these settings:
# - VENUE_HUB_API_URL
# - VENUE_HUB_MOBILE_BREAKPOINT
# - VENUE_HUB_LOG_LEVEL
# - VENUE_HUB_LOG_FORMAT

[api]
# Base URL of the bookings API
base_url = "http://localhost:3000"

[layout]
# Viewport width (px) at or below which the bottom bar replaces the sidebar
mobile_breakpoint_px = 800

[identity]
# localStorage keys read by the push-notification integration
user_id_key = "onesignalUserId"
user_role_key = "onesignalUserRole"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty, json
format = "pretty"

# Sibling apps shown in the "Other Wits Apps" modal
# [[other_apps]]
# name = "Campus Transport"
# url = "https://transport.example.edu"
# description = "Bus schedules and live tracking"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_template_parses() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.layout.mobile_breakpoint_px, 800);
        assert_eq!(config.identity.keys(), IdentityKeys::default());
        assert_eq!(config.logging.format, "pretty");
        assert!(config.other_apps.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [api]
            base_url = "https://venues.example.edu/"

            [[other_apps]]
            name = "Library"
            url = "https://library.example.edu"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base(), "https://venues.example.edu");
        assert_eq!(config.layout.mobile_breakpoint_px, DEFAULT_MOBILE_BREAKPOINT);
        assert_eq!(config.other_apps.len(), 1);
        assert_eq!(config.other_apps[0].description, None);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml_str("[layout]\nmobile_breakpoint_px = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[identity]\nuser_id_key = \"pushUserId\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.identity.user_id_key, "pushUserId");
        assert_eq!(config.identity.user_role_key, "onesignalUserRole");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
