//! Configuration handling for the TUI

use crate::state::DEFAULT_MAX_IMAGE_BYTES;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Default signup endpoint
const DEFAULT_SIGNUP_URL: &str = "http://127.0.0.1:8080/api/auth/signup";
/// Environment override for the signup endpoint
pub const SIGNUP_URL_ENV: &str = "SIGNUP_TUI_URL";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Signup endpoint URL
    pub signup_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Largest accepted profile image
    pub max_image_bytes: Option<u64>,
    /// JSON file holding the session token
    pub session_file: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "signup", "signup-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, writing the defaults on first run so there is a
    /// file to edit
    pub fn load_or_init() -> Result<Self> {
        match Self::config_path() {
            Some(path) if !path.exists() => {
                let config = Self::default();
                if let Err(err) = config.save() {
                    warn!("Could not write default config to {}: {err}", path.display());
                }
                Ok(config)
            }
            _ => Self::load(),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Endpoint, with `SIGNUP_TUI_URL` taking precedence
    pub fn signup_url(&self) -> String {
        std::env::var(SIGNUP_URL_ENV)
            .ok()
            .filter(|url| !url.is_empty())
            .or_else(|| self.signup_url.clone())
            .unwrap_or_else(|| DEFAULT_SIGNUP_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    pub fn max_image_bytes(&self) -> u64 {
        self.max_image_bytes.unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }

    /// Session file, defaulting to `session.json` next to the config file
    pub fn session_file(&self) -> Option<PathBuf> {
        self.session_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.config_dir().join("session.json"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.signup_url.is_none());
        assert!(config.request_timeout_secs.is_none());
        assert!(config.max_image_bytes.is_none());
        assert!(config.session_file.is_none());
    }

    #[test]
    fn test_defaults_applied() {
        let config = TuiConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.max_image_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_configured_values_win_over_defaults() {
        let config = TuiConfig {
            request_timeout_secs: Some(5),
            max_image_bytes: Some(1024),
            session_file: Some(PathBuf::from("/tmp/session.json")),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_image_bytes(), 1024);
        assert_eq!(
            config.session_file(),
            Some(PathBuf::from("/tmp/session.json"))
        );
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            signup_url: Some("https://api.example.com/auth/signup".to_string()),
            request_timeout_secs: Some(10),
            max_image_bytes: Some(2048),
            session_file: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.signup_url,
            Some("https://api.example.com/auth/signup".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
        assert_eq!(parsed.max_image_bytes, Some(2048));
        assert!(parsed.session_file.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.signup_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"request_timeout_secs": 3, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.request_timeout_secs, Some(3));
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        // May pick up a real config file; only checks that loading works
        let result = TuiConfig::load();
        assert!(result.is_ok());
    }
}
