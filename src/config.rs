//! Runtime Configuration Module
//! Reads API endpoint settings from the environment (with .env support).

use std::env;
use thiserror::Error;

/// Default API base, matching the backend's development bind address.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Default target device id.
pub const DEFAULT_DEVICE_ID: i64 = 1;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("BOTDECK_DEVICE_ID is not an integer: {0}")]
    InvalidDeviceId(String),
    #[error("BOTDECK_API_BASE must start with http:// or https://: {0}")]
    InvalidApiBase(String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the device API, without a trailing slash.
    pub api_base: String,
    /// Identifier of the device addressed by commands.
    pub device_id: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            device_id: DEFAULT_DEVICE_ID,
        }
    }
}

impl Config {
    /// Read configuration from the process environment, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base = match env::var("BOTDECK_API_BASE") {
            Ok(raw) => Self::parse_api_base(&raw)?,
            Err(_) => DEFAULT_API_BASE.to_string(),
        };
        let device_id = match env::var("BOTDECK_DEVICE_ID") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidDeviceId(raw))?,
            Err(_) => DEFAULT_DEVICE_ID,
        };
        Ok(Self { api_base, device_id })
    }

    fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
        let trimmed = raw.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Ok(trimmed.to_string())
        } else {
            Err(ConfigError::InvalidApiBase(raw.to_string()))
        }
    }
}
