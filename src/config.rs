//! Startup configuration read from environment variables.
//!
//! # Environment Variables
//!
//! - `CHARADES_LOG_PATH`: Write logs to this file (logging is off when unset)
//! - `CHARADES_LOG`: Log filter directives (default: "info")
//! - `CHARADES_KEY_TILT_HOLD_MS`: Keyboard tilt release timeout (default: 600)
//! - `CHARADES_SEED`: Seed for reproducible decks
//! - `CHARADES_SENSOR_*`: Sensor feed settings, see [`crate::sensor`]

use std::path::PathBuf;

use crate::sensor::ServerConfig;
use crate::types::DEFAULT_KEY_TILT_HOLD_MS;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sensor: ServerConfig,
    pub sensor_disabled: bool,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
    pub key_tilt_hold_ms: u32,
    pub seed: Option<u32>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sensor: ServerConfig::default(),
            sensor_disabled: false,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            key_tilt_hold_ms: DEFAULT_KEY_TILT_HOLD_MS,
            seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("CHARADES_LOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let log_filter =
            lookup("CHARADES_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let key_tilt_hold_ms = lookup("CHARADES_KEY_TILT_HOLD_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_TILT_HOLD_MS);
        let seed = lookup("CHARADES_SEED").and_then(|s| s.trim().parse().ok());

        Self {
            sensor: ServerConfig::from_lookup(&lookup),
            sensor_disabled: ServerConfig::disabled_in(&lookup),
            log_path,
            log_filter,
            key_tilt_hold_ms,
            seed,
        }
    }
}
