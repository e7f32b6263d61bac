//! Native runner settings
//!
//! Loaded from a JSON file; every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TICK_RATE;
use crate::sim::Level;
use crate::tuning::Tuning;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "platformer.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Runner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Pace ticks against the wall clock (off = run as fast as possible)
    pub realtime: bool,
    /// Ticks the demo autopilot plays before exiting
    pub demo_ticks: u64,
    /// Autopilot seed
    pub seed: u64,
    pub tuning: Tuning,
    /// Custom level grid; the classic level when absent
    pub level: Option<Level>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            realtime: false,
            demo_ticks: 60 * u64::from(TICK_RATE),
            seed: 0x5eed,
            tuning: Tuning::default(),
            level: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("No {} found, using default settings", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    /// The level to play
    pub fn level(&self) -> Level {
        self.level.clone().unwrap_or_else(Level::classic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TileCode;

    #[test]
    fn test_empty_object_is_default() {
        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s.tick_rate, 60);
        assert!(!s.realtime);
        assert_eq!(s.tuning, Tuning::default());
        assert_eq!(s.level(), Level::classic());
    }

    #[test]
    fn test_custom_level_and_tuning() {
        let s = Settings::from_json(
            r#"{ "seed": 7, "tuning": { "move_speed": 3.0 }, "level": [[0, 4], [2, 2]] }"#,
        )
        .unwrap();
        assert_eq!(s.seed, 7);
        assert_eq!(s.tuning.move_speed, 3.0);
        assert_eq!(s.level().get(0, 1), Some(TileCode::CoinSpawn));
    }

    #[test]
    fn test_malformed_level_fails_load() {
        let err = Settings::from_json(r#"{ "level": [[0, 1], [1]] }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let s = Settings::load_or_default(Path::new("/nonexistent/platformer.json"));
        assert_eq!(s.demo_ticks, 3600);
    }
}
