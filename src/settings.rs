//! Game settings and preferences
//!
//! Persisted as JSON next to the game. A missing or malformed file falls
//! back to defaults; settings problems never stop the game from starting.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::DEFAULT_HIGHSCORE_FILE;

/// Default location of the settings file
pub const DEFAULT_SETTINGS_FILE: &str = "settings.json";

/// Player preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// Where the high score lives
    pub highscore_path: PathBuf,
    /// Fixed RNG seed for reproducible runs; None seeds from system time
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_FILE),
            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "Settings file {} is malformed ({}), using defaults",
                        path.display(),
                        err
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings to `path`. Failures are logged, never fatal.
    pub fn save(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {}", path.display(), err);
                }
            }
            Err(err) => log::warn!("Failed to serialize settings: {}", err),
        }
    }
}
