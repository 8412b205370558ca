//! High score persistence
//!
//! One non-negative integer in a plain text file. Loaded once at startup,
//! written only when a finished run beats it. Never fatal: a missing or
//! unreadable file means "no high score yet", and a failed write is logged
//! and ignored so the game-over transition always completes.

use std::fs;
use std::path::PathBuf;

/// Default location of the high score file
pub const DEFAULT_HIGHSCORE_FILE: &str = "highscore.txt";

/// The single persisted best score
#[derive(Debug, Clone)]
pub struct HighScore {
    best: u64,
    path: PathBuf,
}

impl HighScore {
    /// Load the best score from `path`. Missing or corrupt files are
    /// treated as "no high score yet".
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match fs::read_to_string(&path) {
            Ok(text) => match text.trim().parse::<u64>() {
                Ok(value) => {
                    log::info!("Loaded high score {} from {}", value, path.display());
                    value
                }
                Err(_) => {
                    log::warn!(
                        "High score file {} is corrupt, starting from 0",
                        path.display()
                    );
                    0
                }
            },
            Err(_) => {
                log::info!("No high score file at {}, starting from 0", path.display());
                0
            }
        };
        Self { best, path }
    }

    /// Best score ever achieved
    pub fn best(&self) -> u64 {
        self.best
    }

    /// True when `score` would set a new record
    pub fn beats(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run. Persists and returns true only when `score`
    /// beats the stored best; otherwise the file is left untouched.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.beats(score) {
            return false;
        }
        self.best = score;
        if let Err(err) = fs::write(&self.path, format!("{score}\n")) {
            log::warn!(
                "Failed to write high score to {}: {}",
                self.path.display(),
                err
            );
        } else {
            log::info!("New high score {} saved to {}", score, self.path.display());
        }
        true
    }
}
