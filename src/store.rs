use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const DEFAULT_HIGH_SCORE_FILE: &str = "high_score.json";

// On-disk shape: {"high_score": <n>}
#[derive(Serialize, Deserialize, Default)]
struct HighScoreFile {
    #[serde(default)]
    high_score: u32,
}

/// Best-effort persistence of the single high-score value.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(DEFAULT_HIGH_SCORE_FILE)
    }
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored high score, or 0 when the file is missing, unreadable or malformed.
    pub fn load(&self) -> u32 {
        match self.try_load() {
            Ok(score) => score,
            Err(err) => {
                warn!("ignoring high score file {}: {err}", self.path.display());
                0
            }
        }
    }

    /// Overwrites the file with `score`. Failures are logged and dropped.
    pub fn save(&self, score: u32) {
        if let Err(err) = self.try_save(score) {
            warn!("could not save high score to {}: {err}", self.path.display());
        }
    }

    pub fn try_load(&self) -> Result<u32, StoreError> {
        if !self.path.exists() {
            debug!("no high score file at {}", self.path.display());
            return Ok(0);
        }
        let text = fs::read_to_string(&self.path)?;
        let data: HighScoreFile = serde_json::from_str(&text)?;
        Ok(data.high_score)
    }

    pub fn try_save(&self, score: u32) -> Result<(), StoreError> {
        let text = serde_json::to_string(&HighScoreFile { high_score: score })?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
