//! Persistent high-score storage.
//!
//! One JSON record under the platform config directory. A missing or
//! unreadable record is worth zero, never an error: the high score is the
//! only durable state and losing it is recoverable by playing better.

use chrono::Utc;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
struct HighScoreRecord {
    best: u32,
    /// Unix timestamp of when the score was achieved.
    achieved_at: i64,
}

/// Load/save handle for the single persisted value.
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    /// Store at the platform-appropriate config location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "skydash").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            path: config_dir.join("highscore.json"),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn from_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The persisted best score. Absent or malformed records read as zero.
    pub fn load(&self) -> u32 {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| serde_json::from_str::<HighScoreRecord>(&text).ok())
            .map(|record| record.best)
            .unwrap_or(0)
    }

    /// Overwrite the persisted best score, stamping the current time.
    pub fn save(&self, best: u32) -> io::Result<()> {
        let record = HighScoreRecord {
            best,
            achieved_at: Utc::now().timestamp(),
        };
        let text = serde_json::to_string_pretty(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, text)
    }
}
