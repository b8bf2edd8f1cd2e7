//! Stats persistence
//!
//! JSON file store for `GameStats`. A missing file reads as fresh stats; a
//! failed save is reported to the caller but must never roll back or block
//! an already-committed match outcome.

use super::GameStats;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed stats store
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load persisted stats, or defaults when the file doesn't exist yet
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<GameStats> {
        if !self.path.exists() {
            return Ok(GameStats::default());
        }
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read stats file {}", self.path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("stats file {} is not valid JSON", self.path.display()))
    }

    /// Persist stats as pretty-printed JSON
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, stats: &GameStats) -> Result<()> {
        let json = serde_json::to_string_pretty(stats).context("failed to serialize stats")?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write stats file {}", self.path.display()))
    }
}
