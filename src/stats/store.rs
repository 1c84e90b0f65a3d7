//! Statistics persistence
//!
//! One aggregate record, loaded at startup and overwritten after every
//! game-ending event.

use super::AggregateStatistics;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the default store inside the home directory
pub const DEFAULT_FILE_NAME: &str = "mastermind.json";

/// Durable home of the aggregate statistics record
pub trait StatsStore {
    /// Load the saved record
    ///
    /// Never fails: a missing or unreadable record yields a zero aggregate.
    fn load(&self) -> AggregateStatistics;

    /// Overwrite the saved record with `stats`
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&self, stats: &AggregateStatistics) -> Result<()>;
}

/// Statistics stored as pretty-printed JSON in a single file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store located at `$HOME/mastermind.json`
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    pub fn in_home_dir() -> Result<Self> {
        let home = dirs::home_dir().context("Unable to access file system: no home directory")?;
        Ok(Self::new(home.join(DEFAULT_FILE_NAME)))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    fn load(&self) -> AggregateStatistics {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::debug!("no saved statistics at {}: {e}", self.path.display());
                return AggregateStatistics::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(stats) => {
                log::debug!("loaded statistics from {}", self.path.display());
                stats
            }
            Err(e) => {
                log::warn!(
                    "ignoring corrupt statistics in {}: {e}",
                    self.path.display()
                );
                AggregateStatistics::default()
            }
        }
    }

    fn save(&self, stats: &AggregateStatistics) -> Result<()> {
        let contents = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("saved statistics to {}", self.path.display());
        Ok(())
    }
}
