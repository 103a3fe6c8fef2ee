// src/progress.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Fixed name of the progress file written after every batch.
pub static PROGRESS_FILE: &str = "scraping_progress.json";

/// Run-level accounting persisted after each batch and read once at startup
/// to offer a resume. `processed` includes any resume offset, so it is the
/// catalogue index the next run should start from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressState {
    pub processed: usize,
    pub successful: usize,
    pub total: usize,
    pub last_batch: usize,
    pub success_rate: f64,
}

impl ProgressState {
    /// Load a previously persisted progress file; `Ok(None)` when none exists.
    pub fn load(dir: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = dir.as_ref().join(PROGRESS_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading progress file {}", path.display()))?;
        let state = serde_json::from_str(&contents)
            .with_context(|| format!("parsing progress file {}", path.display()))?;
        Ok(Some(state))
    }

    /// Persist, fully overwriting any prior progress file.
    pub fn save(&self, dir: impl AsRef<Path>) -> Result<()> {
        let path = dir.as_ref().join(PROGRESS_FILE);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("writing progress file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        assert_eq!(ProgressState::load(dir.path()).unwrap(), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let state = ProgressState {
            processed: 15,
            successful: 12,
            total: 120,
            last_batch: 3,
            success_rate: 80.0,
        };
        state.save(dir.path()).unwrap();
        assert_eq!(ProgressState::load(dir.path()).unwrap(), Some(state));
    }

    #[test]
    fn save_overwrites_prior_contents() {
        let dir = tempdir().unwrap();
        let first = ProgressState {
            processed: 5,
            successful: 5,
            total: 120,
            last_batch: 1,
            success_rate: 100.0,
        };
        first.save(dir.path()).unwrap();

        let second = ProgressState {
            processed: 10,
            successful: 7,
            total: 120,
            last_batch: 2,
            success_rate: 70.0,
        };
        second.save(dir.path()).unwrap();
        assert_eq!(ProgressState::load(dir.path()).unwrap(), Some(second));
    }
}
