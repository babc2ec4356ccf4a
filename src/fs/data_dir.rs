use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Layout of the `data/` directory holding all persisted pipeline state.
///
/// Week directories use two-digit zero-padded numbers (`week-01` ... `week-23`)
/// so lexical sort matches numeric order.
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            root: base_path.as_ref().join("data"),
        }
    }

    /// Create the data directory tree if it does not exist yet.
    pub fn ensure(&self) -> Result<()> {
        fs::create_dir_all(self.weeks_dir()).with_context(|| {
            format!("Failed to create data directory: {}", self.root.display())
        })?;
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join("state.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    pub fn weeks_dir(&self) -> PathBuf {
        self.root.join("weeks")
    }

    pub fn week_dir(&self, week: u32) -> PathBuf {
        self.weeks_dir().join(format!("week-{week:02}"))
    }

    pub fn week_meta_path(&self, week: u32) -> PathBuf {
        self.week_dir(week).join("meta.json")
    }

    pub fn week_exists(&self, week: u32) -> bool {
        self.week_meta_path(week).exists()
    }
}
