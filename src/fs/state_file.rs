//! State file I/O
//!
//! `load_state` always re-reads the full record from disk so each invocation
//! sees the latest committed state. `save_state` is the only sanctioned way to
//! persist: it stamps `updated_at` and writes via temp-file-then-rename under
//! an exclusive lock, so a reader never observes a partially written file.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::Utc;
use tempfile::NamedTempFile;
use tracing::debug;

use super::data_dir::DataDir;
use super::locking;
use crate::error::StateError;
use crate::models::ProjectState;

/// Load the project state, synthesizing and persisting the default record if
/// the backing file is absent.
pub fn load_state(data: &DataDir) -> Result<ProjectState> {
    let path = data.state_path();
    if !path.exists() {
        debug!(path = %path.display(), "state file absent, creating initial state");
        let mut state = ProjectState::initial();
        save_state(data, &mut state)?;
        return Ok(state);
    }

    let _guard = locking::shared(data.root())?;
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read state file: {}", path.display()))?;

    let state: ProjectState =
        serde_json::from_str(&content).map_err(|source| StateError::MalformedStateFile {
            path: path.clone(),
            source,
        })?;

    // Weeks are 1-based; a week outside the catalog is as unusable as
    // unparseable JSON and gets the same treatment.
    if state.current_week == 0 || state.current_week > state.total_weeks {
        return Err(StateError::MalformedStateFile {
            path,
            source: serde::de::Error::custom(format!(
                "current_week {} outside 1..={}",
                state.current_week, state.total_weeks
            )),
        }
        .into());
    }

    Ok(state)
}

/// Persist the project state atomically, refreshing `updated_at`.
pub fn save_state(data: &DataDir, state: &mut ProjectState) -> Result<()> {
    state.updated_at = Utc::now();

    data.ensure()?;
    let _guard = locking::exclusive(data.root())?;

    let json =
        serde_json::to_string_pretty(state).context("Failed to serialize project state")?;
    write_atomic(data.root(), &data.state_path(), &json)
}

/// Write content to a temp file in `dir` and rename it over `target`.
pub(crate) fn write_atomic(
    dir: &std::path::Path,
    target: &std::path::Path,
    content: &str,
) -> Result<()> {
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;
    temp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write temp file for {}", target.display()))?;
    temp.flush()?;
    temp.persist(target)
        .with_context(|| format!("Failed to replace {}", target.display()))?;
    Ok(())
}
