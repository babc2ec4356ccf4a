//! Week record I/O operations
//!
//! Handles reading and writing week metadata at `data/weeks/week-NN/meta.json`.

use std::fs;

use anyhow::{Context, Result};

use super::data_dir::DataDir;
use super::state_file::write_atomic;
use crate::models::WeekRecord;

/// Read the week record for a week, or None if it was never initialized.
pub fn read_week_record(data: &DataDir, week: u32) -> Result<Option<WeekRecord>> {
    let path = data.week_meta_path(week);
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read week record: {}", path.display()))?;

    let record: WeekRecord = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse week record: {}", path.display()))?;

    Ok(Some(record))
}

/// Persist a week record atomically, creating the week directory if needed.
pub fn write_week_record(data: &DataDir, record: &WeekRecord) -> Result<()> {
    let dir = data.week_dir(record.week);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create week directory: {}", dir.display()))?;

    let json = serde_json::to_string_pretty(record).context("Failed to serialize week record")?;
    write_atomic(&dir, &data.week_meta_path(record.week), &json)
}
