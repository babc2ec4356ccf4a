//! Advisory locking for the shared state files
//!
//! Locks are taken on a sidecar lock file rather than the state file itself
//! because atomic writes replace the state file's inode on every save.
//! Advisory locks are cooperative - all participants must acquire them for the
//! locking to be effective.

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result};
use fs2::FileExt;

const LOCK_FILE: &str = ".state.lock";

fn open_lock_file(data_root: &Path) -> Result<File> {
    let path = data_root.join(LOCK_FILE);
    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&path)
        .with_context(|| format!("Failed to open lock file: {}", path.display()))
}

/// Acquire a shared (read) lock on the data directory.
///
/// Multiple concurrent readers are allowed; blocks while a writer holds the
/// exclusive lock. The lock is released when the returned handle is dropped.
pub fn shared(data_root: &Path) -> Result<File> {
    let file = open_lock_file(data_root)?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock in {}", data_root.display()))?;
    Ok(file)
}

/// Acquire an exclusive (write) lock on the data directory.
pub fn exclusive(data_root: &Path) -> Result<File> {
    let file = open_lock_file(data_root)?;
    file.lock_exclusive().with_context(|| {
        format!("Failed to acquire exclusive lock in {}", data_root.display())
    })?;
    Ok(file)
}
