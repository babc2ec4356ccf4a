//! Shared test helpers for pipeline integration tests

use tempfile::TempDir;

use cadence::fs::{load_state, DataDir};
use cadence::models::ProjectState;

/// Test helper: fresh project rooted in a temp directory.
///
/// The TempDir must be kept in scope for the lifetime of the test.
pub fn fresh_project() -> (TempDir, DataDir, ProjectState) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let data = DataDir::new(temp.path());
    let state = load_state(&data).expect("Failed to load initial state");
    (temp, data, state)
}
