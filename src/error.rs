//! Error taxonomy for the pipeline state machine
//!
//! Recoverable conditions (`UnknownStep`, `WeekNotInitialized`) never mutate
//! state. Idempotent no-ops (re-initializing a week, re-completing a step,
//! advancing past completion) are outcomes, not errors, and live on the
//! engine's outcome enums instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    /// The state file exists but cannot be parsed. Fatal; no auto-repair.
    #[error("malformed state file {path}: {source}")]
    MalformedStateFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A step name outside the pipeline step set was supplied.
    #[error("unknown pipeline step '{name}'. Valid steps: {valid}")]
    UnknownStep { name: String, valid: String },

    /// A step completion was requested before the week was initialized.
    #[error("week {week} is not initialized. Run 'cadence init-week' first")]
    WeekNotInitialized { week: u32 },
}
