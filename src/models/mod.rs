//! Core data model for the weekly pipeline
//!
//! This module provides:
//! - The project-wide persistent state and its status machine
//! - The per-week record tracking step completion
//! - The fixed chapter catalog and pipeline step set

pub mod chapters;
pub mod state;
pub mod step;
pub mod week;

pub use chapters::{chapter_for_week, CHAPTERS, TOTAL_WEEKS};
pub use state::{HistoryEntry, ProjectState, ProjectStatus};
pub use step::PipelineStep;
pub use week::WeekRecord;
