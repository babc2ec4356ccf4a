//! Project-level persistent state
//!
//! `ProjectState` is the single source of truth for cycle progress. It is an
//! in-memory record passed through the engine API; `data/state.json` is pure
//! serialization at the edges. The engine is the sole writer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::chapters::{chapter_for_week, TOTAL_WEEKS};

/// Cycle-level status of the project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Week chosen but not yet started
    Pending,
    /// Current week has been initialized
    InProgress,
    /// Full cycle finished (terminal)
    Completed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectStatus::Pending => write!(f, "pending"),
            ProjectStatus::InProgress => write!(f, "in_progress"),
            ProjectStatus::Completed => write!(f, "completed"),
        }
    }
}

impl ProjectStatus {
    /// Check if transitioning from the current status to the new status is valid.
    ///
    /// Valid transitions:
    /// - `Pending` -> `InProgress` (week initialized)
    /// - `Pending` | `InProgress` -> `Pending` (advance to next week)
    /// - `Pending` | `InProgress` -> `Completed` (advance past final week)
    /// - `Completed` is a terminal state
    pub fn can_transition_to(&self, new_status: &ProjectStatus) -> bool {
        if self == new_status {
            return true;
        }

        match self {
            ProjectStatus::Pending => matches!(
                new_status,
                ProjectStatus::InProgress | ProjectStatus::Completed
            ),
            ProjectStatus::InProgress => matches!(
                new_status,
                ProjectStatus::Pending | ProjectStatus::Completed
            ),
            ProjectStatus::Completed => false,
        }
    }
}

/// One entry in the project history: the start/finish bookkeeping for a week.
///
/// Entries are append-only. Once created they are never removed, only mutated
/// to fill in `completed_at` when the week transition runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub week: u32,
    pub chapter: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ideas_count: u32,
    #[serde(default)]
    pub feedback_applied: bool,
}

/// Global progress record, persisted at `data/state.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectState {
    pub total_weeks: u32,
    pub current_week: u32,
    pub current_chapter: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectState {
    /// Fresh state at week 1, first chapter, nothing started.
    pub fn initial() -> Self {
        let now = Utc::now();
        Self {
            total_weeks: TOTAL_WEEKS,
            current_week: 1,
            current_chapter: chapter_for_week(1).unwrap_or_default().to_string(),
            status: ProjectStatus::Pending,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ProjectStatus::Completed
    }

    /// The open history entry for the current week, if one exists.
    pub fn open_history_entry_mut(&mut self) -> Option<&mut HistoryEntry> {
        let week = self.current_week;
        self.history
            .iter_mut()
            .find(|entry| entry.week == week && entry.completed_at.is_none())
    }
}

impl Default for ProjectState {
    fn default() -> Self {
        Self::initial()
    }
}
