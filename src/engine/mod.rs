//! Week transition engine
//!
//! The sole writer of `ProjectState` and `WeekRecord`. Collaborator commands
//! call into these operations to initialize a week, record step completions,
//! and advance the cycle; they never touch the backing files directly.
//!
//! Idempotence is a hard contract here: re-initializing a week, re-completing
//! a step, and advancing past completion are reported no-ops, never errors and
//! never duplicate bookkeeping.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, warn};

use crate::error::StateError;
use crate::fs::{read_week_record, save_state, write_week_record, DataDir};
use crate::models::{
    chapter_for_week, HistoryEntry, PipelineStep, ProjectState, ProjectStatus, WeekRecord,
};

/// Result of initializing the current week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Created { week: u32, chapter: String },
    /// The week directory already exists; nothing was changed.
    AlreadyInitialized { week: u32 },
    /// The cycle is complete; no new week can be started.
    CycleCompleted,
}

/// Result of recording a step completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Recorded {
        step: PipelineStep,
        completed: usize,
        total: usize,
        /// Steps still open, in canonical order.
        remaining: Vec<PipelineStep>,
    },
    /// The step was already recorded; nothing was changed.
    AlreadyComplete { step: PipelineStep },
}

/// Result of advancing the cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced {
        week: u32,
        chapter: String,
        /// Steps that were still open when the transition was forced.
        incomplete: Vec<PipelineStep>,
    },
    /// The final week was closed; the cycle is complete. `current_week` and
    /// `current_chapter` stay pointed at the final week.
    CycleCompleted { incomplete: Vec<PipelineStep> },
    /// The cycle was already complete; nothing was changed.
    AlreadyCompleted,
}

/// Initialize the current week's directory and record.
///
/// Idempotent: a second call for the same week returns `AlreadyInitialized`
/// without touching the record or appending a second history entry. After the
/// cycle completes this is a `CycleCompleted` no-op; the terminal status is
/// never left.
pub fn init_week(data: &DataDir, state: &mut ProjectState) -> Result<InitOutcome> {
    if state.is_completed() {
        debug!("cycle already completed, nothing to initialize");
        return Ok(InitOutcome::CycleCompleted);
    }

    let week = state.current_week;

    if data.week_exists(week) {
        debug!(week, "week already initialized");
        return Ok(InitOutcome::AlreadyInitialized { week });
    }

    let chapter = state.current_chapter.clone();
    let record = WeekRecord::new(week, chapter.clone());
    write_week_record(data, &record)?;

    state.history.push(HistoryEntry {
        week,
        chapter: chapter.clone(),
        started_at: record.started_at,
        completed_at: None,
        ideas_count: 0,
        feedback_applied: false,
    });

    debug_assert!(state.status.can_transition_to(&ProjectStatus::InProgress));
    state.status = ProjectStatus::InProgress;
    save_state(data, state)?;

    Ok(InitOutcome::Created { week, chapter })
}

/// Record a pipeline step as complete for the current week.
///
/// Fails with `UnknownStep` for names outside the step set and with
/// `WeekNotInitialized` when no week record exists; neither failure mutates
/// anything. A repeated completion is an `AlreadyComplete` no-op.
pub fn complete_step(
    data: &DataDir,
    state: &mut ProjectState,
    step_name: &str,
) -> Result<StepOutcome> {
    let step: PipelineStep = step_name.parse::<PipelineStep>()?;
    let week = state.current_week;

    let mut record = read_week_record(data, week)?
        .ok_or(StateError::WeekNotInitialized { week })?;

    if !record.record_step(step) {
        debug!(week, %step, "step already complete");
        return Ok(StepOutcome::AlreadyComplete { step });
    }

    write_week_record(data, &record)?;
    save_state(data, state)?;

    Ok(StepOutcome::Recorded {
        step,
        completed: record.completed_steps.len(),
        total: PipelineStep::ALL.len(),
        remaining: record.remaining_steps(),
    })
}

/// Close the current week and advance the cycle.
///
/// Advancement is always allowed: open steps only produce a warning carried in
/// the outcome (a soft gate). At the final week the cycle moves to the
/// terminal `Completed` status; further calls are no-ops.
pub fn advance(data: &DataDir, state: &mut ProjectState) -> Result<AdvanceOutcome> {
    if state.is_completed() {
        return Ok(AdvanceOutcome::AlreadyCompleted);
    }

    let week = state.current_week;
    let mut incomplete = Vec::new();

    // Finalize the week record, if the week was ever initialized.
    if let Some(mut record) = read_week_record(data, week)? {
        incomplete = record.remaining_steps();
        if !incomplete.is_empty() {
            warn!(week, ?incomplete, "advancing with incomplete steps");
        }
        record.completed_at = Some(Utc::now());
        write_week_record(data, &record)?;
    }

    // Close the matching open history entry. If the week was never
    // initialized there is none, and no entry is fabricated here.
    if let Some(entry) = state.open_history_entry_mut() {
        entry.completed_at = Some(Utc::now());
    }

    if week >= state.total_weeks {
        debug_assert!(state.status.can_transition_to(&ProjectStatus::Completed));
        state.status = ProjectStatus::Completed;
        save_state(data, state)?;
        return Ok(AdvanceOutcome::CycleCompleted { incomplete });
    }

    let next_week = week + 1;
    let chapter = chapter_for_week(next_week)
        .unwrap_or_default()
        .to_string();

    state.current_week = next_week;
    state.current_chapter = chapter.clone();
    debug_assert!(state.status.can_transition_to(&ProjectStatus::Pending));
    state.status = ProjectStatus::Pending;
    save_state(data, state)?;

    Ok(AdvanceOutcome::Advanced {
        week: next_week,
        chapter,
        incomplete,
    })
}
