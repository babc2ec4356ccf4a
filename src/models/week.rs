//! Per-week record
//!
//! One `WeekRecord` exists per week directory, persisted at
//! `data/weeks/week-NN/meta.json`. The week/chapter pair is a denormalized
//! copy of the project state at creation time and is fixed for the week's life.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::step::PipelineStep;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekRecord {
    pub week: u32,
    pub chapter: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_steps: Vec<PipelineStep>,
    #[serde(default)]
    pub ideas_count: u32,
}

impl WeekRecord {
    pub fn new(week: u32, chapter: String) -> Self {
        Self {
            week,
            chapter,
            started_at: Utc::now(),
            completed_at: None,
            completed_steps: Vec::new(),
            ideas_count: 0,
        }
    }

    pub fn is_step_complete(&self, step: PipelineStep) -> bool {
        self.completed_steps.contains(&step)
    }

    /// Record a step completion. Returns false if the step was already
    /// complete (idempotent no-op, the record is left untouched).
    pub fn record_step(&mut self, step: PipelineStep) -> bool {
        if self.is_step_complete(step) {
            return false;
        }
        self.completed_steps.push(step);
        true
    }

    /// Steps not yet completed, in canonical order.
    pub fn remaining_steps(&self) -> Vec<PipelineStep> {
        PipelineStep::ALL
            .iter()
            .copied()
            .filter(|step| !self.is_step_complete(*step))
            .collect()
    }

    /// Fraction of the pipeline completed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        self.completed_steps.len() as f64 / PipelineStep::ALL.len() as f64
    }
}
