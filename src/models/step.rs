//! Pipeline step definitions
//!
//! A week's work is a fixed set of six steps. The order here is the canonical
//! display/reporting order; steps may be completed in any order.

use serde::{Deserialize, Serialize};

use crate::error::StateError;

/// One named stage of a week's pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStep {
    /// Source transcript extracted from the week's video
    TranscriptExtracted,
    /// Chapter analyzed via the notebook Q&A agent
    ChapterAnalyzed,
    /// Brand shop/social context collected
    BrandContextCollected,
    /// Market trend research completed
    TrendsResearched,
    /// Marketing ideas generated
    IdeasGenerated,
    /// Previous week's feedback applied
    FeedbackApplied,
}

impl PipelineStep {
    /// All steps in canonical order.
    pub const ALL: [PipelineStep; 6] = [
        PipelineStep::TranscriptExtracted,
        PipelineStep::ChapterAnalyzed,
        PipelineStep::BrandContextCollected,
        PipelineStep::TrendsResearched,
        PipelineStep::IdeasGenerated,
        PipelineStep::FeedbackApplied,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PipelineStep::TranscriptExtracted => "transcript_extracted",
            PipelineStep::ChapterAnalyzed => "chapter_analyzed",
            PipelineStep::BrandContextCollected => "brand_context_collected",
            PipelineStep::TrendsResearched => "trends_researched",
            PipelineStep::IdeasGenerated => "ideas_generated",
            PipelineStep::FeedbackApplied => "feedback_applied",
        }
    }

    /// Comma-separated list of all valid step names, for error messages.
    pub fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PipelineStep {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|step| step.name() == normalized)
            .ok_or_else(|| StateError::UnknownStep {
                name: s.to_string(),
                valid: Self::valid_names(),
            })
    }
}
