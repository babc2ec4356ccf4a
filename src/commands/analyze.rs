//! Chapter Q&A collaborator
//!
//! Two-phase flow mirroring how the notebook agent operates:
//! 1. `analyze` writes the question set and request payload into the week
//!    directory for the agent to execute against the configured notebook.
//! 2. `analyze --record` marks `chapter_analyzed` once the agent has saved
//!    its answers to `analysis.md`.

use std::fs;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::commands::complete_step;
use crate::fs::{load_config, load_state, DataDir};
use crate::models::PipelineStep;

#[derive(Debug, Serialize)]
struct AnalysisRequest {
    chapter: String,
    week: u32,
    notebook_url: Option<String>,
    questions: Vec<String>,
    created_at: String,
}

/// Default question frame applied to every chapter for consistent analysis.
pub fn chapter_questions(chapter: &str, custom: &[String]) -> Vec<String> {
    let mut questions = vec![
        format!("Summarize the three core marketing principles of {chapter}, each with a concrete example."),
        format!("How would the principles of {chapter} translate into specific marketing actions for a direct-to-consumer food brand? Suggest at least three."),
        format!("What marketing mistakes does {chapter} warn against, and how can a small brand avoid them?"),
        format!("Applying the smallest-viable-market lens of this book, who is the target audience {chapter} points at?"),
    ];
    questions.extend(custom.iter().cloned());
    questions
}

pub fn execute(data: &DataDir, custom_questions: Vec<String>, record: bool) -> Result<()> {
    let state = load_state(data)?;
    let week_dir = data.week_dir(state.current_week);

    if record {
        let answers = week_dir.join("analysis.md");
        if !answers.exists() {
            bail!(
                "No answers found at {}. Save the agent's answers there first, then re-run with --record",
                answers.display()
            );
        }
        return complete_step::execute(data, PipelineStep::ChapterAnalyzed.name());
    }

    let config = load_config(data)?;
    let request = AnalysisRequest {
        chapter: state.current_chapter.clone(),
        week: state.current_week,
        notebook_url: config.notebook.url.clone(),
        questions: chapter_questions(&state.current_chapter, &custom_questions),
        created_at: Utc::now().to_rfc3339(),
    };

    fs::create_dir_all(&week_dir)
        .with_context(|| format!("Failed to create week directory: {}", week_dir.display()))?;
    let json = serde_json::to_string_pretty(&request)
        .context("Failed to serialize analysis request")?;
    let path = week_dir.join("analysis-request.json");
    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{} Wrote {} question(s) to {}",
        "✓".green().bold(),
        request.questions.len(),
        path.display()
    );
    println!(
        "  Run the notebook agent against it, save answers to {}, then 'cadence analyze --record'.",
        week_dir.join("analysis.md").display()
    );

    Ok(())
}
