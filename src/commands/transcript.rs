//! Transcript fetch collaborator
//!
//! Extracts the video id from a URL, runs the configured extractor tool with
//! a bounded timeout, and saves the transcript into the current week's
//! directory. On success it records the `transcript_extracted` step; it never
//! touches core state beyond that bookkeeping call.

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use regex::Regex;
use tracing::debug;

use crate::commands::complete_step;
use crate::fs::{load_config, load_state, DataDir};
use crate::models::PipelineStep;
use crate::process::{run_with_timeout, ToolOutcome};

const EXTRACTOR_TIMEOUT: Duration = Duration::from_secs(5 * 60);

/// Extract a video id from the common URL shapes, or accept a bare id.
pub fn extract_video_id(url: &str) -> Option<String> {
    let patterns = [
        r"(?:youtube\.com/watch\?.*v=)([a-zA-Z0-9_-]{11})",
        r"(?:youtu\.be/)([a-zA-Z0-9_-]{11})",
        r"(?:youtube\.com/embed/)([a-zA-Z0-9_-]{11})",
        r"(?:youtube\.com/v/)([a-zA-Z0-9_-]{11})",
    ];

    for pattern in patterns {
        let re = Regex::new(pattern).ok()?;
        if let Some(captures) = re.captures(url) {
            return Some(captures[1].to_string());
        }
    }

    // Bare 11-character id
    let bare = Regex::new(r"^[a-zA-Z0-9_-]{11}$").ok()?;
    if bare.is_match(url) {
        return Some(url.to_string());
    }

    None
}

pub fn execute(data: &DataDir, url: &str, lang: Option<String>) -> Result<()> {
    let state = load_state(data)?;
    let config = load_config(data)?;

    let video_id = extract_video_id(url)
        .with_context(|| format!("Could not extract a video id from '{url}'"))?;

    let Some(template) = config.transcript.extractor else {
        bail!(
            "No transcript extractor configured. Set [transcript] extractor in {}",
            data.config_path().display()
        );
    };

    let tool = template.split_whitespace().next().unwrap_or(&template);
    which::which(tool).with_context(|| format!("Transcript extractor '{tool}' not found"))?;

    let language = lang.unwrap_or_else(|| {
        config
            .transcript
            .languages
            .first()
            .cloned()
            .unwrap_or_else(|| "en".to_string())
    });
    let command = template
        .replace("{id}", &video_id)
        .replace("{lang}", &language);

    debug!(%video_id, %command, "running transcript extractor");
    println!("{} Fetching transcript for {video_id}...", "…".dimmed());

    let stdout = match run_with_timeout(&command, EXTRACTOR_TIMEOUT)? {
        ToolOutcome::Completed {
            success: true,
            stdout,
            ..
        } => stdout,
        ToolOutcome::Completed { stderr, .. } => {
            bail!("Transcript extractor failed: {}", stderr.trim())
        }
        ToolOutcome::TimedOut => bail!(
            "Transcript extractor exceeded the {}s timeout",
            EXTRACTOR_TIMEOUT.as_secs()
        ),
    };

    let week_dir = data.week_dir(state.current_week);
    fs::create_dir_all(&week_dir)
        .with_context(|| format!("Failed to create week directory: {}", week_dir.display()))?;

    fs::write(week_dir.join("transcript.json"), &stdout)
        .context("Failed to write transcript.json")?;
    fs::write(
        week_dir.join("transcript.md"),
        render_markdown(&state.current_chapter, &video_id, &language, &stdout),
    )
    .context("Failed to write transcript.md")?;

    println!(
        "{} Transcript saved to {}",
        "✓".green().bold(),
        week_dir.display()
    );

    complete_step::execute(data, PipelineStep::TranscriptExtracted.name())
}

fn render_markdown(chapter: &str, video_id: &str, language: &str, raw: &str) -> String {
    // The extractor may emit JSON with a full_text field; fall back to raw text.
    let text = serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|v| v.get("full_text").and_then(|t| t.as_str()).map(String::from))
        .unwrap_or_else(|| raw.to_string());

    format!(
        "# Transcript\n\n- Chapter: {chapter}\n- Video: {video_id}\n- Language: {language}\n- Fetched: {}\n\n{text}\n",
        Utc::now().to_rfc3339()
    )
}
