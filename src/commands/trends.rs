//! Trend research collaborator
//!
//! Runs the configured research tool once per topic with a hard ceiling
//! (15 minutes by default). A missing tool or a timeout degrades to a
//! search-fallback request file that a supervising agent can pick up, so
//! the pipeline keeps moving. Records `trends_researched` only when at
//! least one topic produced a real result.

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::complete_step;
use crate::fs::{load_config, load_state, DataDir};
use crate::models::PipelineStep;
use crate::process::{run_with_timeout, ToolOutcome};

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum TopicResult {
    Success { topic: String, result: String },
    Fallback { topic: String, instruction: String },
}

pub fn execute(data: &DataDir, topics: Vec<String>) -> Result<()> {
    let state = load_state(data)?;
    let config = load_config(data)?;

    let topics = if topics.is_empty() {
        config.research.topics.clone()
    } else {
        topics
    };
    if topics.is_empty() {
        bail!(
            "No research topics given. Pass --topic or set [research] topics in {}",
            data.config_path().display()
        );
    }

    let timeout = Duration::from_secs(config.research.timeout_minutes * 60);
    let tool_available = config
        .research
        .command
        .as_deref()
        .and_then(|cmd| cmd.split_whitespace().next())
        .map(|tool| which::which(tool).is_ok())
        .unwrap_or(false);

    let mut results = Vec::new();
    for topic in &topics {
        let result = if tool_available {
            research_topic(config.research.command.as_deref().unwrap_or(""), topic, timeout)
        } else {
            debug!(%topic, "research tool unavailable, emitting fallback");
            fallback(topic)
        };
        match &result {
            TopicResult::Success { topic, .. } => {
                println!("  {} {topic}", "✓".green());
            }
            TopicResult::Fallback { topic, .. } => {
                println!("  {} {topic} (fallback)", "→".yellow());
            }
        }
        results.push(result);
    }

    let week_dir = data.week_dir(state.current_week);
    fs::create_dir_all(&week_dir)
        .with_context(|| format!("Failed to create week directory: {}", week_dir.display()))?;

    let json = serde_json::to_string_pretty(&results)
        .context("Failed to serialize research results")?;
    fs::write(week_dir.join("trends.json"), json).context("Failed to write trends.json")?;
    fs::write(
        week_dir.join("trends.md"),
        render_markdown(&state.current_chapter, &results),
    )
    .context("Failed to write trends.md")?;

    let successes = results
        .iter()
        .filter(|r| matches!(r, TopicResult::Success { .. }))
        .count();

    if successes > 0 {
        println!(
            "{} {successes}/{} topic(s) researched into {}",
            "✓".green().bold(),
            results.len(),
            week_dir.display()
        );
        complete_step::execute(data, PipelineStep::TrendsResearched.name())
    } else {
        println!(
            "{} No topics succeeded; fallback requests written to {}. Step left open.",
            "⚠".yellow().bold(),
            week_dir.display()
        );
        Ok(())
    }
}

fn research_topic(template: &str, topic: &str, timeout: Duration) -> TopicResult {
    let command = template.replace("{query}", topic);
    debug!(%command, "running research tool");

    match run_with_timeout(&command, timeout) {
        Ok(ToolOutcome::Completed {
            success: true,
            stdout,
            ..
        }) => TopicResult::Success {
            topic: topic.to_string(),
            result: stdout,
        },
        Ok(ToolOutcome::Completed { stderr, .. }) => {
            warn!(%topic, error = %stderr.trim(), "research tool failed");
            fallback(topic)
        }
        Ok(ToolOutcome::TimedOut) => {
            warn!(%topic, "research call hit the timeout ceiling");
            fallback(topic)
        }
        Err(err) => {
            warn!(%topic, %err, "research tool could not be spawned");
            fallback(topic)
        }
    }
}

fn fallback(topic: &str) -> TopicResult {
    TopicResult::Fallback {
        topic: topic.to_string(),
        instruction: format!(
            "Research tool unavailable. Run a web search for '{topic}' and summarize the findings into trends.md."
        ),
    }
}

fn render_markdown(chapter: &str, results: &[TopicResult]) -> String {
    let mut md = format!(
        "# Trend Research\n\n- Chapter: {chapter}\n- Generated: {}\n\n",
        Utc::now().to_rfc3339()
    );
    for result in results {
        match result {
            TopicResult::Success { topic, result } => {
                md.push_str(&format!("## {topic}\n\n{result}\n\n"));
            }
            TopicResult::Fallback { topic, instruction } => {
                md.push_str(&format!("## {topic}\n\n> Pending: {instruction}\n\n"));
            }
        }
    }
    md
}
