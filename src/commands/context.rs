//! Brand context collaborator
//!
//! Snapshots the configured brand pages (shop, social) into the current
//! week's directory so idea generation has fresh brand context to draw on.
//! Records `brand_context_collected` when at least one page was captured.

use std::fs;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::Utc;
use colored::Colorize;
use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, warn};

use crate::commands::complete_step;
use crate::fs::{load_config, load_state, DataDir};
use crate::models::PipelineStep;

const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;
const HTTP_REQUEST_TIMEOUT_SECS: u64 = 120;
/// Keep snapshots bounded; pages only need to be skimmed, not archived.
const MAX_EXCERPT_BYTES: usize = 64 * 1024;

#[derive(Debug, Serialize)]
struct PageSnapshot {
    url: String,
    status: u16,
    fetched_at: String,
    excerpt: String,
}

fn create_http_client() -> Result<Client> {
    Client::builder()
        .connect_timeout(Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(HTTP_REQUEST_TIMEOUT_SECS))
        .user_agent("cadence-context")
        .build()
        .context("Failed to create HTTP client")
}

pub fn execute(data: &DataDir) -> Result<()> {
    let state = load_state(data)?;
    let config = load_config(data)?;

    if config.context.pages.is_empty() {
        bail!(
            "No brand pages configured. Set [context] pages in {}",
            data.config_path().display()
        );
    }

    let client = create_http_client()?;
    let mut snapshots = Vec::new();

    for url in &config.context.pages {
        debug!(%url, "fetching brand page");
        match client.get(url).send() {
            Ok(response) => {
                let status = response.status().as_u16();
                let body = response.text().unwrap_or_default();
                let excerpt = truncate_excerpt(&body);
                println!("  {} {url} ({status})", "✓".green());
                snapshots.push(PageSnapshot {
                    url: url.clone(),
                    status,
                    fetched_at: Utc::now().to_rfc3339(),
                    excerpt,
                });
            }
            Err(err) => {
                warn!(%url, %err, "failed to fetch brand page");
                println!("  {} {url}: {err}", "✗".red());
            }
        }
    }

    if snapshots.is_empty() {
        bail!("All brand page fetches failed; context not collected");
    }

    let week_dir = data.week_dir(state.current_week);
    fs::create_dir_all(&week_dir)
        .with_context(|| format!("Failed to create week directory: {}", week_dir.display()))?;

    let json = serde_json::to_string_pretty(&snapshots)
        .context("Failed to serialize context snapshots")?;
    fs::write(week_dir.join("context.json"), json).context("Failed to write context.json")?;

    let mut md = format!(
        "# Brand Context\n\n- Chapter: {}\n- Collected: {}\n\n",
        state.current_chapter,
        Utc::now().to_rfc3339()
    );
    for snapshot in &snapshots {
        md.push_str(&format!("## {}\n\nHTTP {}\n\n", snapshot.url, snapshot.status));
    }
    fs::write(week_dir.join("context.md"), md).context("Failed to write context.md")?;

    println!(
        "{} Captured {} page(s) into {}",
        "✓".green().bold(),
        snapshots.len(),
        week_dir.display()
    );

    complete_step::execute(data, PipelineStep::BrandContextCollected.name())
}

fn truncate_excerpt(body: &str) -> String {
    if body.len() <= MAX_EXCERPT_BYTES {
        return body.to_string();
    }
    let mut end = MAX_EXCERPT_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}\n[truncated]", &body[..end])
}
