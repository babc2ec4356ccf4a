//! Collaborator configuration
//!
//! Settings for the external data producers (transcript extractor, brand
//! pages, research tool, notebook) live in `data/config.toml`. The core state
//! machine never reads this file; only collaborator commands do.

use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::data_dir::DataDir;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub transcript: TranscriptConfig,
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub research: ResearchConfig,
    #[serde(default)]
    pub notebook: NotebookConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Command invoked to fetch a transcript; receives the video id as `{id}`.
    pub extractor: Option<String>,
    /// Preferred transcript languages, tried in order.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            extractor: None,
            languages: default_languages(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Brand pages (shop, social) snapshotted by the context command.
    #[serde(default)]
    pub pages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Research command; receives the topic as `{query}`.
    pub command: Option<String>,
    /// Standing research topics, queried every week.
    #[serde(default)]
    pub topics: Vec<String>,
    /// Hard ceiling on a single research call.
    #[serde(default = "default_research_timeout")]
    pub timeout_minutes: u64,
}

fn default_research_timeout() -> u64 {
    15
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            command: None,
            topics: Vec::new(),
            timeout_minutes: default_research_timeout(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotebookConfig {
    /// Notebook URL the Q&A agent should query against.
    pub url: Option<String>,
}

/// Load the collaborator config, falling back to defaults when absent.
pub fn load_config(data: &DataDir) -> Result<Config> {
    let path = data.config_path();
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}
