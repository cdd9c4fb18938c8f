//! Agent configuration, loadable from TOML. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use c3_client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use c3_intent::orchestrator::DEFAULT_CONTEXT_TURNS;
use c3_intent::{CommandKind, Strategy};

use crate::inference::ModelConfig;

/// Top-level configuration for the agent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentConfig {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Model backend for prompt-based extraction.
    #[serde(default)]
    pub model: ModelConfig,
    /// Extraction chain tuning.
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Explicit runtime settings (`COMPUT3_API_KEY`, ...), consulted before
    /// the environment.
    #[serde(default)]
    pub settings: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL; `COMPUT3_API_URL` overrides it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    #[serde(default = "default_launch_order")]
    pub launch_order: Vec<Strategy>,
    #[serde(default = "default_stop_order")]
    pub stop_order: Vec<Strategy>,
    /// Recent messages rendered into model prompts.
    #[serde(default = "default_context_turns")]
    pub context_turns: usize,
}

fn default_launch_order() -> Vec<Strategy> {
    CommandKind::Launch.default_order().to_vec()
}

fn default_stop_order() -> Vec<Strategy> {
    CommandKind::Stop.default_order().to_vec()
}

fn default_context_turns() -> usize {
    DEFAULT_CONTEXT_TURNS
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            launch_order: default_launch_order(),
            stop_order: default_stop_order(),
            context_turns: default_context_turns(),
        }
    }
}

impl AgentConfig {
    /// Load config from a TOML file path.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}
