//! Ollama model backend for prompt-based extraction.
//!
//! Calls the Ollama HTTP API (`/api/chat`) with a single user message and
//! `format: "json"`, non-streaming. The raw reply text goes back to the
//! orchestrator, which does its own parsing and validation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use c3_intent::{ModelClient, ModelKind};

/// Configuration for an Ollama endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaConfig {
    /// Ollama HTTP API base URL.
    #[serde(default = "default_host")]
    pub host: String,
    /// Model used for `ModelKind::Small` (extraction).
    #[serde(default = "default_small_model")]
    pub small_model: String,
    /// Model used for `ModelKind::Large`.
    #[serde(default = "default_large_model")]
    pub large_model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "http://localhost:11434".into()
}
fn default_small_model() -> String {
    "phi3:mini".into()
}
fn default_large_model() -> String {
    "llama3.1:8b".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            small_model: default_small_model(),
            large_model: default_large_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Ollama chat API request body.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    format: &'a str,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Ollama chat API response (only fields we need).
#[derive(Deserialize)]
struct ChatResponse {
    message: Option<ResponseMessage>,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

pub struct OllamaModel {
    client: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaModel {
    pub fn new(config: OllamaConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    fn model_for(&self, kind: ModelKind) -> &str {
        match kind {
            ModelKind::Small => &self.config.small_model,
            ModelKind::Large => &self.config.large_model,
        }
    }
}

#[async_trait]
impl ModelClient for OllamaModel {
    async fn generate(&self, kind: ModelKind, prompt: &str) -> anyhow::Result<String> {
        let url = format!("{}/api/chat", self.config.host.trim_end_matches('/'));
        let body = ChatRequest {
            model: self.model_for(kind),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            format: "json",
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            anyhow::bail!("ollama returned {}", response.status());
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .message
            .map(|m| m.content)
            .ok_or_else(|| anyhow::anyhow!("ollama response had no message"))?;

        tracing::debug!(model = self.model_for(kind), len = content.len(), "ollama replied");
        Ok(content)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
