//! AWS Bedrock model backend: Converse API.
//!
//! Uses the model-agnostic Converse API (works with Nova Lite, Claude, etc.).
//! Each call is bounded by the configured timeout.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, ConverseOutput, Message};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::timeout;

use c3_intent::{ModelClient, ModelKind};

/// Configuration for the Bedrock backend.
#[derive(Debug, Clone, Deserialize)]
pub struct BedrockConfig {
    /// Model for `ModelKind::Small` (e.g., "us.amazon.nova-lite-v1:0").
    #[serde(default = "default_model_id")]
    pub model_id: String,
    /// Model for `ModelKind::Large`; falls back to `model_id`.
    #[serde(default)]
    pub large_model_id: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model_id() -> String {
    "us.amazon.nova-lite-v1:0".into()
}
fn default_timeout_secs() -> u64 {
    10
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            large_model_id: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BedrockConfig {
    /// Apply `BEDROCK_MODEL_ID` / `BEDROCK_TIMEOUT_SECS` overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(model_id) = std::env::var("BEDROCK_MODEL_ID") {
            self.model_id = model_id;
        }
        if let Some(secs) = std::env::var("BEDROCK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = secs;
        }
        self
    }

    fn model_for(&self, kind: ModelKind) -> &str {
        match kind {
            ModelKind::Small => &self.model_id,
            ModelKind::Large => self.large_model_id.as_deref().unwrap_or(&self.model_id),
        }
    }
}

pub struct BedrockModel {
    client: BedrockClient,
    config: BedrockConfig,
}

impl BedrockModel {
    /// Create a backend with a pre-built Bedrock client.
    pub fn new(client: BedrockClient, config: BedrockConfig) -> Self {
        Self { client, config }
    }

    /// Build a client from the default AWS credential/region chain.
    pub async fn from_default_chain(config: BedrockConfig) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(BedrockClient::new(&sdk_config), config)
    }

    async fn converse(&self, kind: ModelKind, prompt: &str) -> anyhow::Result<String> {
        let user_message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build message: {e}"))?;

        let response = self
            .client
            .converse()
            .model_id(self.config.model_for(kind))
            .messages(user_message)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("bedrock converse error: {e}"))?;

        let output = response
            .output()
            .ok_or_else(|| anyhow::anyhow!("no output in bedrock response"))?;

        let text = match output {
            ConverseOutput::Message(msg) => msg.content().iter().find_map(|block| {
                if let ContentBlock::Text(t) = block {
                    Some(t.clone())
                } else {
                    None
                }
            }),
            _ => None,
        };

        text.ok_or_else(|| anyhow::anyhow!("bedrock response had no text block"))
    }
}

#[async_trait]
impl ModelClient for BedrockModel {
    async fn generate(&self, kind: ModelKind, prompt: &str) -> anyhow::Result<String> {
        let limit = Duration::from_secs(self.config.timeout_secs);
        match timeout(limit, self.converse(kind, prompt)).await {
            Ok(result) => result,
            Err(_) => anyhow::bail!("bedrock timed out after {}s", limit.as_secs()),
        }
    }

    fn name(&self) -> &str {
        "bedrock"
    }
}
