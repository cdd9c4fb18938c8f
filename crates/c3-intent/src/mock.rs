//! Mock model backend for testing without a live LLM.
//!
//! Returns one scripted reply (or error) for every call and records each
//! prompt for assertion in tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::model::{ModelClient, ModelKind};

pub struct MockModel {
    reply: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    /// Always answer with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always fail with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// All prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for MockModel {
    async fn generate(&self, _kind: ModelKind, prompt: &str) -> anyhow::Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!("{message}")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
