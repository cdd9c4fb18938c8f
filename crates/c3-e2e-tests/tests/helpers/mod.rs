//! Shared test harness for E2E turn tests.
//!
//! Stands up a mock Comput3 API (and optionally a mock Ollama) and builds the
//! agent through `Agent::from_config`, so every test runs the same wiring as
//! the binary: settings → client → model backend → router → orchestrator.

#![allow(dead_code)]

use std::collections::BTreeMap;

use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

use c3_agent::inference::ModelProvider;
use c3_agent::settings::{self, LayeredSettings};
use c3_agent::{Agent, AgentConfig};
use c3_intent::ChatTurn;
use c3_protocol::ActionResponse;

pub const API_KEY: &str = "c3-test-key";
pub const WALLET: &str = "0x00000000000000000000000000000000000000aa";

/// Mock Comput3 API plus agent builders pointed at it.
pub struct TestHarness {
    pub api: MockServer,
}

impl TestHarness {
    pub async fn start() -> Self {
        Self {
            api: MockServer::start().await,
        }
    }

    fn settings(&self, with_key: bool) -> LayeredSettings {
        let mut values = BTreeMap::from([
            (settings::API_URL.to_string(), self.api.uri()),
            (settings::WALLET_ADDRESS.to_string(), WALLET.to_string()),
        ]);
        if with_key {
            values.insert(settings::API_KEY.to_string(), API_KEY.to_string());
        }
        LayeredSettings::isolated(values)
    }

    async fn build(&self, config: AgentConfig, with_key: bool) -> Agent {
        Agent::from_config(&config, &self.settings(with_key))
            .await
            .unwrap()
    }

    /// Agent with an API key and no model backend (pattern extraction only).
    pub async fn agent(&self) -> Agent {
        let mut config = AgentConfig::default();
        config.model.provider = ModelProvider::Disabled;
        self.build(config, true).await
    }

    /// Agent with an API key and an Ollama backend at `ollama`.
    pub async fn agent_with_ollama(&self, ollama: &MockServer) -> Agent {
        let mut config = AgentConfig::default();
        config.model.provider = ModelProvider::Ollama;
        config.model.ollama.host = ollama.uri();
        self.build(config, true).await
    }

    /// Agent whose settings carry no API key.
    pub async fn agent_without_key(&self) -> Agent {
        let mut config = AgentConfig::default();
        config.model.provider = ModelProvider::Disabled;
        self.build(config, false).await
    }

    /// JSON bodies of every request the mock API received on `path`.
    pub async fn bodies_for(&self, path: &str) -> Vec<Value> {
        self.api
            .received_requests()
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.url.path() == path)
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }

    pub async fn request_count(&self) -> usize {
        self.api.received_requests().await.unwrap().len()
    }
}

/// Run one free-text turn and return the single reply.
pub async fn say(agent: &Agent, text: &str, recent: &[ChatTurn]) -> ActionResponse {
    send(agent, json!({ "text": text }), recent).await
}

/// Run one turn with an arbitrary content object, asserting the callback
/// fired exactly once.
pub async fn send(agent: &Agent, content: Value, recent: &[ChatTurn]) -> ActionResponse {
    let mut replies = Vec::new();
    agent
        .handle(&content, recent, |reply| replies.push(reply))
        .await;
    assert_eq!(replies.len(), 1, "callback must fire exactly once");
    replies.remove(0)
}

/// Ollama `/api/chat` reply carrying `content` as the assistant message.
pub fn ollama_reply(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "model": "phi3:mini",
        "message": { "role": "assistant", "content": content },
        "done": true
    }))
}

/// Standard successful `/launch` reply.
pub fn launch_reply(workload: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "node": "firmly-widely-proud-gpu.comput3.ai",
        "workload": workload,
        "workload_key": "wk-secret"
    }))
}
