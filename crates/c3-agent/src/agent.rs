//! Turn boundary: route one message, run one action, reply exactly once.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;

use c3_client::{ClientConfig, Comput3Client};
use c3_intent::{ChatTurn, CommandKind, ModelClient, Orchestrator};
use c3_protocol::ActionResponse;

use crate::actions::{self, ActionContext};
use crate::config::{AgentConfig, ExtractionConfig};
use crate::error::ActionError;
use crate::inference;
use crate::router;
use crate::settings::{self, Settings};

/// Conversational front end for the Comput3 workload API.
pub struct Agent {
    client: Option<Comput3Client>,
    model: Option<Arc<dyn ModelClient>>,
    wallet_address: Option<String>,
    extraction: ExtractionConfig,
}

impl Agent {
    /// `client: None` means no API key is configured; every action then
    /// replies with a missing-credential failure.
    pub fn new(client: Option<Comput3Client>, model: Option<Arc<dyn ModelClient>>) -> Self {
        Self {
            client,
            model,
            wallet_address: None,
            extraction: ExtractionConfig::default(),
        }
    }

    pub fn with_wallet_address(mut self, wallet: Option<String>) -> Self {
        self.wallet_address = wallet;
        self
    }

    pub fn with_extraction(mut self, extraction: ExtractionConfig) -> Self {
        self.extraction = extraction;
        self
    }

    /// Resolve settings, build the HTTP client and the model backend.
    pub async fn from_config(config: &AgentConfig, settings: &dyn Settings) -> anyhow::Result<Self> {
        let base_url = settings
            .get(settings::API_URL)
            .unwrap_or_else(|| config.api.base_url.clone());

        let client = match settings.get(settings::API_KEY) {
            Some(key) => {
                let client_config = ClientConfig::new(key)
                    .with_base_url(base_url.as_str())
                    .with_timeout(Duration::from_secs(config.api.timeout_secs));
                tracing::info!(%base_url, "comput3 client configured");
                Some(Comput3Client::new(client_config)?)
            }
            None => {
                tracing::warn!(setting = settings::API_KEY, "API key not set; actions will fail");
                None
            }
        };

        let model = inference::build_model(&config.model).await?.map(Arc::from);

        Ok(Self::new(client, model)
            .with_wallet_address(settings.get(settings::WALLET_ADDRESS))
            .with_extraction(config.extraction.clone()))
    }

    pub fn has_credentials(&self) -> bool {
        self.client.is_some()
    }

    pub fn context_turns(&self) -> usize {
        self.extraction.context_turns
    }

    /// Handle one turn and return its reply.
    ///
    /// `content` is the message payload: free text under `"text"`, and/or
    /// structured fields (`action`, `type`, `expires`, `workload`, `running`).
    /// `recent` is prior conversation, oldest first; it may or may not already
    /// end with this message's text.
    pub async fn respond(&self, content: &Value, recent: &[ChatTurn]) -> ActionResponse {
        let Some(kind) = router::route(content) else {
            let text = content
                .get("text")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| content.to_string());
            tracing::debug!(%text, "no action matched");
            return ActionError::UnknownAction(text).into_response(None);
        };

        let orchestrator = Orchestrator::new(self.model.as_deref())
            .with_order(CommandKind::Launch, &self.extraction.launch_order)
            .with_order(CommandKind::Stop, &self.extraction.stop_order)
            .with_context_turns(self.extraction.context_turns);
        let ctx = ActionContext {
            client: self.client.as_ref(),
            orchestrator: &orchestrator,
            wallet_address: self.wallet_address.as_deref(),
        };

        match actions::dispatch(kind, &ctx, content, recent).await {
            Ok(response) => response,
            Err(err) => {
                match &err {
                    ActionError::Unexpected(message) => {
                        tracing::error!(action = kind.name(), %message, "action failed unexpectedly")
                    }
                    other => tracing::warn!(action = kind.name(), error = %other, "action failed"),
                }
                err.into_response(Some(kind))
            }
        }
    }

    /// Handle one turn and deliver its reply to `callback`, exactly once.
    /// Returns whether the action succeeded.
    pub async fn handle<F>(&self, content: &Value, recent: &[ChatTurn], callback: F) -> bool
    where
        F: FnOnce(ActionResponse),
    {
        let response = self.respond(content, recent).await;
        let ok = response.is_success();
        callback(response);
        ok
    }
}
