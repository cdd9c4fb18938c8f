//! Action handlers: one per `ActionKind`.
//!
//! Every handler checks the API key before doing anything else, so a missing
//! credential never reaches the model or the remote service.

pub mod account;
pub mod launch;
pub mod list;
pub mod stop;

use serde::Serialize;
use serde_json::Value;

use c3_client::Comput3Client;
use c3_intent::{ChatTurn, Orchestrator};
use c3_protocol::{ActionKind, ActionResponse};

use crate::error::ActionError;
use crate::settings;

/// Everything a handler may use during one turn.
pub struct ActionContext<'a> {
    pub client: Option<&'a Comput3Client>,
    pub orchestrator: &'a Orchestrator<'a>,
    pub wallet_address: Option<&'a str>,
}

impl<'a> ActionContext<'a> {
    fn client(&self) -> Result<&'a Comput3Client, ActionError> {
        self.client
            .ok_or(ActionError::MissingCredential(settings::API_KEY))
    }
}

/// Run the handler for `kind`.
pub async fn dispatch(
    kind: ActionKind,
    ctx: &ActionContext<'_>,
    content: &Value,
    recent: &[ChatTurn],
) -> Result<ActionResponse, ActionError> {
    match kind {
        ActionKind::LaunchWorkload => launch::run(ctx, content, recent).await,
        ActionKind::StopWorkload => stop::run(ctx, content, recent).await,
        ActionKind::ListWorkloads => list::run(ctx, content).await,
        ActionKind::ListWorkloadTypes => account::workload_types(ctx).await,
        ActionKind::GetBalance => account::balance(ctx).await,
        ActionKind::GetProfile => account::profile(ctx).await,
    }
}

fn to_data<T: Serialize>(value: &T) -> Result<Value, ActionError> {
    serde_json::to_value(value).map_err(|e| ActionError::Unexpected(e.to_string()))
}
