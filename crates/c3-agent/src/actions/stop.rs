//! STOP_WORKLOAD: extract the workload id, then stop it.

use serde_json::{Value, json};

use c3_intent::{ChatTurn, CommandKind, TurnInput};
use c3_protocol::{ActionResponse, StopRequest};

use super::ActionContext;
use crate::error::ActionError;
use crate::format;

pub async fn run(
    ctx: &ActionContext<'_>,
    content: &Value,
    recent: &[ChatTurn],
) -> Result<ActionResponse, ActionError> {
    let client = ctx.client()?;

    let input = TurnInput::probe(content, CommandKind::Stop);
    let intent = ctx.orchestrator.extract_stop(&input, recent).await?;
    tracing::info!(workload = %intent.workload_id, "stopping workload");

    let request = StopRequest::from(intent);
    let resp = client.stop_workload(&request).await?;

    let text = format::stopped(&request.workload);
    let data = json!({
        "workload": request.workload,
        "stopped": resp.stopped,
    });
    Ok(ActionResponse::success(text, data))
}
