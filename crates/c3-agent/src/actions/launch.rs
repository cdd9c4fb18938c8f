//! LAUNCH_WORKLOAD: extract type and lifetime, then launch.

use chrono::Utc;
use serde_json::{Value, json};

use c3_intent::{ChatTurn, CommandKind, TurnInput};
use c3_protocol::{ActionResponse, LaunchRequest};

use super::{ActionContext, to_data};
use crate::error::ActionError;
use crate::format;

pub async fn run(
    ctx: &ActionContext<'_>,
    content: &Value,
    recent: &[ChatTurn],
) -> Result<ActionResponse, ActionError> {
    let client = ctx.client()?;

    let input = TurnInput::probe(content, CommandKind::Launch);
    let intent = ctx.orchestrator.extract_launch(&input, recent).await?;
    tracing::info!(
        workload_type = %intent.workload_type,
        known = intent.workload_type.is_known(),
        expires_minutes = intent.expires_minutes,
        "launching workload"
    );

    // Relative lifetime becomes absolute here and nowhere else.
    let request = LaunchRequest::from_intent(intent, Utc::now());
    let launched = client.launch_workload(&request).await?;
    tracing::info!(workload = %launched.workload, node = %launched.node, "workload launched");

    let text = format::launched(&launched, &request);
    let data = json!({
        "workload": to_data(&launched)?,
        "type": request.workload_type.as_str(),
        "expires": request.expires,
    });
    Ok(ActionResponse::success(text, data))
}
