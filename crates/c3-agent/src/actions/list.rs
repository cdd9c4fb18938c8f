//! LIST_WORKLOADS: optional running filter from a structured field or text.

use serde_json::{Value, json};

use c3_intent::extract_running_filter;
use c3_protocol::{ActionResponse, ListRequest};

use super::{ActionContext, to_data};
use crate::error::ActionError;
use crate::format;

pub async fn run(ctx: &ActionContext<'_>, content: &Value) -> Result<ActionResponse, ActionError> {
    let client = ctx.client()?;

    let running = match content.get("running").and_then(Value::as_bool) {
        Some(flag) => Some(flag),
        None => content
            .get("text")
            .and_then(Value::as_str)
            .and_then(extract_running_filter),
    };

    let items = client.list_workloads(&ListRequest { running }).await?;
    tracing::info!(count = items.len(), ?running, "listed workloads");

    let text = format::workloads(&items, running);
    Ok(ActionResponse::success(
        text,
        json!({ "workloads": to_data(&items)?, "running": running }),
    ))
}
