//! Parameterless queries: workload types, balance, profile.

use serde_json::json;

use c3_protocol::ActionResponse;

use super::{ActionContext, to_data};
use crate::error::ActionError;
use crate::format;

pub async fn workload_types(ctx: &ActionContext<'_>) -> Result<ActionResponse, ActionError> {
    let types = ctx.client()?.get_workload_types().await?;
    Ok(ActionResponse::success(
        format::workload_types(&types),
        json!({ "types": types }),
    ))
}

pub async fn balance(ctx: &ActionContext<'_>) -> Result<ActionResponse, ActionError> {
    let balance = ctx.client()?.get_user_balance().await?;
    Ok(ActionResponse::success(
        format::balance(&balance),
        to_data(&balance)?,
    ))
}

pub async fn profile(ctx: &ActionContext<'_>) -> Result<ActionResponse, ActionError> {
    let profile = ctx.client()?.get_user_profile().await?;
    Ok(ActionResponse::success(
        format::profile(&profile, ctx.wallet_address),
        json!({
            "profile": to_data(&profile)?,
            "wallet_address": ctx.wallet_address,
        }),
    ))
}
