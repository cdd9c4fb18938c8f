//! Action router: picks which command a turn is asking for.
//!
//! A structured `action` field wins. Otherwise free text is matched against
//! keyword phrases, whole words only, in fixed priority order: stop before
//! launch ("stop the one I launched"), types before list ("list workload
//! types").

use serde_json::Value;

use c3_protocol::ActionKind;

const ROUTES: &[(ActionKind, &[&str])] = &[
    (
        ActionKind::StopWorkload,
        &["stop", "terminate", "kill", "shut down", "shutdown", "destroy", "end workload"],
    ),
    (
        ActionKind::LaunchWorkload,
        &["launch", "start", "spin up", "create", "deploy", "provision"],
    ),
    (
        ActionKind::ListWorkloadTypes,
        &["workload types", "available types", "what types", "which types", "list types"],
    ),
    (
        ActionKind::GetBalance,
        &["balance", "credits", "funds", "how much money"],
    ),
    (
        ActionKind::GetProfile,
        &["profile", "account", "who am i", "my wallet"],
    ),
    (
        ActionKind::ListWorkloads,
        &["list", "show", "workloads", "what is running", "what's running"],
    ),
];

/// Decide the action for a message content object.
pub fn route(content: &Value) -> Option<ActionKind> {
    if let Some(action) = content.get("action")
        && let Ok(kind) = serde_json::from_value::<ActionKind>(action.clone())
    {
        return Some(kind);
    }

    let text = content.get("text").and_then(Value::as_str)?;
    route_text(text)
}

/// Keyword routing over free text.
pub fn route_text(text: &str) -> Option<ActionKind> {
    let words = normalize(text);
    ROUTES
        .iter()
        .find(|(_, phrases)| phrases.iter().any(|p| words.contains(&format!(" {p} "))))
        .map(|(kind, _)| *kind)
}

/// Lowercase, turn everything except letters, digits and apostrophes into
/// single spaces, and pad both ends so phrases match on word boundaries.
fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '\'' { c } else { ' ' })
        .collect();
    let joined = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(" {joined} ")
}
