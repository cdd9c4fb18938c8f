//! Intent validators: structural gates for candidate objects.
//!
//! A candidate is the JSON-shaped object produced by any extraction path.
//! These checks are shape-only: an unknown workload type string passes and is
//! left for the remote service to reject.

use serde_json::Value;

/// `type` is a non-empty string, and `expires` is absent, null, or a number.
pub fn is_launch_candidate(candidate: &Value) -> bool {
    let has_type = candidate
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.is_empty());

    let expires_ok = match candidate.get("expires") {
        None | Some(Value::Null) => true,
        Some(v) => v.is_number(),
    };

    has_type && expires_ok
}

/// `workload` is a non-empty string.
pub fn is_stop_candidate(candidate: &Value) -> bool {
    candidate
        .get("workload")
        .and_then(Value::as_str)
        .is_some_and(|w| !w.is_empty())
}
