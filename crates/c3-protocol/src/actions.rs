use serde::{Deserialize, Serialize};

/// Which command a user turn is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    LaunchWorkload,
    StopWorkload,
    ListWorkloads,
    ListWorkloadTypes,
    GetBalance,
    GetProfile,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::LaunchWorkload => "LAUNCH_WORKLOAD",
            ActionKind::StopWorkload => "STOP_WORKLOAD",
            ActionKind::ListWorkloads => "LIST_WORKLOADS",
            ActionKind::ListWorkloadTypes => "LIST_WORKLOAD_TYPES",
            ActionKind::GetBalance => "GET_BALANCE",
            ActionKind::GetProfile => "GET_PROFILE",
        }
    }
}

/// Structured half of a turn's reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionContent {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// The single reply delivered per turn: chat text plus structured payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub text: String,
    pub content: ActionContent,
}

impl ActionResponse {
    pub fn success(text: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            text: text.into(),
            content: ActionContent {
                success: true,
                data: Some(data),
                error: None,
                status_code: None,
            },
        }
    }

    pub fn failure(
        text: impl Into<String>,
        error: impl Into<String>,
        status_code: Option<u16>,
    ) -> Self {
        Self {
            text: text.into(),
            content: ActionContent {
                success: false,
                data: None,
                error: Some(error.into()),
                status_code,
            },
        }
    }

    pub fn is_success(&self) -> bool {
        self.content.success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_kind_serialization() {
        let json = serde_json::to_string(&ActionKind::LaunchWorkload).unwrap();
        assert_eq!(json, r#""launch_workload""#);
        let kind: ActionKind = serde_json::from_str(r#""stop_workload""#).unwrap();
        assert_eq!(kind, ActionKind::StopWorkload);
    }

    #[test]
    fn failure_payload_omits_data() {
        let resp = ActionResponse::failure("gateway down", "Bad Gateway", Some(502));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["content"]["success"], false);
        assert_eq!(json["content"]["status_code"], 502);
        assert!(json["content"].get("data").is_none());
    }

    #[test]
    fn success_payload_omits_error() {
        let resp = ActionResponse::success("ok", serde_json::json!({"balance": 12.5}));
        assert!(resp.is_success());
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json["content"].get("error").is_none());
        assert_eq!(json["content"]["data"]["balance"], 12.5);
    }
}
