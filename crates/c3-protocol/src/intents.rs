use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workload::WorkloadType;

/// Default workload lifetime when the user names none.
pub const DEFAULT_EXPIRES_MINUTES: u32 = 10;

/// Validated launch parameters. Lifetime is relative until it reaches the
/// HTTP boundary, where [`LaunchRequest::from_intent`] makes it absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchIntent {
    pub workload_type: WorkloadType,
    pub expires_minutes: u32,
}

impl LaunchIntent {
    pub fn new(workload_type: WorkloadType, expires_minutes: Option<u32>) -> Self {
        Self {
            workload_type,
            expires_minutes: expires_minutes.unwrap_or(DEFAULT_EXPIRES_MINUTES),
        }
    }
}

/// Wire body for `POST /launch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    #[serde(rename = "type")]
    pub workload_type: WorkloadType,
    /// Absolute expiry, unix seconds.
    pub expires: i64,
}

impl LaunchRequest {
    pub fn from_intent(intent: LaunchIntent, now: DateTime<Utc>) -> Self {
        Self {
            workload_type: intent.workload_type,
            expires: now.timestamp() + i64::from(intent.expires_minutes) * 60,
        }
    }
}

/// Validated stop parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopIntent {
    /// UUID, `<name>.comput3.ai` node name, or one of the looser fallback forms.
    pub workload_id: String,
}

/// Wire body for `POST /stop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    pub workload: String,
}

impl From<StopIntent> for StopRequest {
    fn from(intent: StopIntent) -> Self {
        Self {
            workload: intent.workload_id,
        }
    }
}

/// Wire body for `POST /workloads`. `None` lists everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn launch_intent_defaults_to_ten_minutes() {
        let intent = LaunchIntent::new(WorkloadType::MediaFast, None);
        assert_eq!(intent.expires_minutes, 10);
    }

    #[test]
    fn launch_request_adds_minutes_to_now() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let intent = LaunchIntent::new(WorkloadType::MediaFast, Some(30));
        let req = LaunchRequest::from_intent(intent, now);
        assert_eq!(req.expires, 1_700_000_000 + 1800);
        assert_eq!(req.workload_type, WorkloadType::MediaFast);
    }

    #[test]
    fn launch_request_wire_shape() {
        let req = LaunchRequest {
            workload_type: WorkloadType::OllamaWebuiCoder,
            expires: 1_700_000_600,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "ollama_webui:coder", "expires": 1_700_000_600})
        );
    }

    #[test]
    fn list_request_omits_absent_filter() {
        let json = serde_json::to_string(&ListRequest::default()).unwrap();
        assert_eq!(json, "{}");
        let json = serde_json::to_string(&ListRequest { running: Some(true) }).unwrap();
        assert_eq!(json, r#"{"running":true}"#);
    }

    #[test]
    fn stop_request_from_intent() {
        let req = StopRequest::from(StopIntent {
            workload_id: "firmly-widely-proud-gpu.comput3.ai".into(),
        });
        assert_eq!(req.workload, "firmly-widely-proud-gpu.comput3.ai");
    }
}
