use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Software image/configuration launched on a workload.
///
/// The remote service may return tags this build does not know about, so
/// anything outside the known set round-trips through `Other`. Extraction
/// only ever produces the known variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WorkloadType {
    MediaFast,
    OllamaWebuiCoder,
    OllamaWebuiFast,
    OllamaWebuiLarge,
    LlamaWebuiCoder,
    Other(String),
}

impl WorkloadType {
    /// Known types in declaration order. Extraction iterates this order and
    /// the first match wins.
    pub const KNOWN: [WorkloadType; 5] = [
        WorkloadType::MediaFast,
        WorkloadType::OllamaWebuiCoder,
        WorkloadType::OllamaWebuiFast,
        WorkloadType::OllamaWebuiLarge,
        WorkloadType::LlamaWebuiCoder,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            WorkloadType::MediaFast => "media:fast",
            WorkloadType::OllamaWebuiCoder => "ollama_webui:coder",
            WorkloadType::OllamaWebuiFast => "ollama_webui:fast",
            WorkloadType::OllamaWebuiLarge => "ollama_webui:large",
            WorkloadType::LlamaWebuiCoder => "llama_webui:coder",
            WorkloadType::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, WorkloadType::Other(_))
    }

    /// Comma-separated list of the known tags, for user-facing hints.
    pub fn known_list() -> String {
        Self::KNOWN
            .iter()
            .map(WorkloadType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<String> for WorkloadType {
    fn from(tag: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.as_str() == tag)
            .unwrap_or(WorkloadType::Other(tag))
    }
}

impl From<&str> for WorkloadType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<WorkloadType> for String {
    fn from(t: WorkloadType) -> Self {
        match t {
            WorkloadType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for WorkloadType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for WorkloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response body of a successful launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchResponse {
    /// Hostname of the node serving the workload (e.g. `firmly-widely-proud-gpu.comput3.ai`).
    pub node: String,
    /// Workload UUID.
    pub workload: String,
    /// Per-workload access key.
    pub workload_key: String,
}

/// Response body of a stop call. The service returns `{}` or a stop timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopped: Option<i64>,
}

/// One entry of the workload listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadItem {
    pub workload: String,
    #[serde(rename = "type", default = "unknown_type")]
    pub workload_type: WorkloadType,
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub running: bool,
    /// Unix seconds.
    #[serde(default)]
    pub created: i64,
    /// Unix seconds.
    #[serde(default)]
    pub expires: i64,
}

fn unknown_type() -> WorkloadType {
    WorkloadType::Other("unknown".into())
}

impl WorkloadItem {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expires, 0)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }
}
