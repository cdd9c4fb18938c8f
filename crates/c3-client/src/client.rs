//! `Comput3Client`: typed wrapper over the workload REST endpoints.

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;

use c3_protocol::{
    Balance, LaunchRequest, LaunchResponse, ListRequest, StopRequest, StopResponse, UserProfile,
    WorkloadItem,
};

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_BASE_URL: &str = "https://api.comput3.ai/api/v0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const API_KEY_HEADER: &str = "x-c3-api-key";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct Comput3Client {
    http: reqwest::Client,
    base_url: String,
}

impl Comput3Client {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ClientError::InvalidApiKey)?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST /launch
    pub async fn launch_workload(&self, req: &LaunchRequest) -> ClientResult<LaunchResponse> {
        self.post("/launch", req).await
    }

    /// POST /stop
    pub async fn stop_workload(&self, req: &StopRequest) -> ClientResult<StopResponse> {
        self.post("/stop", req).await
    }

    /// POST /workloads
    pub async fn list_workloads(&self, req: &ListRequest) -> ClientResult<Vec<WorkloadItem>> {
        self.post("/workloads", req).await
    }

    /// GET /types
    pub async fn get_workload_types(&self) -> ClientResult<Vec<String>> {
        self.get("/types").await
    }

    /// GET /balance
    pub async fn get_user_balance(&self) -> ClientResult<Balance> {
        self.get("/balance").await
    }

    /// GET /profile
    pub async fn get_user_profile(&self) -> ClientResult<UserProfile> {
        self.get("/profile").await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        decode(path, response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;
        decode(path, response).await
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    if !status.is_success() {
        tracing::warn!(path, status = status.as_u16(), "comput3 returned non-2xx");
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: error_message(&body, status),
        });
    }

    // Some endpoints answer 200 with an empty body.
    let body = if body.trim().is_empty() { "{}" } else { &body };
    serde_json::from_str(body).map_err(|e| ClientError::Decode(format!("{path}: {e}")))
}

/// Best error text from a failed response: `error` or `message` field, else
/// the raw body, else the status reason.
fn error_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message", "detail"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("unknown error")
        .to_string()
}
