//! HTTP client for the Comput3 workload API.
//!
//! One request/response round trip per call, a fixed timeout and the
//! `X-C3-API-KEY` header on every request. No retries.

pub mod client;
pub mod error;

pub use client::{ClientConfig, Comput3Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::{ClientError, ClientResult};
