use serde::{Deserialize, Serialize};

/// Response of `GET /balance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub balance: f64,
}

/// Response of `GET /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Wallet address the account is bound to.
    pub addr: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Account id. Usually a UUID, but kept opaque.
    pub user_uuid: String,
}
