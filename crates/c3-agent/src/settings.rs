//! Named settings lookup: runtime values first, then the process environment.

use std::collections::BTreeMap;

pub const API_KEY: &str = "COMPUT3_API_KEY";
pub const WALLET_ADDRESS: &str = "COMPUT3_WALLET_ADDRESS";
pub const API_URL: &str = "COMPUT3_API_URL";

/// Source of named string settings.
pub trait Settings: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}

/// Explicit values (e.g. the `[settings]` table of the config file) layered
/// over environment variables. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct LayeredSettings {
    overrides: BTreeMap<String, String>,
    use_env: bool,
}

impl LayeredSettings {
    pub fn new(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides,
            use_env: true,
        }
    }

    /// Only the explicit values; the environment is ignored.
    pub fn isolated(overrides: BTreeMap<String, String>) -> Self {
        Self {
            overrides,
            use_env: false,
        }
    }
}

impl Settings for LayeredSettings {
    fn get(&self, name: &str) -> Option<String> {
        let explicit = self.overrides.get(name).cloned();
        let value = if self.use_env {
            explicit.or_else(|| std::env::var(name).ok())
        } else {
            explicit
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
