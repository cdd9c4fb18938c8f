//! Model backends for prompt-based intent extraction.
//!
//! - **Ollama**: local or self-hosted HTTP endpoint.
//! - **Bedrock**: AWS Converse API.
//!
//! Both implement `c3_intent::ModelClient`; the provider is chosen in config.

pub mod bedrock;
pub mod ollama;

use serde::Deserialize;

use c3_intent::ModelClient;

pub use bedrock::{BedrockConfig, BedrockModel};
pub use ollama::{OllamaConfig, OllamaModel};

/// Which backend serves model-assisted extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelProvider {
    #[default]
    Ollama,
    Bedrock,
    /// No model; extraction relies on patterns only.
    #[serde(rename = "none")]
    Disabled,
}

/// `[model]` config section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    #[serde(default)]
    pub provider: ModelProvider,
    #[serde(default)]
    pub ollama: OllamaConfig,
    #[serde(default)]
    pub bedrock: BedrockConfig,
}

/// Build the configured backend, or `None` when disabled.
pub async fn build_model(config: &ModelConfig) -> anyhow::Result<Option<Box<dyn ModelClient>>> {
    let model: Option<Box<dyn ModelClient>> = match config.provider {
        ModelProvider::Ollama => {
            tracing::info!(
                host = %config.ollama.host,
                model = %config.ollama.small_model,
                "ollama model backend enabled"
            );
            Some(Box::new(OllamaModel::new(config.ollama.clone())?))
        }
        ModelProvider::Bedrock => {
            let bedrock = config.bedrock.clone().with_env_overrides();
            tracing::info!(model_id = %bedrock.model_id, "bedrock model backend enabled");
            Some(Box::new(BedrockModel::from_default_chain(bedrock).await))
        }
        ModelProvider::Disabled => {
            tracing::info!("model backend disabled, pattern extraction only");
            None
        }
    };
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_defaults_to_ollama() {
        let config: ModelConfig = toml::from_str("").unwrap();
        assert_eq!(config.provider, ModelProvider::Ollama);
    }

    #[test]
    fn provider_none_parses() {
        let config: ModelConfig = toml::from_str(r#"provider = "none""#).unwrap();
        assert_eq!(config.provider, ModelProvider::Disabled);
    }

    #[tokio::test]
    async fn disabled_provider_builds_nothing() {
        let config = ModelConfig {
            provider: ModelProvider::Disabled,
            ..ModelConfig::default()
        };
        assert!(build_model(&config).await.unwrap().is_none());
    }
}
