//! Model invocation seam used by model-assisted extraction.

use async_trait::async_trait;
use serde_json::Value;

/// Size class of the model to ask. Extraction uses `Small`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    Small,
    Large,
}

/// A text-generation backend: one prompt in, one completion out, no streaming.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, kind: ModelKind, prompt: &str) -> anyhow::Result<String>;

    /// Backend name (for logging).
    fn name(&self) -> &str;
}

/// Parse a JSON object out of model output.
///
/// Accepts raw JSON, fenced ```json blocks, or the first complete object
/// embedded in prose.
/// Anything that is not a JSON object yields `None`.
pub fn parse_json_object(text: &str) -> Option<Value> {
    let candidate = extract_json(text);
    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(candidate) {
        return Some(value);
    }

    // Prose around the object: the first `{` that starts a complete object.
    // The stream deserializer stops after one value, so trailing text is ignored.
    candidate
        .match_indices('{')
        .find_map(|(start, _)| {
            match serde_json::Deserializer::from_str(&candidate[start..])
                .into_iter::<Value>()
                .next()
            {
                Some(Ok(value @ Value::Object(_))) => Some(value),
                _ => None,
            }
        })
}

/// Strip markdown code fences if present.
fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after_fence = &trimmed[start + 7..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        if let Some(end) = after_fence.find("```") {
            return after_fence[..end].trim();
        }
    }

    trimmed
}
