//! Prompt templates for model-assisted extraction.
//!
//! Placeholders use `{{name}}` syntax. Only `{{recentMessages}}` is filled in
//! by the orchestrator.

use std::collections::BTreeMap;

pub const RECENT_MESSAGES: &str = "recentMessages";

pub const LAUNCH_TEMPLATE: &str = r#"You extract parameters for launching a GPU workload on Comput3 from a conversation.

Recent messages:
{{recentMessages}}

Valid workload types:
- media:fast — media processing (video, audio, transcoding)
- ollama_webui:coder — Ollama web UI with a coding model
- ollama_webui:fast — Ollama web UI with a small, fast model
- ollama_webui:large — Ollama web UI with a large model
- llama_webui:coder — Llama web UI with a coding model

Rules:
- "type" must be one of the valid workload types above.
- "expires" is the lifetime in MINUTES. Convert hours to minutes. Use 10 if no duration is mentioned.
- Only consider what the user is asking for in the most recent request.

Examples:

user: Launch a media:fast workload for 30 minutes
{"type": "media:fast", "expires": 30}

user: I need a coding assistant for 2 hours
{"type": "ollama_webui:coder", "expires": 120}

user: spin up the biggest ollama you have
{"type": "ollama_webui:large", "expires": 10}

Respond with ONLY a JSON object (no markdown, no explanation):
{"type": "<workload type>", "expires": <minutes>}

If no workload type can be determined, respond with:
{"type": null}"#;

pub const STOP_TEMPLATE: &str = r#"You extract the identifier of a GPU workload to stop on Comput3 from a conversation.

Recent messages:
{{recentMessages}}

A workload identifier is either:
- a UUID such as 7b69314d-c88d-47d9-920c-ae827f6b7844, or
- a node name ending in .comput3.ai such as firmly-widely-proud-gpu.comput3.ai

Examples:

user: Stop my workload 7b69314d-c88d-47d9-920c-ae827f6b7844
{"workload": "7b69314d-c88d-47d9-920c-ae827f6b7844"}

user: please shut down firmly-widely-proud-gpu.comput3.ai, I'm done
{"workload": "firmly-widely-proud-gpu.comput3.ai"}

Copy the identifier exactly as written. Respond with ONLY a JSON object (no markdown, no explanation):
{"workload": "<identifier>"}

If no identifier is present, respond with:
{"workload": null}"#;

/// Values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct PromptState {
    values: BTreeMap<String, String>,
}

impl PromptState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Replace every `{{key}}` present in `state`. Unknown placeholders are left as-is.
pub fn compose_prompt(template: &str, state: &PromptState) -> String {
    state
        .values
        .iter()
        .fold(template.to_string(), |prompt, (key, value)| {
            prompt.replace(&format!("{{{{{key}}}}}"), value)
        })
}
