//! Extraction orchestrator: per-command fallback chain over extraction strategies.
//!
//! Each command kind has an ordered list of strategies. The chain runs them in
//! order, gates every candidate through the kind's validator, and stops at the
//! first valid one. Each strategy runs at most once per turn, so there is at
//! most one model call per turn.
//!
//! Default orders differ: launch asks the model before falling back to the
//! pattern extractors, stop tries the patterns first. Both are configuration
//! (see [`Orchestrator::with_order`]), not control flow.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use c3_protocol::{DEFAULT_EXPIRES_MINUTES, LaunchIntent, StopIntent, WorkloadType};

use crate::context::{ChatTurn, Speaker, format_recent_messages};
use crate::extract::{extract_expiration_minutes, extract_workload_id, extract_workload_type};
use crate::model::{ModelClient, ModelKind, parse_json_object};
use crate::prompts::{LAUNCH_TEMPLATE, PromptState, RECENT_MESSAGES, STOP_TEMPLATE, compose_prompt};
use crate::validate::{is_launch_candidate, is_stop_candidate};

/// Number of recent messages rendered into model prompts.
pub const DEFAULT_CONTEXT_TURNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Launch,
    Stop,
}

/// One way of producing a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// The message already carries the typed field.
    Structured,
    /// Deterministic pattern extraction over the message text.
    Direct,
    /// Prompted model extraction over recent conversation.
    Model,
}

impl CommandKind {
    pub fn default_order(self) -> &'static [Strategy] {
        match self {
            CommandKind::Launch => &[Strategy::Structured, Strategy::Model, Strategy::Direct],
            CommandKind::Stop => &[Strategy::Structured, Strategy::Direct, Strategy::Model],
        }
    }

    /// Field whose presence marks a message as pre-structured.
    pub fn structured_field(self) -> &'static str {
        match self {
            CommandKind::Launch => "type",
            CommandKind::Stop => "workload",
        }
    }

    fn template(self) -> &'static str {
        match self {
            CommandKind::Launch => LAUNCH_TEMPLATE,
            CommandKind::Stop => STOP_TEMPLATE,
        }
    }

    fn is_valid(self, candidate: &Value) -> bool {
        match self {
            CommandKind::Launch => is_launch_candidate(candidate),
            CommandKind::Stop => is_stop_candidate(candidate),
        }
    }

    fn direct_candidate(self, text: &str) -> Value {
        match self {
            CommandKind::Launch => match extract_workload_type(text) {
                Some(t) => json!({
                    "type": t.as_str(),
                    "expires": extract_expiration_minutes(text, DEFAULT_EXPIRES_MINUTES),
                }),
                None => json!({}),
            },
            CommandKind::Stop => match extract_workload_id(text) {
                Some(id) => json!({ "workload": id }),
                None => json!({}),
            },
        }
    }
}

/// What the incoming message carries, resolved once per turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnInput {
    /// Message content already has the command's typed field.
    Structured(Value),
    /// Only free text.
    FreeText(String),
    /// Neither typed fields nor text.
    Neither,
}

impl TurnInput {
    /// Probe message content (a JSON object with optional `text` and typed
    /// fields) for the shape `kind` needs.
    pub fn probe(content: &Value, kind: CommandKind) -> Self {
        let field = kind.structured_field();
        if content.get(field).is_some_and(|v| !v.is_null()) {
            return TurnInput::Structured(content.clone());
        }
        match content.get("text").and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => TurnInput::FreeText(text.to_string()),
            _ => TurnInput::Neither,
        }
    }

    /// Free text of the message, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            TurnInput::Structured(content) => content.get("text").and_then(Value::as_str),
            TurnInput::FreeText(text) => Some(text),
            TurnInput::Neither => None,
        }
    }
}

/// No strategy produced a valid candidate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no valid {kind:?} intent (tried {attempted:?})")]
pub struct ExtractionFailure {
    pub kind: CommandKind,
    /// Strategies that actually ran, in order.
    pub attempted: Vec<Strategy>,
}

impl ExtractionFailure {
    /// User-facing explanation naming the expected input format.
    pub fn user_message(&self) -> String {
        match self.kind {
            CommandKind::Launch => format!(
                "I couldn't tell which workload type to launch. Valid types are: {}. \
                 You can also add a duration, e.g. \"for 30 minutes\".",
                WorkloadType::known_list()
            ),
            CommandKind::Stop => "I couldn't find a workload ID in your message. Please give the \
                 workload UUID (e.g. 7b69314d-c88d-47d9-920c-ae827f6b7844) or its node name \
                 (e.g. firmly-widely-proud-gpu.comput3.ai)."
                .to_string(),
        }
    }
}

/// Runs the extraction chain for launch and stop commands.
pub struct Orchestrator<'a> {
    model: Option<&'a dyn ModelClient>,
    launch_order: Vec<Strategy>,
    stop_order: Vec<Strategy>,
    context_turns: usize,
}

impl<'a> Orchestrator<'a> {
    /// Default orders; `model: None` skips the model strategy.
    pub fn new(model: Option<&'a dyn ModelClient>) -> Self {
        Self {
            model,
            launch_order: CommandKind::Launch.default_order().to_vec(),
            stop_order: CommandKind::Stop.default_order().to_vec(),
            context_turns: DEFAULT_CONTEXT_TURNS,
        }
    }

    /// Replace the strategy order for `kind`. Repeats are dropped so each
    /// strategy still runs at most once.
    pub fn with_order(mut self, kind: CommandKind, order: &[Strategy]) -> Self {
        let mut deduped = Vec::with_capacity(order.len());
        for strategy in order {
            if !deduped.contains(strategy) {
                deduped.push(*strategy);
            }
        }
        match kind {
            CommandKind::Launch => self.launch_order = deduped,
            CommandKind::Stop => self.stop_order = deduped,
        }
        self
    }

    pub fn with_context_turns(mut self, turns: usize) -> Self {
        self.context_turns = turns;
        self
    }

    pub fn order(&self, kind: CommandKind) -> &[Strategy] {
        match kind {
            CommandKind::Launch => &self.launch_order,
            CommandKind::Stop => &self.stop_order,
        }
    }

    pub async fn extract_launch(
        &self,
        input: &TurnInput,
        recent: &[ChatTurn],
    ) -> Result<LaunchIntent, ExtractionFailure> {
        let candidate = self.run(CommandKind::Launch, input, recent).await?;
        let workload_type = candidate
            .get("type")
            .and_then(Value::as_str)
            .map(WorkloadType::from)
            .unwrap_or_else(|| WorkloadType::Other(String::new()));
        let expires = candidate.get("expires").and_then(minutes_from_json);
        Ok(LaunchIntent::new(workload_type, expires))
    }

    pub async fn extract_stop(
        &self,
        input: &TurnInput,
        recent: &[ChatTurn],
    ) -> Result<StopIntent, ExtractionFailure> {
        let candidate = self.run(CommandKind::Stop, input, recent).await?;
        let workload_id = candidate
            .get("workload")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Ok(StopIntent { workload_id })
    }

    /// Walk the chain; return the first candidate that passes validation.
    async fn run(
        &self,
        kind: CommandKind,
        input: &TurnInput,
        recent: &[ChatTurn],
    ) -> Result<Value, ExtractionFailure> {
        let mut attempted = Vec::new();

        for &strategy in self.order(kind) {
            let Some(candidate) = self.attempt(strategy, kind, input, recent).await else {
                continue;
            };
            attempted.push(strategy);

            if kind.is_valid(&candidate) {
                tracing::info!(?kind, ?strategy, "intent extracted");
                return Ok(candidate);
            }
            tracing::debug!(?kind, ?strategy, %candidate, "candidate failed validation");
        }

        tracing::info!(?kind, ?attempted, "intent extraction exhausted");
        Err(ExtractionFailure { kind, attempted })
    }

    /// Produce a candidate, or `None` if the strategy does not apply this turn.
    async fn attempt(
        &self,
        strategy: Strategy,
        kind: CommandKind,
        input: &TurnInput,
        recent: &[ChatTurn],
    ) -> Option<Value> {
        match strategy {
            Strategy::Structured => match input {
                TurnInput::Structured(content) => Some(content.clone()),
                _ => None,
            },
            Strategy::Direct => input.text().map(|text| kind.direct_candidate(text)),
            Strategy::Model => Some(self.model_candidate(kind, input, recent).await?),
        }
    }

    async fn model_candidate(
        &self,
        kind: CommandKind,
        input: &TurnInput,
        recent: &[ChatTurn],
    ) -> Option<Value> {
        let model = self.model?;

        // The current message closes the context, whether or not the caller
        // already appended it to `recent`.
        let mut turns = recent.to_vec();
        if let Some(current) = input.text().filter(|t| !t.trim().is_empty())
            && !turns
                .last()
                .is_some_and(|t| t.speaker == Speaker::User && t.text == current)
        {
            turns.push(ChatTurn::user(current));
        }
        let recent_messages = format_recent_messages(&turns, self.context_turns);
        if recent_messages.is_empty() {
            tracing::debug!(?kind, "no conversation context for model extraction");
            return None;
        }

        let state = PromptState::new().with(RECENT_MESSAGES, recent_messages);
        let prompt = compose_prompt(kind.template(), &state);

        let raw = match model.generate(ModelKind::Small, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, model = model.name(), "model extraction failed");
                return None;
            }
        };

        // An unparseable reply still counts as an attempt; the empty object
        // fails validation.
        Some(parse_json_object(&raw).unwrap_or_else(|| {
            tracing::warn!(model = model.name(), raw = %raw, "model returned no JSON object");
            json!({})
        }))
    }
}

/// Lifetime in whole minutes from a JSON number. Negative values clamp to 0.
fn minutes_from_json(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return Some(u32::try_from(n).unwrap_or(u32::MAX));
    }
    let n = value.as_f64()?;
    if n <= 0.0 {
        Some(0)
    } else {
        Some(n.min(f64::from(u32::MAX)) as u32)
    }
}
