//! Intent extraction for Comput3 workload commands.
//!
//! Turns free-form user text into validated launch/stop intents:
//! - **patterns**: static regex tables per workload type, duration and id.
//! - **extract**: pure, total field extractors built on those tables.
//! - **validate**: structural gates a candidate must pass before use.
//! - **prompts**: few-shot templates for model-assisted extraction.
//! - **orchestrator**: the per-command fallback chain tying it together.

pub mod context;
pub mod extract;
pub mod mock;
pub mod model;
pub mod orchestrator;
pub mod patterns;
pub mod prompts;
pub mod validate;

pub use context::{ChatTurn, Speaker};
pub use extract::{
    extract_expiration_minutes, extract_running_filter, extract_workload_id,
    extract_workload_type,
};
pub use mock::MockModel;
pub use model::{ModelClient, ModelKind, parse_json_object};
pub use orchestrator::{CommandKind, ExtractionFailure, Orchestrator, Strategy, TurnInput};
pub use validate::{is_launch_candidate, is_stop_candidate};
