//! Comput3 agent: library crate for the conversational workload manager.
//!
//! Re-exports all modules so external crates (e.g. `c3-e2e-tests`) can
//! drive full turns through `Agent` with mock servers.

pub mod actions;
pub mod agent;
pub mod config;
pub mod error;
pub mod format;
pub mod inference;
pub mod router;
pub mod settings;

pub use agent::Agent;
pub use config::AgentConfig;
pub use error::ActionError;
