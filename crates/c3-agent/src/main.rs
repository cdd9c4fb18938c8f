//! Comput3 agent: interactive workload manager on stdin/stdout.
//!
//! Each input line is one turn. Lines starting with `{` are taken as a JSON
//! content object (`{"action": ..., "type": ...}`); anything else is free text.

use std::path::Path;

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use c3_agent::settings::LayeredSettings;
use c3_agent::{Agent, AgentConfig};
use c3_intent::ChatTurn;

const DEFAULT_CONFIG_PATH: &str = "/etc/comput3/agent.toml";

/// Turns kept in memory; the orchestrator only renders the last few.
const MAX_HISTORY: usize = 20;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "c3-agent starting");

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => AgentConfig::from_file(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            AgentConfig::from_file(DEFAULT_CONFIG_PATH)?
        }
        None => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
            AgentConfig::default()
        }
    };

    let settings = LayeredSettings::new(config.settings.clone());
    let agent = Agent::from_config(&config, &settings).await?;
    tracing::info!(
        credentials = agent.has_credentials(),
        context_turns = agent.context_turns(),
        "c3-agent ready"
    );

    tokio::select! {
        result = repl(&agent) => result?,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    tracing::info!("c3-agent stopped");
    Ok(())
}

async fn repl(agent: &Agent) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut history: Vec<ChatTurn> = Vec::new();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let content = parse_line(line);
        history.push(ChatTurn::user(line));

        let mut reply_text = None;
        agent
            .handle(&content, &history, |reply| {
                println!("{}", reply.text);
                reply_text = Some(reply.text);
            })
            .await;
        if let Some(text) = reply_text {
            history.push(ChatTurn::agent(text));
        }

        if history.len() > MAX_HISTORY {
            history.drain(..history.len() - MAX_HISTORY);
        }
    }
    Ok(())
}

fn parse_line(line: &str) -> Value {
    if line.starts_with('{')
        && let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(line)
    {
        return value;
    }
    json!({ "text": line })
}
