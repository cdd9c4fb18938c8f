//! Conversation context handed to model-assisted extraction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Agent,
}

/// One message of recent conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub speaker: Speaker,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
        }
    }
}

/// Render the last `count` turns, oldest first, one `speaker: text` per line.
pub fn format_recent_messages(turns: &[ChatTurn], count: usize) -> String {
    let start = turns.len().saturating_sub(count);
    turns[start..]
        .iter()
        .map(|turn| {
            let who = match turn.speaker {
                Speaker::User => "user",
                Speaker::Agent => "agent",
            };
            format!("{who}: {}", turn.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_last_turns() {
        let turns = vec![
            ChatTurn::user("one"),
            ChatTurn::agent("two"),
            ChatTurn::user("three"),
            ChatTurn::agent("four"),
        ];
        assert_eq!(
            format_recent_messages(&turns, 3),
            "agent: two\nuser: three\nagent: four"
        );
    }

    #[test]
    fn fewer_turns_than_requested() {
        let turns = vec![ChatTurn::user("launch something")];
        assert_eq!(format_recent_messages(&turns, 3), "user: launch something");
        assert_eq!(format_recent_messages(&[], 3), "");
    }
}
