use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::content::ContentBlock;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Unset, or anything else a source put there (tool/system entries).
    #[default]
    Other,
}

impl Role {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,
    #[serde(default)]
    pub output_tokens: u64,
    #[serde(default, rename = "cache_read_input_tokens")]
    pub cache_read_tokens: u64,
    #[serde(default, rename = "cache_creation_input_tokens")]
    pub cache_write_tokens: u64,
}

/// One turn of the transcript, identical for both source dialects.
///
/// Built only by the lenient decoder in `parsers`; there is no direct `Deserialize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Message {
    pub role: Role,
    /// `None` when the source omitted it or sent something unparseable.
    pub timestamp: Option<DateTime<Utc>>,
    pub content: Vec<ContentBlock>,
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub model: Option<String>,
    pub usage: Option<TokenUsage>,
}

impl Message {
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Text blocks joined by newlines. Thinking, tool calls and tool output are left out.
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(ContentBlock::as_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An ordered, parsed transcript. Immutable once decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Session {
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

/// Session-wide facts aggregated from the per-message fields.
///
/// Working directory, branch and version use the first value seen; models are listed
/// in first-seen order without duplicates; token counts are summed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionMetadata {
    pub cwd: Option<String>,
    pub git_branch: Option<String>,
    pub version: Option<String>,
    pub models: Vec<String>,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_cache_tokens: u64,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    /// Time spent between consecutive messages, idle gaps excluded.
    pub active_time: Duration,
}

impl SessionMetadata {
    /// Wall-clock span from the first to the last timestamped message, in message order.
    pub fn total_span(&self) -> Option<Duration> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => (end - start).to_std().ok(),
            _ => None,
        }
    }
}
