//! Fatal errors surfaced by the session core.
//!
//! Everything else (a malformed JSONL line, an unparseable timestamp, an odd
//! `tool_result` shape) is recovered locally and never reaches this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// The session file could not be read (missing, permissions, ...).
    #[error("failed to read session file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading session data from a stream failed.
    #[error("failed to read session data")]
    Read(#[source] io::Error),

    /// The input decodes as neither a JSON session nor JSONL entries.
    #[error("session data is neither a JSON session nor JSONL: {0}")]
    Undecodable(#[source] serde_json::Error),

    /// The session parsed but holds no user turn to anchor a conversation.
    ///
    /// Batch callers match on this to skip such sessions silently.
    #[error("no conversations found in session")]
    NoConversations,
}

impl SessionError {
    /// True when the error only means "nothing to render" rather than a failure.
    pub fn is_no_conversations(&self) -> bool {
        matches!(self, SessionError::NoConversations)
    }
}
