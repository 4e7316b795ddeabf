use chrono::{DateTime, Utc};
use serde::Serialize;

use super::session::Message;

/// One user turn plus every non-user message up to the next user turn.
///
/// Borrowed from the [`Session`](super::Session) it was grouped from; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation<'a> {
    pub user_text: String,
    pub timestamp: Option<DateTime<Utc>>,
    /// The anchoring user message comes first.
    pub messages: Vec<&'a Message>,
    /// Set when the turn is the automatic summary that resumes a compacted session.
    pub is_continuation: bool,
}

/// Tool calls in one conversation, bucketed by tool name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ToolStats {
    pub bash_count: usize,
    pub read_count: usize,
    pub write_count: usize,
    /// `Edit` and `MultiEdit` together.
    pub edit_count: usize,
    pub glob_count: usize,
    pub grep_count: usize,
    pub other_count: usize,
}

impl ToolStats {
    pub fn record(&mut self, tool_name: &str) {
        match tool_name {
            "Bash" => self.bash_count += 1,
            "Read" => self.read_count += 1,
            "Write" => self.write_count += 1,
            "Edit" | "MultiEdit" => self.edit_count += 1,
            "Glob" => self.glob_count += 1,
            "Grep" => self.grep_count += 1,
            _ => self.other_count += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.bash_count
            + self.read_count
            + self.write_count
            + self.edit_count
            + self.glob_count
            + self.grep_count
            + self.other_count
    }

    pub fn merge(&mut self, other: &ToolStats) {
        self.bash_count += other.bash_count;
        self.read_count += other.read_count;
        self.write_count += other.write_count;
        self.edit_count += other.edit_count;
        self.glob_count += other.glob_count;
        self.grep_count += other.grep_count;
        self.other_count += other.other_count;
    }
}

/// A `git commit` summary line found in tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitCommit {
    pub hash: String,
    pub message: String,
    pub timestamp: Option<DateTime<Utc>>,
}

/// An entry of the chronological session index.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IndexItem {
    Prompt {
        timestamp: Option<DateTime<Utc>>,
        text: String,
        page_num: usize,
        message_id: String,
        stats: ToolStats,
        long_texts: Vec<String>,
    },
    Commit {
        timestamp: Option<DateTime<Utc>>,
        hash: String,
        message: String,
        repo_url: Option<String>,
    },
}

impl IndexItem {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            IndexItem::Prompt { timestamp, .. } | IndexItem::Commit { timestamp, .. } => {
                *timestamp
            }
        }
    }

    /// Link to the commit on the hosting service, when a repository is known.
    pub fn commit_url(&self) -> Option<String> {
        match self {
            IndexItem::Commit { hash, repo_url: Some(repo), .. } => {
                Some(format!("{}/commit/{}", repo, hash))
            }
            _ => None,
        }
    }
}
