//! Claude Session Export - parse, analyze and index exported Claude chat sessions
//!
//! This library turns session transcripts stored by Claude (JSON or JSONL, under
//! `~/.claude/projects/`) into a structured conversation model. It supports:
//!
//! - Detecting the file layout and decoding both message dialects into one [`Session`] shape
//! - Grouping messages into user-anchored conversations
//! - Tool-usage statistics, long-text flags, git commits and GitHub remotes found in tool output
//! - Paginated, chronological session indexes for a renderer
//! - Discovering sessions on disk and searching them for text
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use claude_session_export::{build_session_index, parse_session_file};
//!
//! let session = parse_session_file(Path::new("session.jsonl"))?;
//! let index = build_session_index(&session, None)?;
//! println!("{} prompts over {} pages", index.total_prompts, index.total_pages);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search;
pub mod utils;

// Re-export commonly used types
pub use analysis::{analyze_conversation, group_conversations};
pub use error::SessionError;
pub use indexer::{SessionIndex, build_session_index};
pub use models::{Conversation, IndexItem, Message, Session};
pub use parsers::{parse_session, parse_session_file};
pub use search::search_projects_dir;
