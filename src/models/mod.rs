//! Data models for exported chat sessions.
//!
//! - [`ContentBlock`], [`ToolInput`] - the content of a single message
//! - [`Session`], [`Message`] - a decoded transcript, one shape for every source dialect
//! - [`Conversation`], [`ToolStats`], [`IndexItem`] - views derived from a session on demand
//! - [`SessionInfo`], [`ProjectInfo`] - session files discovered on disk
//! - [`SearchResult`] - matches from a text search over sessions

pub mod content;
pub mod conversation;
pub mod project;
pub mod search;
pub mod session;

pub use content::{ContentBlock, ImageSource, TodoItem, ToolInput, ToolResultContent};
pub use conversation::{Conversation, GitCommit, IndexItem, ToolStats};
pub use project::{ProjectInfo, SessionInfo};
pub use search::{SearchMatch, SearchResult};
pub use session::{Message, Role, Session, SessionMetadata, TokenUsage};
