//! Session discovery and indexing.
//!
//! # Error Handling Strategy
//!
//! The indexer degrades gracefully across many files:
//!
//! - **Missing projects directory**: treated as "no sessions", not an error.
//!
//! - **Per-file failures**: unreadable entries during discovery are skipped at debug level;
//!   sessions that fail to parse while loading summaries keep their file metadata and are
//!   logged as warnings.
//!
//! - **Single-session index**: [`build_session_index`] reports
//!   [`SessionError::NoConversations`](crate::error::SessionError::NoConversations) for a
//!   session without user turns so batch callers can skip it quietly.

pub mod builder;
pub mod details;
pub mod discovery;

pub use builder::{PROMPTS_PER_PAGE, SessionIndex, build_session_index, page_count, paginate};
pub use details::{
    SessionDetails, is_boring_message, load_session_details, load_session_summaries,
    session_details,
};
pub use discovery::{find_projects, find_sessions};
