//! Views derived from a decoded [`Session`](crate::models::Session).
//!
//! Nothing here is cached: conversations, tool statistics, commits and metadata are
//! recomputed from the session each time they are needed. Scans that find nothing
//! return empty results rather than errors.

pub mod conversation;
pub mod git;
pub mod metadata;
pub mod stats;

pub use conversation::{CONTINUATION_PREFIX, first_user_message, group_conversations};
pub use git::{COMMIT_PATTERN, GITHUB_REPO_PATTERN, detect_github_repo, extract_commits};
pub use metadata::{ACTIVE_GAP_THRESHOLD, extract_metadata};
pub use stats::{ConversationAnalysis, LONG_TEXT_THRESHOLD, analyze_conversation};
