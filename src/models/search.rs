use serde::Serialize;

use super::project::SessionInfo;
use super::session::Role;

/// A snippet of one message that contains the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchMatch {
    pub snippet: String,
    /// Role of the matching message.
    pub role: Role,
}

/// Every match found in one session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub session: SessionInfo,
    /// In message order; one per matching message.
    pub matches: Vec<SearchMatch>,
}
