//! Full-text search over stored sessions.
//!
//! Matching is case-insensitive over the text blocks of every message. Each session file
//! is parsed independently and in parallel; files that fail to parse are skipped.

pub mod snippet;

use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;

pub use snippet::{SNIPPET_CONTEXT_CHARS, extract_snippet};

use crate::indexer::find_sessions;
use crate::models::{SearchMatch, SearchResult, Session, SessionInfo};
use crate::parsers::parse_session_file;

/// One snippet per message whose text contains `query`, in message order.
pub fn search_session(session: &Session, query: &str) -> Vec<SearchMatch> {
    session
        .messages
        .iter()
        .filter_map(|message| {
            extract_snippet(&message.text(), query, SNIPPET_CONTEXT_CHARS)
                .map(|snippet| SearchMatch { snippet, role: message.role })
        })
        .collect()
}

/// Searches the given session files, newest first. Sessions without matches are omitted.
pub fn search_sessions(sessions: &[SessionInfo], query: &str) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = sessions
        .par_iter()
        .filter_map(|info| {
            let session = match parse_session_file(&info.path) {
                Ok(session) => session,
                Err(e) => {
                    log::debug!("Skipping {} during search: {}", info.path.display(), e);
                    return None;
                }
            };
            let matches = search_session(&session, query);
            (!matches.is_empty()).then(|| SearchResult { session: info.clone(), matches })
        })
        .collect();

    results.sort_by(|a, b| {
        b.session
            .modified
            .cmp(&a.session.modified)
            .then_with(|| a.session.path.cmp(&b.session.path))
    });
    results
}

/// Discovers every session under `projects_dir` and searches them.
pub fn search_projects_dir(projects_dir: &Path, query: &str) -> Result<Vec<SearchResult>> {
    let sessions = find_sessions(projects_dir, None)?;
    Ok(search_sessions(&sessions, query))
}
