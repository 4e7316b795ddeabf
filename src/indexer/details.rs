use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rayon::prelude::*;

use crate::analysis::CONTINUATION_PREFIX;
use crate::models::{Session, SessionInfo};
use crate::parsers::parse_session_file;
use crate::utils::{collapse_whitespace, truncate_chars};

/// Summaries longer than this are cut and suffixed with `...`.
pub const SUMMARY_MAX_CHARS: usize = 80;

/// Listing details parsed out of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDetails {
    /// First meaningful user prompt, whitespace-collapsed.
    pub summary: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub user_message_count: usize,
}

/// True for user turns that make a useless summary: warmups, command echoes and
/// compaction resumes.
pub fn is_boring_message(text: &str) -> bool {
    text.eq_ignore_ascii_case("warmup")
        || text.starts_with("<local-command-caveat>")
        || text.starts_with(CONTINUATION_PREFIX)
        || text.starts_with("<command-name>")
}

pub fn session_details(session: &Session) -> SessionDetails {
    let mut details = SessionDetails { message_count: session.len(), ..Default::default() };

    for message in &session.messages {
        if let Some(ts) = message.timestamp {
            details.start_time.get_or_insert(ts);
            details.end_time = Some(ts);
        }
        if !message.is_user() {
            continue;
        }
        details.user_message_count += 1;

        if details.summary.is_none() {
            let text = message.text();
            if !text.is_empty() && !is_boring_message(&text) {
                details.summary =
                    Some(truncate_chars(&collapse_whitespace(&text), SUMMARY_MAX_CHARS));
            }
        }
    }

    details
}

pub fn load_session_details(path: &Path) -> Result<SessionDetails> {
    let session = parse_session_file(path)
        .with_context(|| format!("Failed to load session details: {}", path.display()))?;
    Ok(session_details(&session))
}

/// Fills in details for every session in parallel, then orders by last activity.
///
/// Sessions that fail to parse keep their bare file metadata. Ordering is newest first by
/// last message time, falling back to file modification time.
pub fn load_session_summaries(sessions: Vec<SessionInfo>) -> Vec<SessionInfo> {
    let mut sessions: Vec<SessionInfo> = sessions
        .into_par_iter()
        .map(|mut info| {
            match load_session_details(&info.path) {
                Ok(details) => {
                    info.summary = details.summary;
                    info.start_time = details.start_time;
                    info.end_time = details.end_time;
                    info.message_count = details.message_count;
                    info.user_message_count = details.user_message_count;
                }
                Err(e) => log::warn!("{:#}", e),
            }
            info
        })
        .collect();

    sessions.sort_by_key(|info| std::cmp::Reverse(info.last_active()));
    sessions
}
