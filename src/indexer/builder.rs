//! Chronological index of one session.
//!
//! The index is what a renderer needs for the landing page of a session export: one
//! prompt entry per conversation (with its page and anchor), one commit entry per
//! `git commit` seen in tool output, ordered by time, plus session totals.

use serde::Serialize;

use crate::analysis::{
    analyze_conversation, detect_github_repo, extract_commits, extract_metadata,
    group_conversations,
};
use crate::error::SessionError;
use crate::models::{IndexItem, Session, SessionMetadata};
use crate::utils::truncate_chars;

/// Conversations rendered per page.
pub const PROMPTS_PER_PAGE: usize = 5;

/// Prompt text in the index is cut to this many characters.
pub const INDEX_PROMPT_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionIndex {
    pub total_prompts: usize,
    /// Messages inside conversations; messages before the first prompt are not counted.
    pub total_messages: usize,
    pub total_tool_calls: usize,
    pub total_commits: usize,
    pub total_pages: usize,
    /// Repository that commit entries link to.
    pub repo_url: Option<String>,
    pub metadata: SessionMetadata,
    /// Sorted by timestamp ascending; entries without one come first.
    pub items: Vec<IndexItem>,
}

/// Number of pages needed for `count` conversations.
pub fn page_count(count: usize) -> usize {
    count.div_ceil(PROMPTS_PER_PAGE)
}

/// Splits items into pages, yielding 1-based page numbers.
pub fn paginate<T>(items: &[T]) -> impl Iterator<Item = (usize, &[T])> {
    items.chunks(PROMPTS_PER_PAGE).enumerate().map(|(i, page)| (i + 1, page))
}

/// Anchor id of the `index`-th conversation (0-based, across all pages).
pub fn message_anchor(index: usize) -> String {
    format!("msg-{}", index)
}

/// Builds the chronological index for a session.
///
/// `repo_url` overrides repository detection; otherwise the first GitHub remote in the
/// session's tool output is used, and commit entries carry no link when there is none.
///
/// # Errors
///
/// Returns [`SessionError::NoConversations`] when the session has no user message.
///
/// # Examples
///
/// ```
/// use claude_session_export::indexer::build_session_index;
/// use claude_session_export::parsers::parse_session;
///
/// let data = br#"{"messages": [{"role": "user", "content": "Hello"}, {"role": "assistant", "content": "Hi"}]}"#;
/// let session = parse_session(data)?;
/// let index = build_session_index(&session, None)?;
/// assert_eq!(index.total_prompts, 1);
/// assert_eq!(index.total_pages, 1);
/// # Ok::<(), claude_session_export::error::SessionError>(())
/// ```
pub fn build_session_index(
    session: &Session,
    repo_url: Option<&str>,
) -> Result<SessionIndex, SessionError> {
    let conversations = group_conversations(session);
    if conversations.is_empty() {
        return Err(SessionError::NoConversations);
    }

    let repo_url = repo_url.map(str::to_string).or_else(|| detect_github_repo(session));

    let mut index = SessionIndex {
        total_prompts: conversations.len(),
        total_messages: 0,
        total_tool_calls: 0,
        total_commits: 0,
        total_pages: page_count(conversations.len()),
        repo_url,
        metadata: extract_metadata(session),
        items: Vec::new(),
    };

    let mut conversation_index = 0;
    for (page_num, page) in paginate(&conversations) {
        for conversation in page {
            let analysis = analyze_conversation(conversation);
            index.total_messages += conversation.messages.len();
            index.total_tool_calls += analysis.stats.total();

            index.items.push(IndexItem::Prompt {
                timestamp: conversation.timestamp,
                text: truncate_chars(&conversation.user_text, INDEX_PROMPT_MAX_CHARS),
                page_num,
                message_id: message_anchor(conversation_index),
                stats: analysis.stats,
                long_texts: analysis.long_texts,
            });
            conversation_index += 1;
        }
    }

    let commits = extract_commits(session);
    index.total_commits = commits.len();
    index.items.extend(commits.into_iter().map(|commit| IndexItem::Commit {
        timestamp: commit.timestamp,
        hash: commit.hash,
        message: commit.message,
        repo_url: index.repo_url.clone(),
    }));

    // Stable: equal timestamps keep prompts ahead of commits, each in session order.
    index.items.sort_by_key(IndexItem::timestamp);

    Ok(index)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::models::{ContentBlock, Message, Role, ToolResultContent};

    fn at(minute: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2025, 5, 1, 12, minute, 0).unwrap())
    }

    fn user(text: &str, minute: u32) -> Message {
        Message {
            role: Role::User,
            timestamp: at(minute),
            content: vec![ContentBlock::Text { text: text.to_string() }],
            ..Default::default()
        }
    }

    fn assistant_tool(name: &str, minute: u32) -> Message {
        Message {
            role: Role::Assistant,
            timestamp: at(minute),
            content: vec![ContentBlock::ToolUse {
                id: "t".into(),
                name: name.into(),
                input: json!({}),
            }],
            ..Default::default()
        }
    }

    fn tool_output(text: &str, minute: u32) -> Message {
        Message {
            role: Role::Other,
            timestamp: at(minute),
            content: vec![ContentBlock::ToolResult {
                tool_use_id: "t".into(),
                content: ToolResultContent::Text(text.into()),
                is_error: false,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0), 0);
        assert_eq!(page_count(1), 1);
        assert_eq!(page_count(5), 1);
        assert_eq!(page_count(6), 2);
        assert_eq!(page_count(11), 3);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (0..7).collect();
        let pages: Vec<_> = paginate(&items).map(|(n, page)| (n, page.len())).collect();
        assert_eq!(pages, vec![(1, 5), (2, 2)]);
    }

    #[test]
    fn test_no_conversations() {
        let session = Session::new(vec![assistant_tool("Bash", 0)]);
        let err = build_session_index(&session, None).unwrap_err();
        assert!(err.is_no_conversations());
    }

    #[test]
    fn test_prompts_paginated_and_anchored() {
        let messages = (0..7).map(|i| user(&format!("prompt {}", i), i)).collect();
        let index = build_session_index(&Session::new(messages), None).unwrap();

        assert_eq!(index.total_prompts, 7);
        assert_eq!(index.total_pages, 2);
        let pages: Vec<_> = index
            .items
            .iter()
            .map(|item| match item {
                IndexItem::Prompt { page_num, message_id, .. } => (*page_num, message_id.clone()),
                IndexItem::Commit { .. } => panic!("unexpected commit"),
            })
            .collect();
        assert_eq!(pages[0], (1, "msg-0".to_string()));
        assert_eq!(pages[4], (1, "msg-4".to_string()));
        assert_eq!(pages[5], (2, "msg-5".to_string()));
        assert_eq!(pages[6], (2, "msg-6".to_string()));
    }

    #[test]
    fn test_commits_interleaved_by_time_with_detected_repo() {
        let session = Session::new(vec![
            user("set up remote", 0),
            tool_output("origin\tgit@github.com:acme/widgets.git (fetch)", 1),
            user("commit it", 10),
            assistant_tool("Bash", 11),
            tool_output("[main abc1234] Add widgets", 12),
            user("thanks", 20),
        ]);

        let index = build_session_index(&session, None).unwrap();
        assert_eq!(index.repo_url.as_deref(), Some("https://github.com/acme/widgets"));
        assert_eq!(index.total_commits, 1);
        assert_eq!(index.total_tool_calls, 1);
        assert_eq!(index.total_messages, 6);

        let kinds: Vec<_> = index
            .items
            .iter()
            .map(|item| match item {
                IndexItem::Prompt { text, .. } => text.clone(),
                IndexItem::Commit { hash, .. } => hash.clone(),
            })
            .collect();
        assert_eq!(kinds, vec!["set up remote", "commit it", "abc1234", "thanks"]);
        assert_eq!(
            index.items[2].commit_url().as_deref(),
            Some("https://github.com/acme/widgets/commit/abc1234")
        );
    }

    #[test]
    fn test_explicit_repo_url_wins() {
        let session = Session::new(vec![
            user("go", 0),
            tool_output("https://github.com/detected/repo\n[main 1234567] Commit", 1),
        ]);
        let index = build_session_index(&session, Some("https://github.com/given/repo")).unwrap();
        assert_eq!(index.repo_url.as_deref(), Some("https://github.com/given/repo"));
        assert_eq!(
            index.items[1].commit_url().as_deref(),
            Some("https://github.com/given/repo/commit/1234567")
        );
    }

    #[test]
    fn test_commit_without_repo_has_no_link() {
        let session = Session::new(vec![user("go", 0), tool_output("[main 1234567] Commit", 1)]);
        let index = build_session_index(&session, None).unwrap();
        assert_eq!(index.repo_url, None);
        assert_eq!(index.items[1].commit_url(), None);
    }

    #[test]
    fn test_prompt_text_truncated() {
        let long = "a".repeat(250);
        let index = build_session_index(&Session::new(vec![user(&long, 0)]), None).unwrap();
        match &index.items[0] {
            IndexItem::Prompt { text, long_texts, .. } => {
                assert_eq!(text.chars().count(), INDEX_PROMPT_MAX_CHARS + 3);
                assert!(long_texts.is_empty());
            }
            IndexItem::Commit { .. } => panic!("expected prompt"),
        }
    }

    #[test]
    fn test_index_serializes_tagged_items() {
        let index = build_session_index(&Session::new(vec![user("hi", 0)]), None).unwrap();
        let value = serde_json::to_value(&index).unwrap();
        assert_eq!(value["items"][0]["type"], "prompt");
        assert_eq!(value["items"][0]["message_id"], "msg-0");
        assert_eq!(value["total_pages"], 1);
    }
}
