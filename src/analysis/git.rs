use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::models::{ContentBlock, GitCommit, Session};

/// `git commit` summary line: `[<branch> <hash>] <message>`.
pub static COMMIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[[\w\-/]+\s+([a-f0-9]{7,})\]\s+(.+)").expect("commit pattern is valid")
});

/// A GitHub remote in SSH (`github.com:owner/repo`) or HTTPS (`github.com/owner/repo`) form.
pub static GITHUB_REPO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[:/]([^/\s]+/[^/\s]+?)(?:\.git)?(?:\s|$)")
        .expect("github pattern is valid")
});

/// Every `tool_result` text in message order, paired with its message timestamp.
fn tool_outputs(session: &Session) -> impl Iterator<Item = (Option<DateTime<Utc>>, String)> + '_ {
    session.messages.iter().flat_map(|message| {
        message.content.iter().filter_map(move |block| match block {
            ContentBlock::ToolResult { content, .. } => Some((message.timestamp, content.text())),
            _ => None,
        })
    })
}

/// Parses one line of tool output as a commit summary.
pub fn parse_commit_line(line: &str) -> Option<(String, String)> {
    let captures = COMMIT_PATTERN.captures(line)?;
    Some((captures[1].to_string(), captures[2].trim_end().to_string()))
}

/// Collects commit summaries from tool output, one per matching line.
pub fn extract_commits(session: &Session) -> Vec<GitCommit> {
    tool_outputs(session)
        .flat_map(|(timestamp, text)| {
            text.lines()
                .filter_map(parse_commit_line)
                .map(|(hash, message)| GitCommit { hash, message, timestamp })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Canonical `https://github.com/<owner>/<repo>` for the first remote in `text`.
pub fn parse_github_repo(text: &str) -> Option<String> {
    let captures = GITHUB_REPO_PATTERN.captures(text)?;
    let repo = captures[1].trim_end_matches(".git");
    Some(format!("https://github.com/{}", repo))
}

/// First GitHub remote mentioned in tool output, if any.
pub fn detect_github_repo(session: &Session) -> Option<String> {
    tool_outputs(session).find_map(|(_, text)| parse_github_repo(&text))
}
