use crate::utils::collapse_whitespace;

/// Characters of context kept on each side of a match.
pub const SNIPPET_CONTEXT_CHARS: usize = 60;

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Character index of the first case-insensitive occurrence of `query` in `text`.
pub fn find_case_insensitive(text: &[char], query: &str) -> Option<usize> {
    let needle: Vec<char> = query.chars().map(fold).collect();
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    text.windows(needle.len())
        .position(|window| window.iter().map(|&c| fold(c)).eq(needle.iter().copied()))
}

/// Text around the first match of `query`, with up to `context_chars` characters on
/// each side.
///
/// Whitespace is collapsed, and `...` marks each side where text was cut off. Returns
/// `None` when `query` is empty or does not occur.
pub fn extract_snippet(text: &str, query: &str, context_chars: usize) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let idx = find_case_insensitive(&chars, query)?;

    let start = idx.saturating_sub(context_chars);
    let end = (idx + query.chars().count() + context_chars).min(chars.len());

    let window: String = chars[start..end].iter().collect();
    let mut snippet = collapse_whitespace(&window);
    if start > 0 {
        snippet.insert_str(0, "...");
    }
    if end < chars.len() {
        snippet.push_str("...");
    }
    Some(snippet)
}
