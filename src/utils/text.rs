//! Text helpers for untrusted transcript content.
//!
//! # Security: Terminal Injection Prevention
//!
//! Session files are user-controlled data. Anything printed to a terminal goes through
//! [`sanitize_for_terminal`] first so embedded ANSI escape sequences cannot clear the
//! screen, move the cursor or restyle output.
//!
//! All lengths here are counted in characters, never bytes, so truncation cannot split a
//! multi-byte character.

/// Strips ANSI CSI sequences and control characters other than tab, newline and CR.
///
/// # Examples
///
/// ```
/// use claude_session_export::utils::text::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mRed text\x1b[0m"), "Red text");
/// ```
pub fn sanitize_for_terminal(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // CSI runs until its final letter
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Replaces every run of whitespace (newlines and tabs included) with one space and trims.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cuts `text` to `max_chars` characters, appending `...` only when something was cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
