use serde::Deserialize;
use serde::de::IgnoredAny;

/// How a session buffer is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFormat {
    /// Nothing but whitespace.
    Empty,
    /// One JSON document: `{"messages": [...]}` or a bare array of messages.
    Json,
    /// One JSON entry per line.
    Jsonl,
}

#[derive(Deserialize)]
struct MessagesProbe {
    #[serde(default)]
    messages: Option<IgnoredAny>,
}

/// Classifies raw session bytes.
///
/// The `messages` probe runs before line counting so a pretty-printed session object,
/// whose nested objects also start lines with `{`, is never taken for JSONL.
pub fn detect_format(data: &[u8]) -> SessionFormat {
    let data = data.trim_ascii();
    match data.first() {
        None => return SessionFormat::Empty,
        Some(b'[') => return SessionFormat::Json,
        Some(b'{') if has_messages_key(data) => return SessionFormat::Json,
        _ => {}
    }

    let object_lines = data
        .split(|&b| b == b'\n')
        .filter(|line| line.trim_ascii().first() == Some(&b'{'))
        .count();

    if object_lines > 1 { SessionFormat::Jsonl } else { SessionFormat::Json }
}

fn has_messages_key(data: &[u8]) -> bool {
    serde_json::from_slice::<MessagesProbe>(data)
        .map(|probe| probe.messages.is_some())
        .unwrap_or(false)
}
