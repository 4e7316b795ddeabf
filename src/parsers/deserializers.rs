//! Lenient field decoders shared by both message dialects.
//!
//! None of these fail: a value of the wrong shape decodes to its "absent" form.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;

use crate::models::{ContentBlock, ImageSource, TokenUsage, ToolResultContent};

/// Parses a timestamp given as an RFC3339 string or as epoch milliseconds.
///
/// Strings without a UTC offset are read as UTC. Anything else yields `None`.
pub fn parse_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::String(s) => parse_timestamp_str(s),
        Value::Number(n) => n.as_i64().and_then(DateTime::from_timestamp_millis),
        _ => None,
    }
}

fn parse_timestamp_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok().map(|naive| naive.and_utc())
}

/// Normalizes a message `content` value into blocks.
///
/// A bare string becomes a single text block; an array is decoded block by block.
pub fn parse_content(value: Option<&Value>) -> Vec<ContentBlock> {
    match value {
        Some(Value::String(text)) => vec![ContentBlock::Text { text: text.clone() }],
        Some(Value::Array(blocks)) => blocks.iter().map(parse_block).collect(),
        _ => Vec::new(),
    }
}

/// Decodes one content block. Unrecognized or non-object blocks become [`ContentBlock::Unknown`].
pub fn parse_block(value: &Value) -> ContentBlock {
    let str_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    match value.get("type").and_then(Value::as_str) {
        Some("text") => ContentBlock::Text { text: str_field("text").unwrap_or_default() },
        Some("thinking") => ContentBlock::Thinking {
            text: str_field("thinking").or_else(|| str_field("text")).unwrap_or_default(),
        },
        Some("tool_use") => ContentBlock::ToolUse {
            id: str_field("id").unwrap_or_default(),
            name: str_field("name").unwrap_or_default(),
            input: value.get("input").cloned().unwrap_or(Value::Null),
        },
        Some("tool_result") => ContentBlock::ToolResult {
            tool_use_id: str_field("tool_use_id").unwrap_or_default(),
            content: ToolResultContent::from_value(value.get("content")),
            is_error: value.get("is_error").and_then(Value::as_bool).unwrap_or(false),
        },
        Some("image") => ContentBlock::Image {
            source: value
                .get("source")
                .and_then(|source| serde_json::from_value::<ImageSource>(source.clone()).ok()),
        },
        _ => ContentBlock::Unknown,
    }
}

/// Token usage, when present and well-formed.
pub fn parse_usage(value: Option<&Value>) -> Option<TokenUsage> {
    value.filter(|v| v.is_object()).and_then(|v| serde_json::from_value(v.clone()).ok())
}
