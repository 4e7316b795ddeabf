use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::{Map, Value};

use super::deserializers::{parse_content, parse_timestamp, parse_usage};
use super::format::{SessionFormat, detect_format};
use crate::error::SessionError;
use crate::models::{Message, Role, Session};

type Entry = Map<String, Value>;

/// Decodes one entry in a specific dialect, or declines with `None`.
type DialectDecoder = fn(&Entry) -> Option<Message>;

/// Tried in order; the first decoder that accepts an entry wins.
const DIALECTS: &[DialectDecoder] = &[decode_nested, decode_flat];

/// Entry `type` values that denote a conversation message.
const MESSAGE_ENTRY_TYPES: &[&str] = &["message", "user", "assistant"];

/// Parse a session file (JSON or JSONL).
pub fn parse_session_file(path: &Path) -> Result<Session, SessionError> {
    let data = fs::read(path)
        .map_err(|source| SessionError::Unreadable { path: path.to_path_buf(), source })?;
    let session = parse_session(&data)?;
    log::debug!("Parsed {}: {} messages", path.display(), session.len());
    Ok(session)
}

/// Parse session data read to the end from `reader`.
pub fn parse_session_reader<R: Read>(mut reader: R) -> Result<Session, SessionError> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(SessionError::Read)?;
    parse_session(&data)
}

/// Parse session data from bytes.
///
/// Empty input is an empty session, not an error. Malformed JSONL lines, odd timestamps and
/// unknown content blocks are recovered silently; only input that is neither a JSON session
/// nor JSONL fails.
pub fn parse_session(data: &[u8]) -> Result<Session, SessionError> {
    let messages = match detect_format(data) {
        SessionFormat::Empty => Vec::new(),
        SessionFormat::Json => parse_json(data.trim_ascii())?,
        SessionFormat::Jsonl => parse_jsonl(data),
    };
    Ok(Session::new(messages))
}

/// True when the path has a `.jsonl` extension (any case).
pub fn is_jsonl_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("jsonl"))
}

fn parse_json(data: &[u8]) -> Result<Vec<Message>, SessionError> {
    let document: Value = serde_json::from_slice(data).map_err(SessionError::Undecodable)?;

    let entries = match &document {
        Value::Object(object) => match object.get("messages") {
            Some(Value::Array(entries)) => entries.as_slice(),
            Some(_) => return Ok(Vec::new()),
            // A lone message object: decode it the way a one-line JSONL file would be.
            None => return Ok(decode_jsonl_entry(object).into_iter().collect()),
        },
        Value::Array(entries) => entries.as_slice(),
        _ => return Ok(Vec::new()),
    };

    Ok(entries.iter().filter_map(Value::as_object).filter_map(decode_entry).collect())
}

fn parse_jsonl(data: &[u8]) -> Vec<Message> {
    let mut messages = Vec::new();
    let mut skipped = 0usize;

    for (line_num, line) in data.split(|&b| b == b'\n').enumerate() {
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<Value>(line) {
            Ok(Value::Object(entry)) => {
                if let Some(message) = decode_jsonl_entry(&entry) {
                    messages.push(message);
                }
            }
            Ok(_) => {
                log::debug!("Skipping line {}: not a JSON object", line_num + 1);
                skipped += 1;
            }
            Err(e) => {
                log::debug!("Skipping line {}: {}", line_num + 1, e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::debug!("Decoded {} messages ({} malformed lines skipped)", messages.len(), skipped);
    }

    messages
}

/// Applies the entry-type filter, then decodes. Bookkeeping entries (`summary`, `system`,
/// `file-history-snapshot`, ...) yield `None`.
fn decode_jsonl_entry(entry: &Entry) -> Option<Message> {
    let is_message = match entry.get("type") {
        None | Some(Value::Null) => true,
        Some(Value::String(t)) => t.is_empty() || MESSAGE_ENTRY_TYPES.contains(&t.as_str()),
        Some(_) => false,
    };
    if is_message { decode_entry(entry) } else { None }
}

fn decode_entry(entry: &Entry) -> Option<Message> {
    DIALECTS.iter().find_map(|decode| decode(entry))
}

/// Nested dialect: session metadata on the entry, the message itself under `message`.
fn decode_nested(entry: &Entry) -> Option<Message> {
    let nested = entry.get("message")?.as_object()?;
    Some(Message {
        role: role_of(nested),
        timestamp: parse_timestamp(entry.get("timestamp")),
        content: parse_content(nested.get("content")),
        cwd: str_field(entry, "cwd"),
        git_branch: str_field(entry, "gitBranch"),
        version: str_field(entry, "version"),
        model: str_field(nested, "model"),
        usage: parse_usage(nested.get("usage")),
    })
}

/// Flat dialect: everything at the top level. Accepts any object.
fn decode_flat(entry: &Entry) -> Option<Message> {
    Some(Message {
        role: role_of(entry),
        timestamp: parse_timestamp(entry.get("timestamp")),
        content: parse_content(entry.get("content")),
        cwd: str_field(entry, "cwd"),
        git_branch: str_field(entry, "gitBranch"),
        version: str_field(entry, "version"),
        model: str_field(entry, "model"),
        usage: parse_usage(entry.get("usage")),
    })
}

fn role_of(object: &Entry) -> Role {
    object.get("role").and_then(Value::as_str).map(Role::from_raw).unwrap_or_default()
}

fn str_field(object: &Entry, key: &str) -> Option<String> {
    object.get(key).and_then(Value::as_str).filter(|s| !s.is_empty()).map(str::to_string)
}
