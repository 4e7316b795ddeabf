//! Decoders for exported session transcripts (JSON and JSONL).
//!
//! # Error Handling Strategy
//!
//! Parsing is tolerant of schema drift and local corruption:
//!
//! - **Individual line failures**: a JSONL line that is not a JSON object is skipped and
//!   logged at debug level. The rest of the file still decodes.
//!
//! - **Field-level drift**: unparseable timestamps, unknown content block types and
//!   unexpected `tool_result` shapes decode to their "absent" forms instead of failing.
//!
//! - **Fatal errors**: only an unreadable file or input that is neither a JSON session nor
//!   JSONL is reported, as a [`SessionError`](crate::error::SessionError).
//!
//! Two message dialects are accepted and normalized to the same [`Message`](crate::models::Message):
//! flat entries carrying `role`/`content` at the top level, and nested entries carrying
//! session metadata at the top level with the message under `message`.

pub mod deserializers;
pub mod format;
pub mod session;

pub use format::{SessionFormat, detect_format};
pub use session::{is_jsonl_path, parse_session, parse_session_file, parse_session_reader};
