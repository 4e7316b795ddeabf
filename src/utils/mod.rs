pub mod environment;
pub mod format;
pub mod text;

pub use environment::{get_claude_dir, get_projects_dir};
pub use format::{format_duration, format_project_name, format_timestamp, format_token_count};
pub use text::{collapse_whitespace, sanitize_for_terminal, truncate_chars};
