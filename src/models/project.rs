use std::path::PathBuf;
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A session file found on disk, optionally enriched with parsed details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub path: PathBuf,
    /// Directory name under the projects dir; empty for files at its top level.
    pub project_name: String,
    /// File stem of the session file.
    pub session_id: String,
    pub modified: SystemTime,
    pub size: u64,
    pub summary: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub message_count: usize,
    pub user_message_count: usize,
}

impl SessionInfo {
    pub fn new(path: PathBuf, project_name: String, modified: SystemTime, size: u64) -> Self {
        let session_id =
            path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
        Self {
            path,
            project_name,
            session_id,
            modified,
            size,
            summary: None,
            start_time: None,
            end_time: None,
            message_count: 0,
            user_message_count: 0,
        }
    }

    /// Last activity: the final message timestamp, or the file mtime when unknown.
    pub fn last_active(&self) -> DateTime<Utc> {
        self.end_time.unwrap_or_else(|| DateTime::<Utc>::from(self.modified))
    }
}

/// Sessions sharing one project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub name: String,
    pub project_dir: PathBuf,
    /// Newest first.
    pub sessions: Vec<SessionInfo>,
    /// Modification time of the most recent session.
    pub modified: SystemTime,
}
