use std::collections::HashMap;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Result, bail};
use walkdir::WalkDir;

use crate::models::{ProjectInfo, SessionInfo};
use crate::parsers::is_jsonl_path;

/// Finds every session file under the projects directory, newest first.
///
/// Walks `projects_dir` recursively for `.jsonl` files. The project name is the first
/// directory below `projects_dir`; files at its top level get an empty project name.
/// Symlinks are not followed, and entries that cannot be read are skipped.
///
/// Returns an empty Vec if `projects_dir` doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if `projects_dir` exists but is not a directory.
pub fn find_sessions(projects_dir: &Path, limit: Option<usize>) -> Result<Vec<SessionInfo>> {
    if !projects_dir.exists() {
        log::debug!("Projects directory {} does not exist", projects_dir.display());
        return Ok(Vec::new());
    }
    if !projects_dir.is_dir() {
        bail!("Projects path is not a directory: {}", projects_dir.display());
    }

    let mut sessions = Vec::new();
    for entry in WalkDir::new(projects_dir).min_depth(1) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable entry under {}: {}", projects_dir.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() || !is_jsonl_path(entry.path()) {
            continue;
        }
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                log::debug!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let project_name = entry
            .path()
            .strip_prefix(projects_dir)
            .ok()
            .filter(|rel| rel.components().count() > 1)
            .and_then(|rel| rel.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default();

        sessions.push(SessionInfo::new(
            entry.into_path(),
            project_name,
            metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            metadata.len(),
        ));
    }

    sessions.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.path.cmp(&b.path)));
    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    Ok(sessions)
}

/// Groups every session under the projects directory by project.
///
/// Sessions within a project are newest first; projects are ordered by their most recent
/// session.
pub fn find_projects(projects_dir: &Path) -> Result<Vec<ProjectInfo>> {
    let mut by_name: HashMap<String, ProjectInfo> = HashMap::new();

    // Already newest first, so each project's sessions stay in that order.
    for session in find_sessions(projects_dir, None)? {
        let project = by_name.entry(session.project_name.clone()).or_insert_with(|| ProjectInfo {
            name: session.project_name.clone(),
            project_dir: projects_dir.join(&session.project_name),
            sessions: Vec::new(),
            modified: session.modified,
        });
        project.modified = project.modified.max(session.modified);
        project.sessions.push(session);
    }

    let mut projects: Vec<ProjectInfo> = by_name.into_values().collect();
    projects.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));
    Ok(projects)
}
