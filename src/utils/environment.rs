use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the Claude directory path (~/.claude)
///
/// Uses `HOME` when set, otherwise the platform home directory.
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = env::var_os("HOME")
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("Could not determine home directory (HOME not set)")?;
    Ok(home.join(".claude"))
}

/// Directory holding one subdirectory of session files per project.
///
/// `override_dir` (from `--projects-dir` / `CLAUDE_PROJECTS_DIR`) wins over `~/.claude/projects`.
pub fn get_projects_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => Ok(get_claude_dir()?.join("projects")),
    }
}
