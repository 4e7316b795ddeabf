//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_mtime};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a fake home directory containing `.claude/projects`
pub struct HomeBuilder {
    temp_dir: TempDir,
}

impl HomeBuilder {
    /// Create a new home with an empty projects directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join(".claude").join("projects"))
            .expect("Failed to create projects dir");
        Self { temp_dir }
    }

    /// Get the path to the home directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to `.claude/projects`
    pub fn projects_dir(&self) -> PathBuf {
        projects_dir(self.temp_dir.path())
    }

    /// Add a session file under the given project directory name
    pub fn with_session(self, project: &str, session: SessionFileBuilder) -> Self {
        let project_dir = self.projects_dir().join(project);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");
        session.create_in(&project_dir);
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for HomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// `.claude/projects` under a home directory
pub fn projects_dir(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}

/// Builder for JSONL session files
pub struct SessionFileBuilder {
    filename: String,
    entries: Vec<EntryBuilder>,
    mtime: Option<i64>,
}

impl SessionFileBuilder {
    /// Create a new session file with the given filename
    pub fn new(filename: &str) -> Self {
        Self { filename: filename.to_string(), entries: Vec::new(), mtime: None }
    }

    /// Add an entry
    pub fn with_entry(mut self, entry: EntryBuilder) -> Self {
        self.entries.push(entry);
        self
    }

    /// Set the file modification time (seconds since the Unix epoch)
    pub fn mtime(mut self, secs: i64) -> Self {
        self.mtime = Some(secs);
        self
    }

    /// Render as JSONL
    pub fn to_jsonl(&self) -> String {
        self.entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n")
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) -> PathBuf {
        let path = dir.join(&self.filename);
        fs::write(&path, self.to_jsonl()).expect("Failed to write session file");
        if let Some(secs) = self.mtime {
            set_file_mtime(&path, FileTime::from_unix_time(secs, 0)).expect("Failed to set mtime");
        }
        path
    }
}

/// Builder for nested-dialect session entries
pub struct EntryBuilder {
    entry_type: String,
    role: String,
    content: Value,
    timestamp: Option<String>,
    cwd: Option<String>,
    git_branch: Option<String>,
    version: Option<String>,
    model: Option<String>,
    usage: Option<Value>,
}

impl EntryBuilder {
    fn with_role(role: &str, text: &str) -> Self {
        Self {
            entry_type: role.to_string(),
            role: role.to_string(),
            content: json!(text),
            timestamp: None,
            cwd: None,
            git_branch: None,
            version: None,
            model: None,
            usage: None,
        }
    }

    /// Create a new user message
    pub fn user(text: &str) -> Self {
        Self::with_role("user", text)
    }

    /// Create a new assistant message
    pub fn assistant(text: &str) -> Self {
        Self::with_role("assistant", text)
    }

    /// Replace the content with an array of blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    /// Set the RFC3339 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    pub fn git_branch(mut self, branch: &str) -> Self {
        self.git_branch = Some(branch.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn model(mut self, model: &str) -> Self {
        self.model = Some(model.to_string());
        self
    }

    pub fn usage(mut self, input_tokens: u64, output_tokens: u64) -> Self {
        self.usage = Some(json!({"input_tokens": input_tokens, "output_tokens": output_tokens}));
        self
    }

    /// Convert to a JSON line
    pub fn to_json(&self) -> String {
        let mut message = json!({"role": self.role, "content": self.content});
        if let Some(model) = &self.model {
            message["model"] = json!(model);
        }
        if let Some(usage) = &self.usage {
            message["usage"] = usage.clone();
        }

        let mut entry = json!({"type": self.entry_type, "message": message});
        let optional = [
            ("timestamp", &self.timestamp),
            ("cwd", &self.cwd),
            ("gitBranch", &self.git_branch),
            ("version", &self.version),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                entry[key] = json!(value);
            }
        }
        entry.to_string()
    }
}

/// A `text` content block
pub fn text_block(text: &str) -> Value {
    json!({"type": "text", "text": text})
}

/// A `thinking` content block
pub fn thinking_block(text: &str) -> Value {
    json!({"type": "thinking", "thinking": text})
}

/// A `tool_use` content block
pub fn tool_use_block(id: &str, name: &str, input: Value) -> Value {
    json!({"type": "tool_use", "id": id, "name": name, "input": input})
}

/// A `tool_result` content block with arbitrary content
pub fn tool_result_block(tool_use_id: &str, content: Value) -> Value {
    json!({"type": "tool_result", "tool_use_id": tool_use_id, "content": content, "is_error": false})
}

/// A session with two prompts, a commit and a GitHub remote in tool output
pub fn commit_session(filename: &str) -> SessionFileBuilder {
    SessionFileBuilder::new(filename)
        .with_entry(
            EntryBuilder::user("Set up the repository")
                .timestamp("2025-03-01T10:00:00Z")
                .cwd("/home/dev/code/widgets")
                .git_branch("main")
                .version("1.0.40"),
        )
        .with_entry(
            EntryBuilder::assistant("")
                .blocks(vec![
                    text_block("Checking the remote."),
                    tool_use_block("t1", "Bash", json!({"command": "git remote -v"})),
                ])
                .timestamp("2025-03-01T10:00:05Z")
                .model("claude-sonnet")
                .usage(100, 20),
        )
        .with_entry(
            EntryBuilder::user("")
                .blocks(vec![tool_result_block(
                    "t1",
                    json!("origin\tgit@github.com:acme/widgets.git (fetch)"),
                )])
                .timestamp("2025-03-01T10:00:06Z")
                .cwd("/elsewhere"),
        )
        .with_entry(
            EntryBuilder::assistant("")
                .blocks(vec![tool_use_block("t2", "Bash", json!({"command": "git commit"}))])
                .timestamp("2025-03-01T10:01:00Z")
                .model("claude-sonnet")
                .usage(50, 10),
        )
        .with_entry(
            EntryBuilder::user("")
                .blocks(vec![tool_result_block(
                    "t2",
                    json!([{"type": "text", "text": "[main 9fceb02] Add widget parser\n 1 file changed"}]),
                )])
                .timestamp("2025-03-01T10:01:02Z"),
        )
        .with_entry(
            EntryBuilder::user("Now write the tests").timestamp("2025-03-01T10:05:00Z"),
        )
        .with_entry(
            EntryBuilder::assistant("")
                .blocks(vec![
                    tool_use_block("t3", "Write", json!({"file_path": "tests/a.rs", "content": "x"})),
                    tool_use_block("t4", "Read", json!({"file_path": "src/lib.rs"})),
                ])
                .timestamp("2025-03-01T10:06:00Z")
                .model("claude-opus"),
        )
}
