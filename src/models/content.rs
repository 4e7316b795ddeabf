use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One block of a message's content, normalized at decode time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    /// Model reasoning; rendered, but kept apart from plain text everywhere else.
    Thinking {
        text: String,
    },
    ToolUse {
        id: String,
        name: String,
        /// Opaque until projected with [`ToolInput::project`].
        input: Value,
    },
    ToolResult {
        tool_use_id: String,
        content: ToolResultContent,
        is_error: bool,
    },
    Image {
        source: Option<ImageSource>,
    },
    /// Any block type we do not recognize. Produces no output.
    Unknown,
}

impl ContentBlock {
    /// Text of a `text` block, `None` for every other kind.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Tool name of a `tool_use` block.
    pub fn tool_name(&self) -> Option<&str> {
        match self {
            ContentBlock::ToolUse { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Projects a `tool_use` block's input onto [`ToolInput`].
    pub fn tool_input(&self) -> Option<ToolInput> {
        match self {
            ContentBlock::ToolUse { input, .. } => Some(ToolInput::project(input)),
            _ => None,
        }
    }
}

/// The `content` of a `tool_result` block.
///
/// Sources send either a bare string or a list of `{"type": "text", "text": ...}` parts.
/// Anything else collapses to [`ToolResultContent::Empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolResultContent {
    Text(String),
    Parts(Vec<String>),
    #[default]
    Empty,
}

impl ToolResultContent {
    /// Normalizes a raw JSON `content` value.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(s)) => ToolResultContent::Text(s.clone()),
            Some(Value::Array(items)) => ToolResultContent::Parts(
                items
                    .iter()
                    .filter_map(|item| item.get("text").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect(),
            ),
            _ => ToolResultContent::Empty,
        }
    }

    /// Flattened text: strings verbatim, parts joined by newlines.
    pub fn text(&self) -> String {
        match self {
            ToolResultContent::Text(s) => s.clone(),
            ToolResultContent::Parts(parts) => parts.join("\n"),
            ToolResultContent::Empty => String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type", default)]
    pub source_type: String,
    #[serde(default)]
    pub media_type: String,
    /// Base64 payload.
    #[serde(default)]
    pub data: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TodoItem {
    pub content: String,
    pub status: String,
}

/// Best-effort view of a tool's input.
///
/// The fields cover the built-in tools (Bash, Read, Write, Edit, Glob, Grep, TodoWrite).
/// Fields a tool does not send stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolInput {
    pub command: Option<String>,
    pub description: Option<String>,
    pub file_path: Option<String>,
    pub content: Option<String>,
    pub old_string: Option<String>,
    pub new_string: Option<String>,
    pub pattern: Option<String>,
    pub path: Option<String>,
    pub todos: Vec<TodoItem>,
}

impl ToolInput {
    /// Parses raw JSON text. Fails only when the text is not valid JSON.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(raw)?;
        Ok(Self::project(&value))
    }

    /// Total projection: absent or mistyped fields default instead of failing.
    pub fn project(input: &Value) -> Self {
        let field = |key: &str| input.get(key).and_then(Value::as_str).map(str::to_string);

        let todos = input
            .get("todos")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .map(|item| TodoItem {
                        content: item
                            .get("content")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        status: item
                            .get("status")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            command: field("command"),
            description: field("description"),
            file_path: field("file_path"),
            content: field("content"),
            old_string: field("old_string"),
            new_string: field("new_string"),
            pattern: field("pattern"),
            path: field("path"),
            todos,
        }
    }
}
