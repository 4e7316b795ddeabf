use crate::models::{ContentBlock, Conversation, ToolStats};

/// Text blocks at least this many characters long are flagged for collapsing.
pub const LONG_TEXT_THRESHOLD: usize = 300;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationAnalysis {
    pub stats: ToolStats,
    /// Long text blocks, in message order.
    pub long_texts: Vec<String>,
}

/// Tally tool calls and collect long text blocks across a conversation.
pub fn analyze_conversation(conversation: &Conversation<'_>) -> ConversationAnalysis {
    let mut analysis = ConversationAnalysis::default();

    for block in conversation.messages.iter().flat_map(|message| &message.content) {
        match block {
            ContentBlock::ToolUse { name, .. } => analysis.stats.record(name),
            ContentBlock::Text { text } if text.chars().count() >= LONG_TEXT_THRESHOLD => {
                analysis.long_texts.push(text.clone());
            }
            _ => {}
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::analysis::group_conversations;
    use crate::models::{Message, Role, Session};

    fn tool_use(name: &str) -> ContentBlock {
        ContentBlock::ToolUse { id: format!("id-{}", name), name: name.to_string(), input: json!({}) }
    }

    #[test]
    fn test_analyze_counts_tools_across_messages() {
        let session = Session::new(vec![
            Message {
                role: Role::User,
                content: vec![ContentBlock::Text { text: "do things".into() }],
                ..Default::default()
            },
            Message {
                role: Role::Assistant,
                content: vec![tool_use("Bash"), tool_use("Read")],
                ..Default::default()
            },
            Message {
                role: Role::Assistant,
                content: vec![tool_use("Bash"), tool_use("Write")],
                ..Default::default()
            },
        ]);

        let conversations = group_conversations(&session);
        let analysis = analyze_conversation(&conversations[0]);
        assert_eq!(analysis.stats.bash_count, 2);
        assert_eq!(analysis.stats.read_count, 1);
        assert_eq!(analysis.stats.write_count, 1);
        assert_eq!(analysis.stats.edit_count, 0);
        assert_eq!(analysis.stats.glob_count, 0);
        assert_eq!(analysis.stats.grep_count, 0);
        assert_eq!(analysis.stats.other_count, 0);
        assert!(analysis.long_texts.is_empty());
    }

    #[test]
    fn test_long_text_threshold_is_inclusive() {
        let exactly = "x".repeat(LONG_TEXT_THRESHOLD);
        let shorter = "y".repeat(LONG_TEXT_THRESHOLD - 1);
        let session = Session::new(vec![
            Message {
                role: Role::User,
                content: vec![ContentBlock::Text { text: shorter }],
                ..Default::default()
            },
            Message {
                role: Role::Assistant,
                content: vec![
                    ContentBlock::Text { text: exactly.clone() },
                    ContentBlock::Thinking { text: "z".repeat(1000) },
                ],
                ..Default::default()
            },
        ]);

        let analysis = analyze_conversation(&group_conversations(&session)[0]);
        assert_eq!(analysis.long_texts, vec![exactly]);
    }

    #[test]
    fn test_long_text_counts_characters_not_bytes() {
        // 150 two-byte characters: 300 bytes, but only 150 characters.
        let text = "é".repeat(150);
        let session = Session::new(vec![Message {
            role: Role::User,
            content: vec![ContentBlock::Text { text }],
            ..Default::default()
        }]);
        assert!(analyze_conversation(&group_conversations(&session)[0]).long_texts.is_empty());
    }
}
