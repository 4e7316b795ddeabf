use crate::models::{Conversation, Session};

/// Opening of the synthetic user turn that resumes a compacted session.
pub const CONTINUATION_PREFIX: &str = "This session is being continued";

/// Group messages into conversations, each anchored at a user message.
///
/// Every user message opens a conversation; the non-user messages that follow belong to it.
/// Messages before the first user message belong to no conversation and are dropped.
pub fn group_conversations(session: &Session) -> Vec<Conversation<'_>> {
    let mut conversations = Vec::new();
    let mut current: Option<Conversation<'_>> = None;

    for message in &session.messages {
        if message.is_user() {
            if let Some(done) = current.take() {
                conversations.push(done);
            }
            let user_text = message.text();
            current = Some(Conversation {
                is_continuation: user_text.starts_with(CONTINUATION_PREFIX),
                user_text,
                timestamp: message.timestamp,
                messages: vec![message],
            });
        } else if let Some(open) = current.as_mut() {
            open.messages.push(message);
        }
    }

    conversations.extend(current);
    conversations
}

/// Text of the first user message that has any.
pub fn first_user_message(session: &Session) -> Option<String> {
    session
        .messages
        .iter()
        .filter(|message| message.is_user())
        .map(|message| message.text())
        .find(|text| !text.is_empty())
}
