use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::{Session, SessionMetadata};

/// Gaps between consecutive messages longer than this count as idle.
pub const ACTIVE_GAP_THRESHOLD: Duration = Duration::from_secs(5 * 60);

/// Aggregates per-message metadata into session-wide facts.
pub fn extract_metadata(session: &Session) -> SessionMetadata {
    let mut metadata = SessionMetadata::default();
    let mut previous: Option<DateTime<Utc>> = None;

    for message in &session.messages {
        if metadata.cwd.is_none() {
            metadata.cwd.clone_from(&message.cwd);
        }
        if metadata.git_branch.is_none() {
            metadata.git_branch.clone_from(&message.git_branch);
        }
        if metadata.version.is_none() {
            metadata.version.clone_from(&message.version);
        }
        if let Some(model) = &message.model
            && !metadata.models.contains(model)
        {
            metadata.models.push(model.clone());
        }
        if let Some(usage) = &message.usage {
            // Counts come from untrusted input.
            metadata.total_input_tokens =
                metadata.total_input_tokens.saturating_add(usage.input_tokens);
            metadata.total_output_tokens =
                metadata.total_output_tokens.saturating_add(usage.output_tokens);
            metadata.total_cache_tokens = metadata
                .total_cache_tokens
                .saturating_add(usage.cache_read_tokens.saturating_add(usage.cache_write_tokens));
        }

        let Some(timestamp) = message.timestamp else { continue };
        metadata.start_time.get_or_insert(timestamp);
        metadata.end_time = Some(timestamp);

        if let Some(prev) = previous
            && let Ok(gap) = (timestamp - prev).to_std()
            && gap <= ACTIVE_GAP_THRESHOLD
        {
            metadata.active_time += gap;
        }
        previous = Some(timestamp);
    }

    metadata
}
