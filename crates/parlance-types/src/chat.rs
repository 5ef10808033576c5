//! Chat transcript types for Parlance.
//!
//! A conversation is an ordered list of [`Turn`]s held in memory for the
//! lifetime of the process. Turns are immutable once appended; there is no
//! persistence across restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export MessageRole (turns and LLM messages share the same role set).
pub use crate::llm::MessageRole;

/// One role-tagged message in a conversation transcript.
///
/// Ordering is conversation order; `created_at` records when the turn was
/// appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// Create a user turn stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant turn stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}
