//! The owned conversation transcript.
//!
//! One `Transcript` value is both what the UI lists and what the response
//! formatter reads as conversation history. `clear` is the single reset
//! operation, so the two views can never drift apart.

use parlance_types::chat::{MessageRole, Turn};

/// Ordered, in-memory conversation history. Not persisted.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user turn.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    /// Append an assistant turn.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    /// Remove every turn.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Render the transcript as role-prefixed lines for prompt assembly.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| {
                let role = match turn.role {
                    MessageRole::System => "system",
                    MessageRole::User => "user",
                    MessageRole::Assistant => "assistant",
                };
                format!("{role}: {}", turn.content)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("how many customers?");
        transcript.push_assistant("There are 2 customers.");
        transcript.push_user("which countries?");

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.turns()[0].role, MessageRole::User);
        assert_eq!(transcript.turns()[1].role, MessageRole::Assistant);
        assert_eq!(transcript.turns()[2].content, "which countries?");
    }

    #[test]
    fn clear_empties_everything() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.push_assistant("hi");
        transcript.clear();

        assert!(transcript.is_empty());
        assert_eq!(transcript.render(), "");
    }

    #[test]
    fn render_is_role_prefixed_lines() {
        let mut transcript = Transcript::new();
        transcript.push_user("how many customers?");
        transcript.push_assistant("Two.");

        assert_eq!(
            transcript.render(),
            "user: how many customers?\nassistant: Two."
        );
    }
}
