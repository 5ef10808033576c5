//! The agent's JSON action protocol.
//!
//! The model answers each step with a single JSON object choosing one tool
//! or a final answer. Parsing is tolerant of surrounding prose and markdown
//! code fences (models wrap JSON in both), but the object itself must be
//! well-formed.

use serde::Deserialize;

use parlance_types::error::AgentError;

/// One step of the agent: a tool invocation or the final answer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AgentAction {
    ListTables,
    DescribeTable { table: String },
    RunQuery { sql: String },
    FinalAnswer { answer: String },
}

/// Parse a model response into an [`AgentAction`].
///
/// Extracts the outermost `{...}` span so responses like
/// ```` ```json\n{"action": "list_tables"}\n``` ```` still parse.
pub fn parse_action(raw: &str) -> Result<AgentAction, AgentError> {
    let start = raw
        .find('{')
        .ok_or_else(|| AgentError::MalformedAction(preview(raw)))?;
    let end = raw
        .rfind('}')
        .ok_or_else(|| AgentError::MalformedAction(preview(raw)))?;
    if end < start {
        return Err(AgentError::MalformedAction(preview(raw)));
    }

    serde_json::from_str(&raw[start..=end])
        .map_err(|e| AgentError::MalformedAction(format!("{e}: {}", preview(raw))))
}

/// Truncated copy of the offending response for error messages.
fn preview(raw: &str) -> String {
    const MAX: usize = 120;
    let trimmed = raw.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let cut = trimmed
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}...", &trimmed[..cut])
    }
}
