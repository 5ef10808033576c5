use thiserror::Error;

use crate::llm::LlmError;
use crate::routing::ModelLabel;

/// Errors from bootstrapping a sample database.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("invalid database name: '{0}'")]
    InvalidName(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Errors from sample-store tool operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown table: '{0}'")]
    UnknownTable(String),

    #[error("only SELECT statements are allowed: {0}")]
    ReadOnly(String),

    #[error("query error: {0}")]
    Query(String),
}

/// Errors from the bounded SQL agent loop.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("agent stopped without an answer after {max} steps")]
    StepLimit { max: usize },

    #[error("malformed agent action: {0}")]
    MalformedAction(String),

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Errors from dispatching a routed query to a generation backend.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Defensive branch: the label has no configured provider. Unreachable
    /// when every label in [`ModelLabel::ALL`] is wired at startup.
    #[error("no provider configured for model label '{0}'")]
    ModelUnavailable(ModelLabel),

    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Errors from the chat session orchestrator.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not connected to a database")]
    NotConnected,

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error("formatter error: {0}")]
    Formatter(LlmError),
}
