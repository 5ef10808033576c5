//! Application error type mapping to HTTP status codes and envelope format.
//!
//! Domain errors stay typed all the way to this boundary; only here do they
//! become user-visible strings, so the UI layer decides presentation.

use axum::response::{IntoResponse, Response};

use parlance_types::error::{AgentError, BootstrapError, DispatchError, SessionError};
use parlance_types::llm::LlmError;

use super::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat session errors (connect, agent, formatter).
    Session(SessionError),
    /// Routed generation errors.
    Dispatch(DispatchError),
    /// Request validation error.
    Validation(String),
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        AppError::Session(e)
    }
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        AppError::Dispatch(e)
    }
}

fn llm_error_code(err: &LlmError) -> &'static str {
    match err {
        LlmError::Timeout(_) => "TIMEOUT",
        _ => "PROVIDER_ERROR",
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Session(SessionError::NotConnected) => {
                ("NOT_CONNECTED", SessionError::NotConnected.to_string())
            }
            AppError::Session(SessionError::Bootstrap(BootstrapError::InvalidName(name))) => {
                ("VALIDATION_ERROR", format!("invalid database name: '{name}'"))
            }
            AppError::Session(SessionError::Bootstrap(err)) => {
                ("CONNECT_FAILED", format!("Failed to connect to database: {err}"))
            }
            AppError::Session(SessionError::Agent(AgentError::Provider(llm_err))) => {
                (llm_error_code(llm_err), format!("An error occurred: {llm_err}"))
            }
            AppError::Session(SessionError::Agent(err)) => {
                ("AGENT_ERROR", format!("An error occurred: {err}"))
            }
            AppError::Session(SessionError::Formatter(llm_err)) => match llm_err {
                LlmError::Timeout(_) => ("TIMEOUT", format!("An error occurred: {llm_err}")),
                _ => ("FORMATTER_ERROR", format!("An error occurred: {llm_err}")),
            },
            AppError::Dispatch(DispatchError::ModelUnavailable(label)) => (
                "MODEL_UNAVAILABLE",
                format!("no provider configured for model label '{label}'"),
            ),
            AppError::Dispatch(DispatchError::Provider(llm_err)) => {
                (llm_error_code(llm_err), llm_err.to_string())
            }
            AppError::Validation(msg) => ("VALIDATION_ERROR", msg.clone()),
        };

        ApiResponse::error(code, &message).into_response()
    }
}
