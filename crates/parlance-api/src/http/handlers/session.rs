//! Database-chat session endpoints.
//!
//! POST /api/v1/session/connect    -- bootstrap and connect a named database
//! POST /api/v1/session/chat       -- one chat exchange
//! GET  /api/v1/session/transcript -- the ordered conversation turns
//! POST /api/v1/session/clear      -- reset the transcript

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parlance_core::chat::PROMPT_TO_CONNECT;
use parlance_types::chat::Turn;
use parlance_types::error::SessionError;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the connect endpoint.
#[derive(Debug, Deserialize)]
pub struct ConnectRequest {
    /// Name of the database to bootstrap and connect.
    pub database: String,
}

/// Connection status for display.
#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub status: String,
}

/// POST /api/v1/session/connect
pub async fn connect(
    State(state): State<AppState>,
    Json(body): Json<ConnectRequest>,
) -> Result<ApiResponse<ConnectResponse>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.database.trim().is_empty() {
        return Err(AppError::Validation(
            "database name must not be empty".to_string(),
        ));
    }

    let mut session = state.session.lock().await;
    let status = session.connect(body.database.trim()).await?;

    Ok(ApiResponse::success(
        ConnectResponse {
            status: status.to_string(),
        },
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message.
    pub message: String,
}

/// One chat reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/session/chat
///
/// While Disconnected, replies with the fixed prompt-to-connect message as a
/// normal response; no provider is ever called on that path.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<ApiResponse<ChatResponse>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let mut session = state.session.lock().await;
    let reply = match session.chat(&body.message).await {
        Ok(reply) => reply,
        Err(SessionError::NotConnected) => PROMPT_TO_CONNECT.to_string(),
        Err(err) => return Err(err.into()),
    };

    Ok(ApiResponse::success(
        ChatResponse { reply },
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}

/// The full transcript.
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub connected: bool,
    pub turns: Vec<Turn>,
}

/// GET /api/v1/session/transcript
pub async fn transcript(State(state): State<AppState>) -> ApiResponse<TranscriptResponse> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let session = state.session.lock().await;
    let response = TranscriptResponse {
        connected: session.is_connected(),
        turns: session.transcript().turns().to_vec(),
    };

    ApiResponse::success(response, request_id, started.elapsed().as_millis() as u64)
}

/// Clear confirmation.
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub status: String,
}

/// POST /api/v1/session/clear
///
/// Resets the one owned transcript, which is also the formatter's
/// conversation history; there is no separate display-only state to drift.
pub async fn clear(State(state): State<AppState>) -> ApiResponse<ClearResponse> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    let mut session = state.session.lock().await;
    session.clear();

    ApiResponse::success(
        ClearResponse {
            status: "Transcript cleared.".to_string(),
        },
        request_id,
        started.elapsed().as_millis() as u64,
    )
}
