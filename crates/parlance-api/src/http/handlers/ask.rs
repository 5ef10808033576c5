//! The routed ask endpoint.
//!
//! POST /api/v1/ask -- route a query to one of the three generation
//! backends and return the generated text alongside the chosen label.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use parlance_types::routing::{DetectedLanguage, ModelLabel, RouteRule};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for the ask endpoint.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// The generated reply plus the routing decision that produced it.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub label: ModelLabel,
    pub rule: RouteRule,
    pub language: DetectedLanguage,
    pub model: String,
    pub text: String,
}

/// POST /api/v1/ask
pub async fn ask(
    State(state): State<AppState>,
    Json(body): Json<AskRequest>,
) -> Result<ApiResponse<AskResponse>, AppError> {
    let started = Instant::now();
    let request_id = Uuid::now_v7().to_string();

    if body.query.trim().is_empty() {
        return Err(AppError::Validation("query must not be empty".to_string()));
    }

    let decision = state.router.route(&body.query);
    let output = state.dispatcher.generate(&decision, &body.query).await?;

    Ok(ApiResponse::success(
        AskResponse {
            label: output.label,
            rule: decision.rule,
            language: decision.language,
            model: output.model,
            text: output.text,
        },
        request_id,
        started.elapsed().as_millis() as u64,
    ))
}
