//! Whole-ledger read and replace.

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::api::AppState;
use crate::error::AppError;

/// Return the stored ledger verbatim, or `{}` when nothing is stored.
pub async fn get_data(State(state): State<AppState>) -> Result<Response, AppError> {
    let body = state
        .store
        .load(&state.config.ledger_key)
        .await?
        .unwrap_or_else(|| "{}".to_string());

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Replace the stored ledger with the request body. Last write wins.
pub async fn replace_data(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let body = payload.to_string();
    state
        .store
        .replace(&state.config.ledger_key, &body)
        .await?;

    info!(
        key = %state.config.ledger_key,
        bytes = body.len(),
        days = payload.as_object().map_or(0, |m| m.len()),
        "Ledger replaced"
    );

    Ok(Json(json!({ "success": true })))
}
