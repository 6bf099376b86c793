//! POST /chat -- one conversation step.
//!
//! Body: `{ "message": "...", "history": [ { "role", "content" }, ... ] }`.
//! Reply: `{ "success": true, "response": "..." }`, or the failure shape with
//! 400 (missing message) / 500 (provider failure).

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use formwright_types::gateway::{GatewayReply, GatewayRequest};

use crate::http::error::{AppError, MESSAGE_REQUIRED};
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<GatewayRequest>, JsonRejection>,
) -> Result<Json<GatewayReply>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected chat body");
        AppError::Validation(MESSAGE_REQUIRED.to_string())
    })?;

    tracing::info!(history_len = request.history.len(), "Chat request");
    let response = state.form_builder.respond(&request).await?;
    Ok(Json(GatewayReply::ok(response)))
}
