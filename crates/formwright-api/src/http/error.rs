//! Application error type mapping to HTTP status codes and the gateway
//! failure shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use formwright_core::backend::RespondError;
use formwright_types::gateway::GatewayReply;

/// Returned when the request carries no usable `message`.
pub const MESSAGE_REQUIRED: &str = "Message is required";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bad request body (400).
    Validation(String),
    /// Provider or other server-side failure (500).
    Internal(String),
}

impl From<RespondError> for AppError {
    fn from(e: RespondError) -> Self {
        match e {
            RespondError::MissingMessage => AppError::Validation(MESSAGE_REQUIRED.to_string()),
            RespondError::Llm(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => {
                tracing::warn!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(GatewayReply::failure(message))).into_response()
    }
}
