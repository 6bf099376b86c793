//! Assistant gateway wire types.
//!
//! One request is sent per user submission:
//!
//! ```json
//! { "message": "Make me a contact form",
//!   "history": [ { "role": "assistant", "content": "Hello! ..." } ] }
//! ```
//!
//! and one reply comes back, either `{ "success": true, "response": "..." }`
//! or `{ "success": false, "error": "..." }`.

use serde::{Deserialize, Serialize};

use crate::chat::Turn;

/// Reason reported when a failure reply carries no `error` text.
pub const UNKNOWN_GATEWAY_ERROR: &str = "Unknown error occurred";

/// Request body for the assistant gateway.
///
/// `history` holds every turn *before* the current one; the current user
/// text travels separately in `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<Turn>,
}

/// Reply body from the assistant gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayReply {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GatewayReply {
    /// A successful reply carrying the assistant text.
    pub fn ok(response: impl Into<String>) -> Self {
        Self {
            success: true,
            response: Some(response.into()),
            error: None,
        }
    }

    /// A failure reply carrying a human-readable reason.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            response: None,
            error: Some(error.into()),
        }
    }

    /// Interpret the reply: assistant text on success, a `GatewayError` otherwise.
    ///
    /// `success: true` without a `response` is malformed; `success: false`
    /// without an `error` falls back to a generic reason.
    pub fn into_result(self) -> Result<String, GatewayError> {
        if self.success {
            self.response.ok_or_else(|| {
                GatewayError::Malformed("success reply without a response".to_string())
            })
        } else {
            Err(GatewayError::Rejected(
                self.error
                    .filter(|e| !e.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_GATEWAY_ERROR.to_string()),
            ))
        }
    }
}

/// Why a gateway call produced no assistant text.
///
/// The `Display` output is embedded in the synthesized error turn, so it is
/// phrased for the end user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The body was not a gateway reply.
    #[error("malformed gateway response: {0}")]
    Malformed(String),

    /// The gateway answered with `success: false`.
    #[error("{0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = GatewayRequest {
            message: "Make me a contact form".to_string(),
            history: vec![Turn::assistant("Hello!")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "message": "Make me a contact form",
                "history": [{"role": "assistant", "content": "Hello!"}]
            })
        );
    }

    #[test]
    fn test_request_missing_fields_default() {
        let request: GatewayRequest = serde_json::from_str("{}").unwrap();
        assert!(request.message.is_empty());
        assert!(request.history.is_empty());
    }

    #[test]
    fn test_success_reply_into_result() {
        let reply: GatewayReply =
            serde_json::from_str(r#"{"success": true, "response": "hi"}"#).unwrap();
        assert_eq!(reply.into_result().unwrap(), "hi");
    }

    #[test]
    fn test_failure_reply_carries_reason() {
        let reply: GatewayReply =
            serde_json::from_str(r#"{"success": false, "error": "quota exceeded"}"#).unwrap();
        assert_eq!(
            reply.into_result().unwrap_err(),
            GatewayError::Rejected("quota exceeded".to_string())
        );
    }

    #[test]
    fn test_failure_reply_without_reason_is_generic() {
        let reply: GatewayReply = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = reply.into_result().unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_GATEWAY_ERROR);
    }

    #[test]
    fn test_success_without_response_is_malformed() {
        let reply: GatewayReply = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(reply.into_result(), Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn test_failure_reply_serialization_omits_response() {
        let json = serde_json::to_value(GatewayReply::failure("Message is required")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Message is required"})
        );
    }

    #[test]
    fn test_status_error_display() {
        assert_eq!(GatewayError::Status(502).to_string(), "HTTP error! status: 502");
    }
}
