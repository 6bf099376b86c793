//! HttpAssistantGateway -- [`AssistantGateway`] over HTTP.
//!
//! Posts `{ message, history }` as JSON to the configured endpoint and reads
//! back `{ success, response | error }`.

use std::time::Duration;

use formwright_core::gateway::AssistantGateway;
use formwright_types::gateway::{GatewayError, GatewayReply, GatewayRequest};

/// Gateway client for a remote form-builder backend.
pub struct HttpAssistantGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistantGateway {
    /// Create a client for `endpoint`. Requests that take longer than
    /// `timeout` fail with [`GatewayError::Transport`].
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AssistantGateway for HttpAssistantGateway {
    fn name(&self) -> &str {
        "http"
    }

    async fn send(&self, request: &GatewayRequest) -> Result<String, GatewayError> {
        tracing::debug!(
            endpoint = %self.endpoint,
            history_len = request.history.len(),
            "Sending gateway request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status(status.as_u16()));
        }

        let reply: GatewayReply = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        reply.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwright_types::chat::Turn;
    use formwright_types::gateway::UNKNOWN_GATEWAY_ERROR;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway(server: &MockServer) -> HttpAssistantGateway {
        HttpAssistantGateway::new(format!("{}/chat", server.uri()), Duration::from_secs(5)).unwrap()
    }

    fn request() -> GatewayRequest {
        GatewayRequest {
            message: "Make me a contact form".to_string(),
            history: vec![Turn::assistant("Hello!")],
        }
    }

    #[tokio::test]
    async fn test_success_returns_response_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .and(body_json(json!({
                "message": "Make me a contact form",
                "history": [{ "role": "assistant", "content": "Hello!" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "response": "{\"title\":\"Contact\",\"fields\":[]}"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = gateway(&server).send(&request()).await.unwrap();
        assert_eq!(text, "{\"title\":\"Contact\",\"fields\":[]}");
    }

    #[tokio::test]
    async fn test_explicit_failure_carries_reason() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error": "quota exceeded"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).send(&request()).await.unwrap_err();
        assert_eq!(err, GatewayError::Rejected("quota exceeded".to_string()));
    }

    #[tokio::test]
    async fn test_failure_without_reason_uses_generic_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
            .mount(&server)
            .await;

        let err = gateway(&server).send(&request()).await.unwrap_err();
        assert_eq!(err, GatewayError::Rejected(UNKNOWN_GATEWAY_ERROR.to_string()));
    }

    #[tokio::test]
    async fn test_non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "success": false,
                "error": "boom"
            })))
            .mount(&server)
            .await;

        let err = gateway(&server).send(&request()).await.unwrap_err();
        assert_eq!(err, GatewayError::Status(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = gateway(&server).send(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let gateway =
            HttpAssistantGateway::new("http://127.0.0.1:1/chat", Duration::from_secs(2)).unwrap();
        let err = gateway.send(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_delay(Duration::from_secs(2))
                    .set_body_json(json!({ "success": true, "response": "late" })),
            )
            .mount(&server)
            .await;

        let gateway =
            HttpAssistantGateway::new(format!("{}/chat", server.uri()), Duration::from_millis(200))
                .unwrap();
        let err = gateway.send(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
