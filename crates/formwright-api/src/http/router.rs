//! Axum router configuration with middleware.
//!
//! Routes: `POST /chat`, `POST /preview`, `GET /health`.
//! Middleware: CORS (any origin), request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the gateway router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/chat", post(handlers::chat::chat))
        .route("/preview", post(handlers::preview::preview))
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "healthy",
        "message": "Formwright gateway is running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use formwright_core::backend::{CompletionSettings, FormBuilderService};
    use formwright_core::llm::{BoxLlmProvider, LlmProvider};
    use formwright_infra::llm::mock::MockFormProvider;
    use formwright_types::llm::{CompletionRequest, CompletionResponse, LlmError};

    struct FailingProvider;

    impl LlmProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Provider {
                message: "upstream exploded".to_string(),
            })
        }
    }

    fn router_with(provider: BoxLlmProvider) -> Router {
        build_router(AppState::new(FormBuilderService::new(
            provider,
            CompletionSettings::default(),
        )))
    }

    fn mock_router() -> Router {
        router_with(BoxLlmProvider::new(MockFormProvider::new()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = mock_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_chat_returns_schema_text() {
        let response = mock_router()
            .oneshot(post_json(
                "/chat",
                json!({
                    "message": "I need a contact form",
                    "history": [{ "role": "assistant", "content": "Hello!" }]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert!(body.get("error").is_none());

        let schema: Value = serde_json::from_str(body["response"].as_str().unwrap()).unwrap();
        assert_eq!(schema["title"], "Contact Form");
        assert_eq!(schema["fields"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_chat_without_message_is_bad_request() {
        for body in [json!({}), json!({ "message": "   " }), json!({ "history": [] })] {
            let response = mock_router().oneshot(post_json("/chat", body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert_eq!(body, json!({ "success": false, "error": "Message is required" }));
        }
    }

    #[tokio::test]
    async fn test_chat_with_unparseable_body_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let response = mock_router().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Message is required");
    }

    #[tokio::test]
    async fn test_provider_failure_is_internal_error() {
        let router = router_with(BoxLlmProvider::new(FailingProvider));
        let response = router
            .oneshot(post_json("/chat", json!({ "message": "hi" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "provider error: upstream exploded");
    }

    #[tokio::test]
    async fn test_preview_renders_schema_and_placeholder() {
        let schema_text = r#"{"title": "Signup", "fields": [{"id": "email", "label": "Email", "type": "email", "required": true}]}"#;
        let response = mock_router()
            .oneshot(
                Request::post("/preview")
                    .body(Body::from(schema_text))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<h2 class=\"form-title\">Signup</h2>"));
        assert!(html.contains("type=\"email\""));

        let response = mock_router()
            .oneshot(
                Request::post("/preview")
                    .body(Body::from("What fields do you need?"))
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("form-placeholder"));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .method("OPTIONS")
            .uri("/chat")
            .header(header::ORIGIN, "http://localhost:3000")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = mock_router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }
}
