//! AssistantGateway trait definition.

use std::future::Future;

use formwright_types::gateway::{GatewayError, GatewayRequest};

/// Sends one conversation step to the remote assistant.
///
/// Implementations return the raw assistant text on success. Every kind of
/// failure -- transport, bad status, malformed body, explicit
/// `success: false` -- comes back as a [`GatewayError`]; nothing panics.
pub trait AssistantGateway: Send + Sync {
    /// Short name for logs (e.g. "http").
    fn name(&self) -> &str;

    fn send(
        &self,
        request: &GatewayRequest,
    ) -> impl Future<Output = Result<String, GatewayError>> + Send;
}
