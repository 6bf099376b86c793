//! BoxAssistantGateway -- object-safe dynamic dispatch wrapper.
//!
//! Same blanket-impl pattern as `BoxLlmProvider`: an object-safe twin trait
//! with boxed futures, implemented for every `AssistantGateway`.

use std::future::Future;
use std::pin::Pin;

use formwright_types::gateway::{GatewayError, GatewayRequest};

use super::assistant::AssistantGateway;

/// Object-safe version of [`AssistantGateway`].
pub trait AssistantGatewayDyn: Send + Sync {
    fn name(&self) -> &str;

    fn send_boxed<'a>(
        &'a self,
        request: &'a GatewayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>>;
}

impl<T: AssistantGateway> AssistantGatewayDyn for T {
    fn name(&self) -> &str {
        AssistantGateway::name(self)
    }

    fn send_boxed<'a>(
        &'a self,
        request: &'a GatewayRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, GatewayError>> + Send + 'a>> {
        Box::pin(self.send(request))
    }
}

/// Type-erased gateway, so the session controller's concrete type does not
/// depend on the transport picked at runtime.
pub struct BoxAssistantGateway {
    inner: Box<dyn AssistantGatewayDyn>,
}

impl BoxAssistantGateway {
    pub fn new<T: AssistantGateway + 'static>(gateway: T) -> Self {
        Self {
            inner: Box::new(gateway),
        }
    }
}

impl AssistantGateway for BoxAssistantGateway {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn send(&self, request: &GatewayRequest) -> Result<String, GatewayError> {
        self.inner.send_boxed(request).await
    }
}
