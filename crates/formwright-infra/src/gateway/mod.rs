//! Assistant gateway transports.

pub mod http;

pub use http::HttpAssistantGateway;
