//! Assistant gateway abstraction.
//!
//! - `AssistantGateway`: RPITIT trait implemented by transports (HTTP in
//!   `formwright-infra`, scripted fakes in tests)
//! - `BoxAssistantGateway`: object-safe wrapper for runtime selection

pub mod assistant;
pub mod box_gateway;

pub use assistant::AssistantGateway;
pub use box_gateway::BoxAssistantGateway;
