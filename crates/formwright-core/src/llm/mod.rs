//! LLM provider abstractions used by the gateway backend.
//!
//! - `LlmProvider`: RPITIT trait for concrete providers
//! - `BoxLlmProvider`: object-safe wrapper for runtime selection

pub mod box_provider;
pub mod provider;

pub use box_provider::BoxLlmProvider;
pub use provider::LlmProvider;
