//! Form-builder backend: turns a gateway request into an LLM completion.
//!
//! This is the server side of the assistant gateway. The HTTP surface lives
//! in `formwright-api`; provider implementations live in `formwright-infra`.

pub mod prompt;
pub mod service;

pub use service::{CompletionSettings, FormBuilderService, RespondError};
