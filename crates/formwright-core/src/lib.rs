//! Form-building logic for Formwright.
//!
//! Schema extraction, form rendering, the conversation session controller and
//! the gateway/provider traits that `formwright-infra` implements. No network
//! or filesystem I/O lives here.

pub mod backend;
pub mod chat;
pub mod gateway;
pub mod llm;
pub mod render;
pub mod schema;
