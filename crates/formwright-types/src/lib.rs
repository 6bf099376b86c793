//! Shared domain and wire types for Formwright.
//!
//! Conversation turns, the form schema model, gateway request/reply shapes,
//! LLM completion types and configuration. No I/O lives here -- only serde
//! and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod llm;
