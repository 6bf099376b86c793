//! Infrastructure layer for Formwright.
//!
//! Implements the traits defined in `formwright-core` against the outside
//! world: the reqwest-backed assistant gateway, the OpenAI-compatible and
//! mock LLM providers, and `config.toml` loading.

pub mod config;
pub mod gateway;
pub mod llm;
