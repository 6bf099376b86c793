//! HTTP layer for the form-builder gateway.
//!
//! Axum routes `/chat`, `/preview` and `/health` with CORS and request
//! tracing. Replies use the gateway wire shape
//! `{ "success": ..., "response" | "error": ... }`.

pub mod error;
pub mod handlers;
pub mod router;
