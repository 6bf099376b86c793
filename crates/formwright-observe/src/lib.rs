//! Observability setup for Formwright.

pub mod tracing_setup;
