//! Interactive form-building chat.
//!
//! The loop reads a line, either runs a slash command or submits it through
//! the session controller, and draws the form pane whenever the schema
//! changes.

pub mod banner;
pub mod commands;
pub mod fill;
pub mod input;
pub mod loop_runner;
