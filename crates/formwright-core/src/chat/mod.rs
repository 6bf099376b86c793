//! Conversation state for a form-building session.
//!
//! - `Transcript`: append-only ordered turns
//! - `SessionController`: drives one submission at a time through the
//!   assistant gateway and keeps transcript, schema and loading flag in sync

pub mod session;
pub mod transcript;

pub use session::{SessionController, SessionSnapshot, SubmitOutcome, SubmitRejection};
pub use transcript::{GREETING, Transcript};
