//! Conversation turn types for Formwright.
//!
//! A `Turn` is one message in the form-building conversation. The ordered
//! list of turns is sent verbatim as `history` on every gateway call, so the
//! serialized shape (`{"role": ..., "content": ...}`) is part of the wire
//! contract.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::llm::MessageRole;

/// Who authored a turn.
///
/// Only users and the assistant take part in a form-building conversation;
/// system instructions live on the gateway side and never enter the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

impl From<Role> for MessageRole {
    fn from(role: Role) -> Self {
        match role {
            Role::User => MessageRole::User,
            Role::Assistant => MessageRole::Assistant,
        }
    }
}

/// A single conversation turn.
///
/// Immutable once appended to a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Assistant] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_rejects_system() {
        assert!("system".parse::<Role>().is_err());
    }

    #[test]
    fn test_turn_wire_shape() {
        let turn = Turn::assistant("Sure, what fields do you need?");
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"role": "assistant", "content": "Sure, what fields do you need?"})
        );
    }

    #[test]
    fn test_role_maps_to_message_role() {
        assert_eq!(MessageRole::from(Role::User), MessageRole::User);
        assert_eq!(MessageRole::from(Role::Assistant), MessageRole::Assistant);
    }
}
