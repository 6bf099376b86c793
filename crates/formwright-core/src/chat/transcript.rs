//! Append-only conversation transcript.

use formwright_types::chat::{Role, Turn};

/// Opening assistant turn shown before the user types anything.
pub const GREETING: &str =
    "Hello! I can help you create forms. What kind of form would you like to build?";

/// Ordered history of turns for one session.
///
/// Turns can only be appended. The whole transcript (minus the turn being
/// submitted) is the `history` sent to the gateway, so order is significant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// An empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcript seeded with the assistant greeting.
    pub fn with_greeting() -> Self {
        Self {
            turns: vec![Turn::assistant(GREETING)],
        }
    }

    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Turn> {
        self.turns.iter()
    }

    /// Number of turns authored by `role`.
    pub fn count_by(&self, role: Role) -> usize {
        self.turns.iter().filter(|t| t.role == role).count()
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Turn;
    type IntoIter = std::slice::Iter<'a, Turn>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
