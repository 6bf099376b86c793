//! Line input for the form-building chat.
//!
//! `rustyline_async` keeps the terminal in raw mode for as long as the
//! reader lives. The dialoguer prompts used by `/fill` need a cooked
//! terminal, so [`ChatInput::release_for`] tears the reader down, runs the
//! prompts and builds a fresh reader with the same prompt afterwards.

use rustyline_async::{Readline, ReadlineError, ReadlineEvent, SharedWriter};

#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// A non-blank line, trimmed.
    Message(String),
    /// Enter on an empty or whitespace-only line.
    Blank,
    /// Ctrl+D, or the reader failed.
    Eof,
    /// Ctrl+C.
    Interrupted,
}

pub struct ChatInput {
    rl: Readline,
    prompt: String,
}

impl ChatInput {
    pub fn new(prompt: String) -> Result<(Self, SharedWriter), ReadlineError> {
        let (rl, stdout) = Readline::new(prompt.clone())?;
        Ok((Self { rl, prompt }, stdout))
    }

    pub async fn read_line(&mut self) -> InputEvent {
        match self.rl.readline().await {
            Ok(ReadlineEvent::Line(line)) => {
                let event = event_for_line(&line);
                if let InputEvent::Message(text) = &event {
                    let _ = self.rl.add_history_entry(text.clone());
                }
                event
            }
            Ok(ReadlineEvent::Eof) => InputEvent::Eof,
            Ok(ReadlineEvent::Interrupted) => InputEvent::Interrupted,
            Err(_) => InputEvent::Eof,
        }
    }

    /// Run `f` with the terminal back in cooked mode, then reopen the reader.
    ///
    /// Line history does not survive the reopen.
    pub fn release_for<T>(
        self,
        f: impl FnOnce() -> T,
    ) -> Result<(T, Self, SharedWriter), ReadlineError> {
        let prompt = self.prompt.clone();
        drop(self);
        let value = f();
        let (input, writer) = Self::new(prompt)?;
        Ok((value, input, writer))
    }

    pub fn clear(&mut self) {
        let _ = self.rl.clear();
    }
}

fn event_for_line(line: &str) -> InputEvent {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        InputEvent::Blank
    } else {
        InputEvent::Message(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_is_trimmed() {
        assert_eq!(
            event_for_line("  a contact form with email \n"),
            InputEvent::Message("a contact form with email".to_string())
        );
    }

    #[test]
    fn test_whitespace_line_is_blank() {
        assert_eq!(event_for_line(""), InputEvent::Blank);
        assert_eq!(event_for_line(" \t "), InputEvent::Blank);
    }
}
