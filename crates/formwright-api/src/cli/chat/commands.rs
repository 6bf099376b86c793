//! Slash command parsing for the chat loop.

use console::style;

/// Default output path for `/html`.
pub const DEFAULT_HTML_PATH: &str = "form.html";

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Show available commands.
    Help,
    /// Draw the current form pane.
    Form,
    /// Fill in the current form interactively.
    Fill,
    /// Write the form pane as HTML to a file.
    Html(String),
    /// Show the conversation so far.
    History,
    /// Clear the terminal screen.
    Clear,
    /// Exit the chat session.
    Exit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
    let cmd = parts[0].to_lowercase();
    let arg = parts
        .get(1)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty());

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/form" | "/show" => Some(ChatCommand::Form),
        "/fill" => Some(ChatCommand::Fill),
        "/html" => Some(ChatCommand::Html(
            arg.unwrap_or(DEFAULT_HTML_PATH).to_string(),
        )),
        "/history" => Some(ChatCommand::History),
        "/clear" | "/cls" => Some(ChatCommand::Clear),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Print the help text listing all available commands.
pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}         {}", style("/help").cyan(), "Show this help message");
    println!("  {}         {}", style("/form").cyan(), "Show the current form");
    println!("  {}         {}", style("/fill").cyan(), "Fill in the current form");
    println!(
        "  {}  {}",
        style("/html [PATH]").cyan(),
        format!("Save the form as HTML (default {DEFAULT_HTML_PATH})")
    );
    println!("  {}      {}", style("/history").cyan(), "Show conversation history");
    println!("  {}        {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}         {}", style("/exit").cyan(), "End the chat session");
    println!();
    println!(
        "  {}",
        style("Anything else is sent to the assistant. Ctrl+D to exit.").dim()
    );
    println!();
}
