//! Welcome banner display for chat sessions.

use console::style;

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(endpoint: &str, session_id: &str) {
    println!();
    println!("  {} {}", "*", style("Formwright").cyan().bold());
    println!("  {}", style("Describe a form and watch it take shape.").dim());
    println!();
    println!("  {}  {}", style("Gateway:").bold(), style(endpoint).dim());
    println!(
        "  {}  {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}
