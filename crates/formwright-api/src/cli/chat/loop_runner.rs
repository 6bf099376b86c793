//! Main chat loop orchestration.
//!
//! Sets up the HTTP gateway and session controller, prints the greeting, then
//! alternates between reading input and drawing the results.

use std::time::Duration;

use console::style;
use tracing::info;

use formwright_core::chat::{SessionController, SubmitOutcome, Transcript};
use formwright_core::gateway::AssistantGateway;
use formwright_core::render::LOADING_MESSAGE;
use formwright_core::render::html::to_html;
use formwright_infra::gateway::HttpAssistantGateway;
use formwright_types::chat::Role;
use formwright_types::config::GatewayConfig;

use crate::cli::form_view::format_state;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::fill::fill_form;
use super::input::{ChatInput, InputEvent};

/// Longest turn shown in full by `/history`.
const HISTORY_PREVIEW_CHARS: usize = 100;

/// Run the interactive chat loop against the gateway at `endpoint`.
pub async fn run_chat_loop(gateway_config: &GatewayConfig, endpoint: &str) -> anyhow::Result<()> {
    let gateway =
        HttpAssistantGateway::new(endpoint, Duration::from_secs(gateway_config.timeout_secs))?;
    let controller = SessionController::with_transcript(gateway, Transcript::with_greeting());
    info!(session_id = %controller.id(), %endpoint, "Chat session started");

    print_welcome_banner(endpoint, &controller.id().to_string());
    if let Some(greeting) = controller.snapshot().transcript.last() {
        println!("  {} {}", style("Assistant >").cyan().bold(), greeting.content);
        println!();
    }

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Blank => continue,
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Form => {
                    println!();
                    println!("{}", format_state(&controller.render_current()));
                    println!();
                }
                ChatCommand::Fill => {
                    let state = controller.render_current();
                    let Some(form) = state.form() else {
                        println!(
                            "\n  {} No form yet. Describe one first.\n",
                            style("!").yellow().bold()
                        );
                        continue;
                    };

                    let filled;
                    (filled, chat_input, _writer) = chat_input
                        .release_for(|| fill_form(form))
                        .map_err(|e| anyhow::anyhow!("Failed to reopen input: {e}"))?;

                    match filled {
                        Ok(values) => {
                            println!();
                            println!("  {}", style("Submitted values:").bold());
                            println!("{}", serde_json::to_string_pretty(&values)?);
                            println!();
                        }
                        Err(e) => {
                            println!("\n  {} Form not submitted: {e}\n", style("!").red().bold());
                        }
                    }
                }
                ChatCommand::Html(path) => {
                    let html = to_html(&controller.render_current());
                    match tokio::fs::write(&path, html).await {
                        Ok(()) => println!(
                            "\n  {} Wrote {}\n",
                            style("*").cyan().bold(),
                            style(&path).dim()
                        ),
                        Err(e) => println!(
                            "\n  {} Failed to write {path}: {e}\n",
                            style("!").red().bold()
                        ),
                    }
                }
                ChatCommand::History => print_history(&controller),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        let spinner = indicatif::ProgressBar::new_spinner();
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("  {spinner:.cyan} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner()),
        );
        spinner.set_message(LOADING_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(80));

        let outcome = controller.submit(&text).await;
        spinner.finish_and_clear();

        let snapshot = controller.snapshot();
        match outcome {
            SubmitOutcome::Rejected(reason) => {
                tracing::debug!(?reason, "Submission rejected");
            }
            SubmitOutcome::Schema(schema) => {
                println!(
                    "  {} {}",
                    style("Assistant >").cyan().bold(),
                    style(format!(
                        "Built \"{}\" with {} field(s).",
                        schema.title,
                        schema.fields.len()
                    ))
                    .dim()
                );
                println!();
                println!("{}", format_state(&snapshot.render()));
                println!();
            }
            SubmitOutcome::Reply(_) => {
                if let Some(turn) = snapshot.transcript.last() {
                    println!("  {} {}", style("Assistant >").cyan().bold(), turn.content);
                    println!();
                }
            }
            SubmitOutcome::Failed(_) => {
                if let Some(turn) = snapshot.transcript.last() {
                    println!("  {} {}", style("Assistant >").red().bold(), turn.content);
                    println!();
                }
            }
        }
    }

    info!(
        session_id = %controller.id(),
        turns = controller.snapshot().transcript.len(),
        "Chat session ended"
    );
    Ok(())
}

fn print_history<G: AssistantGateway>(controller: &SessionController<G>) {
    let snapshot = controller.snapshot();
    println!();
    for turn in &snapshot.transcript {
        let label = match turn.role {
            Role::User => style("You").green(),
            Role::Assistant => style("Assistant").cyan(),
        };
        println!("  {} {}", label.bold(), preview(&turn.content));
    }
    println!();
}

fn preview(content: &str) -> String {
    let single_line = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() > HISTORY_PREVIEW_CHARS {
        let cut: String = single_line.chars().take(HISTORY_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        single_line
    }
}
