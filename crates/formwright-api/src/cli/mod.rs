//! CLI command definitions for the `fwright` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod form_view;
pub mod render;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use render::RenderFormat;

/// Build forms by chatting with an assistant.
#[derive(Parser)]
#[command(name = "fwright", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true, env = "FORMWRIGHT_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the form-builder gateway server.
    Serve {
        /// Address to bind (defaults to `server.host` from config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (defaults to `server.port` from config.toml).
        #[arg(short, long)]
        port: Option<u16>,

        /// Always answer with the canned contact form.
        #[arg(long)]
        mock: bool,
    },

    /// Build a form interactively.
    Chat {
        /// Gateway endpoint (defaults to `gateway.endpoint` from config.toml).
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Render a schema document without talking to the assistant.
    Render {
        /// File containing the assistant text, or `-` for stdin.
        input: String,

        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::parse_from(["fwright", "serve", "--port", "8080", "--mock"]);
        match cli.command {
            Commands::Serve { host, port, mock } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
                assert!(mock);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_render_defaults_to_text() {
        let cli = Cli::parse_from(["fwright", "-v", "render", "-"]);
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Render { input, format } => {
                assert_eq!(input, "-");
                assert_eq!(format, RenderFormat::Text);
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_render_format_html() {
        let cli = Cli::parse_from(["fwright", "render", "form.json", "--format", "html"]);
        assert!(matches!(
            cli.command,
            Commands::Render {
                format: RenderFormat::Html,
                ..
            }
        ));
    }
}
