//! Formwright CLI and gateway server entry point.
//!
//! Binary name: `fwright`
//!
//! Parses CLI arguments, loads `config.toml`, then either starts the
//! form-builder gateway server, the interactive chat client, or renders a
//! schema document offline.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use formwright_infra::config::{load_config, resolve_config_dir};
use formwright_observe::tracing_setup::{TracingOptions, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = TracingOptions::from_verbosity(cli.verbose, cli.quiet)
        .with_json(cli.log_json)
        .with_otel(cli.otel);
    if let Err(e) = init_tracing(&options) {
        eprintln!("Warning: failed to initialize tracing: {e}");
    }

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "fwright", &mut std::io::stdout());
        return Ok(());
    }

    let config_dir = resolve_config_dir();
    let config = load_config(&config_dir).await;

    match cli.command {
        Commands::Serve { host, port, mock } => {
            let state = AppState::init(&config.provider, mock)?;
            let provider = state.form_builder.provider_name().to_string();

            let host = host.unwrap_or(config.server.host);
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, %provider, "Gateway server listening");
            if !cli.quiet {
                println!(
                    "  {} Formwright gateway listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {}  {}",
                    console::style("Provider:").bold(),
                    console::style(&provider).dim()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Chat { endpoint } => {
            let endpoint = endpoint.unwrap_or(config.gateway.endpoint.clone());
            cli::chat::loop_runner::run_chat_loop(&config.gateway, &endpoint).await?;
        }

        Commands::Render { input, format } => {
            cli::render::run_render(&input, format).await?;
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
