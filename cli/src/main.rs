//! # Oraco Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Entry point for the `oraco` binary, the server and tooling behind the
//! Oraco Africa marketing site. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered site configuration
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! oraco --help
//! oraco -v serve ./dist
//! oraco --config deploy/.oraco.toml contact --first-name Jane ...
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (defaults, TOML file, environment)
//! 4. Route to the command handler
//! 5. Print any error and exit with status 1
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // OracoBot assistant, conversation and session
mod commands; // Subcommand handlers (serve, chat, contact)
mod contact; // Contact form validation and submission
mod core; // Core infrastructure (errors, config)

#[derive(Parser, Debug)]
#[command(
    name = "oraco",
    about = "Oraco Africa site server and tooling",
    long_about = "Serves the Oraco Africa marketing site, answers OracoBot chat messages\n\
                  and delivers contact-form enquiries.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: ./.oraco.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Serve the site bundle with its contact and chat API.
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    /// Chat with OracoBot in the terminal.
    Chat(commands::chat::ChatArgs),
    /// Submit the contact form.
    Contact(commands::contact::ContactArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match core::config::load_config(cli.config.as_deref()) {
        Ok(site) => match cli.command {
            Commands::Serve(args) => commands::serve::handle_serve(args, &site).await,
            Commands::Chat(args) => commands::chat::handle_chat(args, &site).await,
            Commands::Contact(args) => commands::contact::handle_contact(args, &site).await,
        },
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
