//! # Oraco Site Server
//!
//! File: cli/src/commands/serve/mod.rs
//!
//! ## Overview
//!
//! `oraco serve` hosts the pre-built marketing site: the static bundle with
//! single-page-app fallback, plus the small API the bundle uses for the
//! contact form and the chat assistant, so provider credentials stay on the
//! server.
//!
//! ## Architecture
//!
//! - `config.rs`: `ServeArgs` and the merged `ServerConfig`
//! - `api.rs`: `/health`, `/api/contact`, `/api/chat` and the recovery page
//! - `server_logic.rs`: router assembly, middleware and the serve loop
//! - `utils.rs`: startup diagnostics for the bundle directory
//!
//! ## Examples
//!
//! ```bash
//! oraco serve
//! PORT=8080 oraco serve ./build --no-cors
//! oraco --config deploy/.oraco.toml serve
//! ```
//!
use crate::chat::Assistant;
use crate::contact::Mailer;
use crate::core::config::SiteConfig;
use crate::core::error::Result;
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info};

pub use config::ServeArgs;

pub mod api;
pub mod config;
pub mod server_logic;
pub mod utils;

/// # Handle Serve Command (`handle_serve`)
///
/// Merges `args` over `site.server`, checks the bundle directory, builds the
/// shared provider clients and runs the server until shutdown.
///
/// A missing bundle directory is logged but not fatal: the health check and
/// API keep working and static paths return 404.
pub async fn handle_serve(args: ServeArgs, site: &SiteConfig) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let section_base = match site.source.as_deref().and_then(|p| p.parent()) {
        Some(parent) => parent.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let mut server_config = config::ServerConfig::merge(&args, &site.server, &section_base)?;

    if let Err(e) = server_config.resolve_directory().await {
        error!("{:#}", e);
    }
    utils::log_directory_contents(&server_config.directory, &server_config.index_file);
    info!("Effective server config: {:?}", server_config);

    let state = api::AppState {
        assistant: Arc::new(Assistant::from_config(&site.chat)),
        mailer: Arc::new(Mailer::from_config(&site.email)),
    };
    if !state.assistant.is_online() {
        info!("No chat credential configured; /api/chat answers with the offline reply.");
    }
    if !state.mailer.is_configured() {
        info!("Email delivery not configured; /api/contact will report it to visitors.");
    }

    server_logic::run_server(server_config, state).await
}
