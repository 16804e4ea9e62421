//! # Oraco Site Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//!
//! ## Overview
//!
//! The Axum server behind `oraco serve`:
//! - `/health` and the `/api/*` routes from `api`
//! - every other path served from the bundle directory, falling back to the
//!   entry document so client-side routes load the single-page app
//! - request tracing, optional permissive CORS, and a panic guard that
//!   answers with a recovery page instead of dropping the connection
//! - graceful shutdown on Ctrl+C or SIGTERM
//!
//! ## Architecture
//!
//! 1. Build the router with `create_app`
//! 2. Bind exactly the configured address (no port fallback: a deployment
//!    platform expects the port it assigned)
//! 3. Serve until a shutdown signal arrives
//!
use super::api::{self, AppState};
use super::config::ServerConfig;
use crate::core::error::Result;
use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

/// # Run HTTP Server (`run_server`)
///
/// Binds the configured address and serves the site until Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// Returns an error if the listener cannot be bound (port in use, permission
/// denied) or if the server fails while running.
pub async fn run_server(config: ServerConfig, state: AppState) -> Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    let app = create_app(&config, state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    println!("\n=================================================================");
    println!("📂 Serving bundle from: {}", config.directory.display());
    println!("🌐 Listening on:        http://{}", addr);
    println!("❓ Entry document:      {}", config.index_file);
    println!("🔒 CORS enabled:        {}", config.enable_cors);
    println!("=================================================================\n");
    info!("Server is running on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server closed");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves on Ctrl+C or, on Unix, SIGTERM. The listening socket is closed
/// and in-flight requests finish under axum's default behaviour.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, closing HTTP server"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("SIGTERM signal received: closing HTTP server");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
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
}

/// # Create Axum Application (`create_app`)
///
/// API routes first; anything they do not match goes to the bundle. A
/// missing asset gets the entry document with status 200.
pub fn create_app(config: &ServerConfig, state: AppState) -> Router {
    let spa = ServeDir::new(&config.directory).fallback(ServeFile::new(config.index_path()));

    with_middleware(api::routes(state).fallback_service(spa), config)
}

/// Wraps `router` in the panic guard, request tracing and CORS.
fn with_middleware(router: Router, config: &ServerConfig) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(false))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router.layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(CatchPanicLayer::custom(api::recovery_page))
            .layer(cors_layer),
    )
}
