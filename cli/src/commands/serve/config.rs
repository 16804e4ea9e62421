//! # Oraco Site Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//!
//! ## Overview
//!
//! Produces the effective `ServerConfig` for `oraco serve` by layering:
//! 1. Command-line arguments and the `HOST` / `PORT` environment variables (highest priority)
//! 2. The `[server]` section of the loaded site configuration
//! 3. Default values (lowest priority)
//!
//! ## Examples
//!
//! ```bash
//! # Serve ./dist on 0.0.0.0:3000
//! oraco serve
//!
//! # Another bundle directory and port
//! PORT=8080 oraco serve ./build
//! ```
//!
//! The bundle directory is resolved to an absolute, canonical path before the
//! server starts. A relative directory from the config file is taken relative
//! to that file; a relative directory from the command line is taken relative
//! to the working directory.
//!
use crate::core::config::ServerSection;
use crate::core::error::{Result, SiteError};
use anyhow::Context;
use clap::Parser;
use std::net::IpAddr;
use std::{env, path::PathBuf};
use tracing::debug;

/// # Serve Command Arguments (`ServeArgs`)
///
/// Any value left unset falls through to `.oraco.toml` and then to the
/// built-in defaults.
#[derive(Parser, Debug, Default, Clone)]
pub struct ServeArgs {
    /// Directory holding the pre-built front-end bundle (default: `dist`).
    pub directory: Option<PathBuf>,

    /// Port to listen on (default: 3000).
    #[arg(long, short, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind (default: 0.0.0.0).
    #[arg(long, env = "HOST")]
    pub host: Option<IpAddr>,

    /// Entry document returned for client-side routes (default: `index.html`).
    #[arg(long, short)]
    pub index: Option<String>,

    /// Disables CORS headers on all responses.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub host: IpAddr,
    /// Absolute path to the bundle directory.
    pub directory: PathBuf,
    pub index_file: String,
    pub enable_cors: bool,
}

impl ServerConfig {
    /// # Merge Arguments over the Config Section (`merge`)
    ///
    /// `section_base` is the directory relative `[server] directory` values
    /// are anchored to (the config file's parent, or the working directory).
    pub fn merge(args: &ServeArgs, section: &ServerSection, section_base: &std::path::Path) -> Result<Self> {
        let directory = match &args.directory {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => env::current_dir()
                .context("Failed to get current working directory")?
                .join(dir),
            None => section.directory_path(section_base),
        };

        Ok(Self {
            port: args.port.unwrap_or(section.port),
            host: args.host.unwrap_or(section.host),
            directory,
            index_file: args
                .index
                .clone()
                .unwrap_or_else(|| section.index_file.clone()),
            enable_cors: section.enable_cors && !args.no_cors,
        })
    }

    /// Path of the entry document inside the bundle.
    pub fn index_path(&self) -> PathBuf {
        self.directory.join(&self.index_file)
    }

    /// # Resolve and Validate Directory Path (`resolve_directory`)
    ///
    /// Canonicalizes `directory` and checks that it is a directory.
    ///
    /// ## Errors
    ///
    /// Returns an error if the path cannot be canonicalized (does not exist,
    /// no permission) or is not a directory. `directory` is left unchanged
    /// in that case.
    pub async fn resolve_directory(&mut self) -> Result<()> {
        let canonical_path = tokio::fs::canonicalize(&self.directory)
            .await
            .map_err(|e| {
                SiteError::FileSystem(format!(
                    "Bundle directory '{}' could not be found or accessed: {}",
                    self.directory.display(),
                    e
                ))
            })?;

        let metadata = tokio::fs::metadata(&canonical_path).await.map_err(|e| {
            SiteError::FileSystem(format!(
                "Failed to get metadata for path '{}': {}",
                canonical_path.display(),
                e
            ))
        })?;
        if !metadata.is_dir() {
            return Err(SiteError::FileSystem(format!(
                "Path is not a directory: {}",
                canonical_path.display()
            ))
            .into());
        }

        self.directory = canonical_path;
        debug!("Resolved bundle directory to: {}", self.directory.display());
        Ok(())
    }
}
