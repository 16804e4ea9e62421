//! # Oraco Commands
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! One module per top-level subcommand:
//! - `serve`: host the site bundle and its API
//! - `chat`: talk to OracoBot in the terminal
//! - `contact`: submit the contact form from the command line
//!
//! Each module exposes an argument struct and an async `handle_*` function
//! that `main` dispatches to with the loaded `SiteConfig`.
//!
pub mod chat;
pub mod contact;
pub mod serve;
