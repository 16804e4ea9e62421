//! # Oraco Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces used by every command:
//! - `config`: loading `.oraco.toml`, applying environment overrides, validation
//! - `error`: the shared error enum and `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::SiteConfig;
//! use crate::core::error::{Result, SiteError};
//! ```
//!
pub mod config;
pub mod error;
