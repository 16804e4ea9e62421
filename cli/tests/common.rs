//! # Oraco CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! Shared helpers for the integration tests. Each test file declares
//! `mod common;` and uses what it needs.
//!
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// Environment variables that would otherwise leak provider credentials or
/// server settings from the developer's shell into the tests.
pub const ISOLATED_ENV: [&str; 9] = [
    "GEMINI_API_KEY",
    "API_KEY",
    "GEMINI_MODEL",
    "EMAILJS_SERVICE_ID",
    "EMAILJS_TEMPLATE_ID",
    "EMAILJS_PUBLIC_KEY",
    "PORT",
    "HOST",
    "RUST_LOG",
];

/// # Get Oraco Command (`oraco_cmd`)
///
/// An `assert_cmd::Command` for the compiled `oraco` binary.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn oraco_cmd() -> Command {
    Command::cargo_bin("oraco").expect("Failed to find oraco binary for testing")
}

/// `oraco_cmd` run from `dir` with credentials and server settings cleared,
/// so no `.oraco.toml` or exported variable influences the result.
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = oraco_cmd();
    cmd.current_dir(dir);
    for key in ISOLATED_ENV {
        cmd.env_remove(key);
    }
    cmd
}
