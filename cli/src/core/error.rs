//! # Oraco Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! Error types shared across the `oraco` binary. Provider-specific failures
//! (`ChatError`, `MailerError`) live next to their adapters and never leave
//! them: the adapters turn them into user-facing strings or outcomes. The
//! errors here are the ones that do reach `main`, where they are printed and
//! the process exits with status 1.
//!
//! ## Architecture
//!
//! - `SiteError`: a `thiserror` enum for the failure categories the commands report
//! - `Result<T>`: an alias for `anyhow::Result<T>` so command code can attach context
//!
//! ## Examples
//!
//! ```rust
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//!
//! if config.server.port == 0 {
//!     return Err(SiteError::Config("port must be non-zero".into()).into());
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the `oraco` application.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Contact submission failed: {0}")]
    Submission(String),

    #[error("Terminal I/O failed: {source}")]
    Terminal {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = SiteError::Config("Missing setting 'port'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'port'"
        );

        let submission = SiteError::Submission("Please fill in all required fields correctly.".into());
        assert_eq!(
            submission.to_string(),
            "Contact submission failed: Please fill in all required fields correctly."
        );

        let io = SiteError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(io.to_string(), "Terminal I/O failed: pipe closed");
    }
}
