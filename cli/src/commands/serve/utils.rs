//! # Site Server Utilities
//!
//! File: cli/src/commands/serve/utils.rs
//!
//! ## Overview
//!
//! Startup diagnostics for `oraco serve`. Deployments most often fail
//! because the bundle was never built or was copied to the wrong place, so
//! the server lists what it is about to serve before it binds.
//!
use std::path::Path;
use tracing::{error, info, warn};

/// # Log Directory Contents (`log_directory_contents`)
///
/// Logs each entry of `path` as `DIR` or `FILE`, and whether the entry
/// document is present. Returns `false` when the directory cannot be read;
/// the caller keeps serving so `/health` and the API stay reachable.
pub fn log_directory_contents(path: &Path, index_file: &str) -> bool {
    let entries = match std::fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                "CRITICAL: bundle directory '{}' is not readable: {}. Only /health and /api/* will work.",
                path.display(),
                e
            );
            return false;
        }
    };

    info!("Bundle contents for {}:", path.display());
    let mut entry_count = 0;
    for entry in entries.filter_map(Result::ok) {
        entry_count += 1;
        match entry.metadata() {
            Ok(metadata) => {
                let file_type = if metadata.is_dir() { "DIR " } else { "FILE" };
                info!("  - {} : {}", file_type, entry.file_name().to_string_lossy());
            }
            Err(_) => warn!("  - Could not read metadata for: {}", entry.path().display()),
        }
    }
    if entry_count == 0 {
        warn!("  (Empty directory)");
    }

    if !path.join(index_file).is_file() {
        warn!(
            "Entry document '{}' is missing; client-side routes will return 404.",
            index_file
        );
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_readable_directory() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("index.html"), "<html></html>")?;
        std::fs::create_dir(temp_dir.path().join("assets"))?;
        assert!(log_directory_contents(temp_dir.path(), "index.html"));
        Ok(())
    }

    #[test]
    fn test_empty_directory_is_still_readable() -> std::io::Result<()> {
        let temp_dir = TempDir::new()?;
        assert!(log_directory_contents(temp_dir.path(), "index.html"));
        Ok(())
    }

    #[test]
    fn test_missing_directory() {
        assert!(!log_directory_contents(
            Path::new("/path/that/definitely/does/not/exist"),
            "index.html"
        ));
    }
}
