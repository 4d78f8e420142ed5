//! File-backed tracing setup
//!
//! The dashboard owns the terminal, so log lines go to a file instead of
//! stdout. `RUST_LOG` overrides the default `info` filter.

use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Install the global subscriber, returning the path it writes to.
///
/// Must be called at most once, before any tracing macros fire. Failure is
/// not fatal to the caller; the dashboard runs fine without a log.
pub fn init(override_path: Option<&Path>) -> Result<PathBuf> {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", parent.display(), e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", path.display(), e))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}

/// Default log location under the platform data directory
fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(dir.join("fitdash").join("fitdash.log"))
}
