//! Log setup.
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is configured.

use std::{fs::File, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

use crate::TerminalError;

/// Install the global subscriber writing to `path`. No-op without a path.
pub fn init(path: Option<&Path>) -> Result<(), TerminalError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| TerminalError::Logging(e.to_string()))
}
