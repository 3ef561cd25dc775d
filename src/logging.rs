//! Log file setup for the binary
//!
//! The TUI owns the terminal, so log output never goes to stdout or stderr.
//! A subscriber is installed only when `SORTVIZ_LOG` names a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Result, VizError};

/// Environment variable naming a file to write logs to
pub const LOG_FILE_ENV: &str = "SORTVIZ_LOG";

/// Install the global subscriber if `SORTVIZ_LOG` is set
pub fn init_tracing() -> Result<()> {
    match std::env::var_os(LOG_FILE_ENV) {
        Some(path) => init_file_tracing(Path::new(&path)),
        None => Ok(()),
    }
}

/// Install the global subscriber writing to `path`. `RUST_LOG` overrides
/// the default `debug` filter. Fails if a subscriber is already installed.
pub fn init_file_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| VizError::Logging(err.to_string()))
}
