//! Logging bootstrap for the plugin runtime
//!
//! The host gives plugins no console, so records go to a file. Level
//! defaults to `debug` in debug builds and `info` otherwise; the
//! `DECKHAND_LOG` env var overrides it with a full filter directive.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Env var holding a tracing filter directive (e.g. `deckhand_plugin=trace`)
pub const LOG_FILTER_VAR: &str = "DECKHAND_LOG";

/// Install a file-backed tracing subscriber for the whole process.
///
/// Fails if the log file cannot be created or a subscriber is already
/// installed.
pub fn init(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;

    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}
