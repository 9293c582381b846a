//! Error types for plugin lifecycle management

use std::io;
use std::path::PathBuf;

use deckhand_process::ProcessError;
use thiserror::Error;

/// Errors surfaced to the host
#[derive(Debug, Error)]
pub enum PluginError {
    /// `start()` called while a backend is already supervised
    #[error("Backend is already running")]
    AlreadyRunning,

    /// The plugin installation has no backend executable where expected
    #[error("Backend executable not found at {}", path.display())]
    BackendMissing { path: PathBuf },

    /// The process layer refused to launch the backend
    #[error("Process error: {0}")]
    Process(#[from] ProcessError),

    /// The plugin installation directory could not be resolved
    #[error("Failed to resolve plugin directory: {0}")]
    PluginDir(#[from] io::Error),
}

/// Result type for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;
