//! Error types for process supervision

use std::io;
use thiserror::Error;

/// Errors raised by the process handle
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Failed to launch the executable
    #[error("Failed to launch process: {0}")]
    Launch(#[from] io::Error),

    /// The OS never reported a pid for the spawned child
    #[error("Spawned process has no pid")]
    NoPid,

    /// Waiting on the child failed at the OS level
    #[error("Failed to wait for process {pid}: {source}")]
    Wait { pid: u32, source: io::Error },
}

/// Result type for process operations
pub type Result<T> = std::result::Result<T, ProcessError>;
