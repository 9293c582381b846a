//! # deckhand-process
//!
//! **Purpose**: Child-process handle for the deckhand plugin supervisor
//!
//! Wraps a single OS child process: launch with the inherited
//! environment, polite termination request, exit wait with a deadline,
//! forced kill, and a non-blocking liveness probe.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use deckhand_process::{LaunchConfig, ProcessHandle, WaitOutcome};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LaunchConfig::new("/usr/local/my-plugin/bin/backend");
//! let mut handle = ProcessHandle::launch(&config)?;
//!
//! // Later, on teardown:
//! handle.terminate();
//! if let WaitOutcome::TimedOut = handle.wait_with_deadline(Duration::from_secs(5)).await? {
//!     handle.force_kill();
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handle;

pub use config::LaunchConfig;
pub use error::{ProcessError, Result};
pub use handle::{ProcessHandle, WaitOutcome};
