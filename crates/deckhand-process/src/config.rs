//! Launch configuration

use std::collections::HashMap;
use std::path::PathBuf;

/// Configuration for launching a backend executable
///
/// The child always inherits the full environment of the current
/// process; `env` entries are layered on top of it at spawn time.
/// Standard streams are inherited as-is, there is no capture.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Path to the executable (absolute in normal use; the handle does
    /// not resolve against `PATH` semantics beyond what the OS does)
    pub program: PathBuf,
    /// Command arguments
    pub args: Vec<String>,
    /// Working directory (None = inherit the current one)
    pub working_dir: Option<PathBuf>,
    /// Environment variables added to the inherited environment
    pub env: HashMap<String, String>,
}

impl LaunchConfig {
    /// Create a configuration for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: vec![],
            working_dir: None,
            env: HashMap::new(),
        }
    }

    /// Set command arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set the working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Add an environment variable on top of the inherited environment
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}
