//! Plugin installation environment
//!
//! Paths are resolved relative to where the plugin is installed, never
//! the process working directory: the host may invoke the plugin from
//! an arbitrary cwd.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Env var a host can set to point at the plugin installation root
pub const PLUGIN_DIR_VAR: &str = "DECKHAND_PLUGIN_DIR";

/// Location of the bundled backend inside the installation
const BACKEND_RELATIVE: &str = "bin/backend";

/// Resolved plugin installation directory
#[derive(Debug, Clone)]
pub struct PluginEnv {
    root: PathBuf,
}

impl PluginEnv {
    /// Use an explicit installation directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the installation directory.
    ///
    /// Prefers the host-provided [`PLUGIN_DIR_VAR`], falling back to
    /// the directory containing the running executable.
    pub fn discover() -> io::Result<Self> {
        if let Ok(dir) = env::var(PLUGIN_DIR_VAR) {
            return Ok(Self::new(dir));
        }

        let exe = env::current_exe()?;
        let root = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "running executable has no parent directory",
            )
        })?;
        Ok(Self { root })
    }

    /// Installation root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the bundled backend executable
    pub fn backend_path(&self) -> PathBuf {
        self.root.join(BACKEND_RELATIVE)
    }
}
