//! Host-boundary adapter
//!
//! The host loads the plugin once, runs [`Plugin::on_load`] in a
//! dedicated task, and calls [`Plugin::on_unload`] when the plugin is
//! removed. The supervisor sits behind a mutex so even a misbehaving
//! host that overlaps the two hooks cannot corrupt lifecycle state.

use std::path::PathBuf;

use tokio::sync::Mutex;
use tracing::info;

use crate::env::PluginEnv;
use crate::error::Result;
use crate::supervisor::{BackendSupervisor, StopPolicy};

/// Plugin instance owning the backend supervisor
pub struct Plugin {
    backend: PathBuf,
    supervisor: Mutex<BackendSupervisor>,
}

impl Plugin {
    /// Plugin with the backend resolved from the installation environment
    pub fn new(env: &PluginEnv, policy: StopPolicy) -> Self {
        Self::with_backend(env.backend_path(), policy)
    }

    /// Plugin with an explicit backend executable path
    pub fn with_backend(backend: impl Into<PathBuf>, policy: StopPolicy) -> Self {
        Self {
            backend: backend.into(),
            supervisor: Mutex::new(BackendSupervisor::new(policy)),
        }
    }

    /// Load hook: start the backend, then keep this task resident for
    /// the plugin's lifetime.
    ///
    /// Returns only if startup fails; otherwise the host cancels the
    /// task during unload. There is nothing to supervise actively, so
    /// the keep-alive is a parked future, not a polling loop.
    pub async fn on_load(&self) -> Result<()> {
        self.supervisor.lock().await.start(&self.backend)?;
        info!(backend = %self.backend.display(), "Plugin loaded");

        std::future::pending::<()>().await;
        unreachable!("pending() never resolves")
    }

    /// Unload hook: tear the backend down.
    ///
    /// Completes within the stop policy's grace period plus forced-kill
    /// overhead, and never fails; the host's unload path has nothing
    /// useful to do with a stop error.
    pub async fn on_unload(&self) {
        self.supervisor.lock().await.stop().await;
        info!("Plugin unloaded");
    }

    /// Pid of the running backend, if any (diagnostic)
    pub async fn backend_pid(&self) -> Option<u32> {
        self.supervisor.lock().await.backend_pid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PluginError;

    #[tokio::test]
    async fn on_load_with_missing_backend_fails() {
        let plugin = Plugin::with_backend("/nonexistent/bin/backend", StopPolicy::default());
        let err = plugin.on_load().await.unwrap_err();
        assert!(matches!(err, PluginError::BackendMissing { .. }));
    }

    #[tokio::test]
    async fn unload_without_load_is_noop() {
        let plugin = Plugin::with_backend("/nonexistent/bin/backend", StopPolicy::default());
        plugin.on_unload().await;
        assert!(plugin.backend_pid().await.is_none());
    }

    #[tokio::test]
    async fn env_resolved_backend_path_is_used() {
        let env = PluginEnv::new("/opt/example-plugin");
        let plugin = Plugin::new(&env, StopPolicy::default());
        assert_eq!(
            plugin.backend,
            PathBuf::from("/opt/example-plugin/bin/backend")
        );
    }
}
