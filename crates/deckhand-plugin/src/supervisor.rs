//! Backend lifecycle supervision
//!
//! Owns zero-or-one backend process. `start` launches it, `stop` runs
//! the escalation sequence: polite signal, bounded wait, forced kill.
//! Whatever the backend does, `stop` always ends with no live child.

use std::path::Path;
use std::time::Duration;

use deckhand_process::{LaunchConfig, ProcessHandle, WaitOutcome};
use tracing::{debug, info, warn};

use crate::error::{PluginError, Result};

/// Default graceful-stop budget before escalating to a forced kill.
///
/// Matches the unload budget hosts typically give plugins; overridable
/// via [`StopPolicy`].
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(5);

/// Stop escalation policy
#[derive(Debug, Clone)]
pub struct StopPolicy {
    /// How long the backend gets to exit after the polite signal
    pub grace_period: Duration,
}

impl StopPolicy {
    /// Policy with an explicit grace period
    pub fn new(grace_period: Duration) -> Self {
        Self { grace_period }
    }
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self {
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }
}

/// Lifecycle state of the supervised backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No backend process exists
    Idle,
    /// The backend is (as far as we know) running
    Running,
    /// `stop()` is executing the escalation sequence
    Stopping,
}

/// Drives the lifecycle of a single backend process
pub struct BackendSupervisor {
    policy: StopPolicy,
    handle: Option<ProcessHandle>,
    state: LifecycleState,
}

impl BackendSupervisor {
    /// Create an idle supervisor
    pub fn new(policy: StopPolicy) -> Self {
        Self {
            policy,
            handle: None,
            state: LifecycleState::Idle,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Pid of the supervised backend, if one is running
    pub fn backend_pid(&self) -> Option<u32> {
        self.handle.as_ref().map(ProcessHandle::id)
    }

    /// Non-blocking probe of the supervised process
    pub fn is_running(&mut self) -> bool {
        match self.handle.as_mut() {
            Some(handle) => handle.is_alive(),
            None => false,
        }
    }

    /// Launch the backend executable.
    ///
    /// The child inherits the full environment the host set up for the
    /// plugin. Calling this while a backend is already supervised is a
    /// caller bug and fails with [`PluginError::AlreadyRunning`]; the
    /// supervisor may be reused with a new `start` once it is idle
    /// again after `stop`.
    pub fn start(&mut self, backend: &Path) -> Result<()> {
        if self.state != LifecycleState::Idle {
            warn!(state = ?self.state, "start() called with a backend already supervised");
            return Err(PluginError::AlreadyRunning);
        }
        if !backend.is_file() {
            return Err(PluginError::BackendMissing {
                path: backend.to_path_buf(),
            });
        }

        let config = LaunchConfig::new(backend);
        let handle = ProcessHandle::launch(&config)?;
        info!(pid = %handle.id(), backend = %backend.display(), "Backend started");

        self.handle = Some(handle);
        self.state = LifecycleState::Running;
        Ok(())
    }

    /// Stop the backend.
    ///
    /// Escalation sequence: polite termination request, wait up to the
    /// policy's grace period, forced kill if the wait does not observe
    /// an exit. Infallible: signal-delivery failures are logged and
    /// swallowed, and the supervisor is idle again when this returns,
    /// no matter which path ran. A no-op when already idle.
    pub async fn stop(&mut self) {
        let Some(mut handle) = self.handle.take() else {
            debug!("stop() with no backend to stop");
            self.state = LifecycleState::Idle;
            return;
        };

        self.state = LifecycleState::Stopping;
        let pid = handle.id();
        debug!(pid = %pid, grace = ?self.policy.grace_period, "Stopping backend");

        handle.terminate();
        match handle.wait_with_deadline(self.policy.grace_period).await {
            Ok(WaitOutcome::Exited(status)) => {
                info!(pid = %pid, status = ?status, "Backend exited within grace period");
            }
            Ok(WaitOutcome::TimedOut) => {
                warn!(pid = %pid, "Backend ignored termination request; killing");
                handle.force_kill();
            }
            Err(e) => {
                // Exit no longer observable; make sure nothing survives.
                warn!(pid = %pid, error = %e, "Wait failed during stop; killing");
                handle.force_kill();
            }
        }

        // Handle drops here; kill_on_drop backstops any straggler.
        drop(handle);
        self.state = LifecycleState::Idle;
    }
}
