//! Managed child-process handle

use std::process::ExitStatus;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::config::LaunchConfig;
use crate::error::{ProcessError, Result};

/// Outcome of a bounded wait on the child
#[derive(Debug)]
pub enum WaitOutcome {
    /// The child exited before the deadline
    Exited(ExitStatus),
    /// The deadline elapsed with the child still running
    TimedOut,
}

/// Handle to one spawned child process
///
/// The handle owns the OS resource: dropping it kills anything still
/// running (`kill_on_drop`), so a handle can never outlive its owner
/// as a leaked live process.
#[derive(Debug)]
pub struct ProcessHandle {
    child: Child,
    pid: u32,
}

impl ProcessHandle {
    /// Launch the configured executable.
    ///
    /// The child inherits this process's environment and standard
    /// streams; `config.env` entries are layered on top.
    pub fn launch(config: &LaunchConfig) -> Result<Self> {
        let mut cmd = Command::new(&config.program);
        cmd.args(&config.args);

        if let Some(ref dir) = config.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &config.env {
            cmd.env(key, value);
        }

        cmd.kill_on_drop(true);

        let child = cmd.spawn()?;
        let pid = child.id().ok_or(ProcessError::NoPid)?;
        debug!(pid = %pid, program = %config.program.display(), "Process launched");
        Ok(Self { child, pid })
    }

    /// OS process id
    pub fn id(&self) -> u32 {
        self.pid
    }

    /// Non-blocking liveness probe
    pub fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Ask the child to terminate.
    ///
    /// Sends SIGTERM on Unix. Non-blocking: does not wait for the exit.
    /// An already-exited child is a no-op, not an error.
    pub fn terminate(&mut self) {
        #[cfg(unix)]
        {
            use nix::errno::Errno;
            use nix::sys::signal::{kill, Signal};
            use nix::unistd::Pid;

            match kill(Pid::from_raw(self.pid as i32), Signal::SIGTERM) {
                Ok(()) => debug!(pid = %self.pid, "Sent SIGTERM"),
                Err(Errno::ESRCH) => debug!(pid = %self.pid, "Process already gone"),
                Err(e) => warn!(pid = %self.pid, error = %e, "Failed to send SIGTERM"),
            }
        }

        #[cfg(not(unix))]
        {
            // No polite signal on this platform; the kill below is the
            // only termination the OS offers.
            if let Err(e) = self.child.start_kill() {
                debug!(pid = %self.pid, error = %e, "Kill request failed (process likely exited)");
            }
        }
    }

    /// Wait for the child to exit, bounded by `deadline`.
    ///
    /// A timeout is an ordinary outcome, not an error.
    pub async fn wait_with_deadline(&mut self, deadline: Duration) -> Result<WaitOutcome> {
        match tokio::time::timeout(deadline, self.child.wait()).await {
            Ok(Ok(status)) => Ok(WaitOutcome::Exited(status)),
            Ok(Err(e)) => Err(ProcessError::Wait {
                pid: self.pid,
                source: e,
            }),
            Err(_) => Ok(WaitOutcome::TimedOut),
        }
    }

    /// Forcibly stop the child with the non-ignorable kill signal.
    ///
    /// Does not wait for the exit; the runtime reaps the child in the
    /// background once it is gone. An already-exited child is benign.
    pub fn force_kill(&mut self) {
        match self.child.start_kill() {
            Ok(()) => debug!(pid = %self.pid, "Sent SIGKILL"),
            Err(e) => debug!(pid = %self.pid, error = %e, "Kill request failed (process likely exited)"),
        }
    }
}
