//! End-to-end stop-escalation timing
//!
//! Spawns real shell-script backends and measures the wall clock
//! around `stop()`: a cooperative backend must go down well before the
//! grace period, a SIGTERM-ignoring one must be force-killed right
//! after it.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use deckhand_plugin::{BackendSupervisor, LifecycleState, StopPolicy};
use serial_test::serial;
use tempfile::TempDir;

fn fake_backend(script: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backend");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    (dir, path)
}

/// Poll until the OS no longer knows the pid. The runtime reaps the
/// killed child in the background, so allow a few scheduler rounds.
async fn assert_process_dead(pid: u32) {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        match kill(Pid::from_raw(pid as i32), None) {
            Err(Errno::ESRCH) => return,
            _ if Instant::now() > deadline => panic!("process {pid} still alive"),
            _ => tokio::time::sleep(Duration::from_millis(50)).await,
        }
    }
}

#[tokio::test]
#[serial]
async fn cooperative_backend_stops_within_grace() {
    let (_dir, backend) = fake_backend(
        "#!/bin/sh\ntrap 'exit 0' TERM\nwhile :; do sleep 0.1; done\n",
    );

    let mut supervisor = BackendSupervisor::new(StopPolicy::new(Duration::from_secs(5)));
    supervisor.start(&backend).unwrap();
    let pid = supervisor.backend_pid().unwrap();

    let started = Instant::now();
    supervisor.stop().await;
    let elapsed = started.elapsed();

    assert!(
        elapsed < Duration::from_secs(2),
        "cooperative stop took {elapsed:?}"
    );
    assert_eq!(supervisor.state(), LifecycleState::Idle);
    assert_process_dead(pid).await;
}

#[tokio::test]
#[serial]
async fn stubborn_backend_is_killed_after_grace() {
    // The backend touches a sentinel once its trap is installed, so
    // stop() cannot race the shell and TERM a not-yet-stubborn child.
    let dir = TempDir::new().unwrap();
    let ready = dir.path().join("ready");
    let backend = dir.path().join("backend");
    fs::write(
        &backend,
        format!(
            "#!/bin/sh\ntrap '' TERM\n: > '{}'\nwhile :; do sleep 0.1; done\n",
            ready.display()
        ),
    )
    .unwrap();
    fs::set_permissions(&backend, fs::Permissions::from_mode(0o755)).unwrap();

    let grace = Duration::from_secs(1);
    let mut supervisor = BackendSupervisor::new(StopPolicy::new(grace));
    supervisor.start(&backend).unwrap();
    let pid = supervisor.backend_pid().unwrap();

    let ready_by = Instant::now() + Duration::from_secs(5);
    while !ready.exists() {
        assert!(Instant::now() < ready_by, "backend never got ready");
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let started = Instant::now();
    supervisor.stop().await;
    let elapsed = started.elapsed();

    // The whole grace period must elapse before escalation, but stop
    // returns as soon as the kill has been issued.
    assert!(
        elapsed >= Duration::from_millis(900),
        "escalated too early: {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_secs(3),
        "stop took too long: {elapsed:?}"
    );
    assert_eq!(supervisor.state(), LifecycleState::Idle);
    assert_process_dead(pid).await;
}

#[tokio::test]
#[serial]
async fn backend_gone_before_stop_is_clean() {
    let (_dir, backend) = fake_backend("#!/bin/sh\nexit 0\n");

    let mut supervisor = BackendSupervisor::new(StopPolicy::new(Duration::from_secs(5)));
    supervisor.start(&backend).unwrap();

    // Backend exits on its own; stop must still reach Idle, fast.
    tokio::time::sleep(Duration::from_millis(200)).await;
    let started = Instant::now();
    supervisor.stop().await;

    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(supervisor.state(), LifecycleState::Idle);
}
