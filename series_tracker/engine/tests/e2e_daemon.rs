//! E2E tests for the `series-trackerd` binary
//!
//! These launch the built daemon as a child process. Startup failures are
//! checked through the exit status and the error printed to stderr.

use std::process::{Child, Command, Output, Stdio};
use std::time::Duration;

const DAEMON: &str = env!("CARGO_BIN_EXE_series-trackerd");

/// Daemon command with a clean storage environment
fn daemon() -> Command {
    let mut command = Command::new(DAEMON);
    for var in [
        "ST_STORAGE_MODE",
        "ST_LOG_LEVEL",
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
    ] {
        command.env_remove(var);
    }
    command.env("RUST_LOG", "warn");
    command
}

fn run(command: &mut Command) -> (Output, String) {
    let output = command
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .expect("failed to launch series-trackerd");
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stderr)
}

/// Kills the daemon when the test ends, even on panic
struct DaemonGuard(Child);

impl Drop for DaemonGuard {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

#[test]
fn test_invalid_storage_mode_exits_with_error() {
    let (output, stderr) = run(daemon().env("ST_STORAGE_MODE", "mongo"));

    assert!(!output.status.success());
    assert!(stderr.contains("Invalid daemon configuration"), "stderr: {}", stderr);
    assert!(stderr.contains("Invalid storage mode 'mongo'"), "stderr: {}", stderr);
}

#[test]
fn test_postgres_mode_without_credentials_exits_with_error() {
    let (output, stderr) = run(daemon().env("ST_STORAGE_MODE", "postgres"));

    assert!(!output.status.success());
    assert!(stderr.contains("DB_USER"), "stderr: {}", stderr);
}

#[test]
fn test_unreachable_database_exits_with_error() {
    let (output, stderr) = run(daemon()
        .env("ST_STORAGE_MODE", "postgres")
        .env("DB_HOST", "127.0.0.1")
        .env("DB_PORT", "1")
        .env("DB_USER", "tracker")
        .env("DB_NAME", "series"));

    assert!(!output.status.success());
    assert!(
        stderr.contains("Failed to connect to PostgreSQL"),
        "stderr: {}",
        stderr
    );
}

#[tokio::test]
async fn test_daemon_serves_api_on_fixed_port() {
    let child = daemon()
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to launch series-trackerd");
    let mut guard = DaemonGuard(child);

    let client = reqwest::Client::new();
    let mut listed = None;
    for _ in 0..50 {
        if let Some(status) = guard.0.try_wait().unwrap() {
            panic!("series-trackerd exited early with {}", status);
        }
        if let Ok(response) = client.get("http://127.0.0.1:8080/api/series").send().await {
            listed = Some(response);
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    let response = listed.expect("series-trackerd never answered on port 8080");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "[]");
}
