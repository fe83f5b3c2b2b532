//! Integration tests for the process runners.

use std::fs;
use std::path::Path;

use quickproj_config::ShellCommand;
use quickproj_runner::{CallKind, CommandRunner, MockResponse, MockRunner, RunnerError};
#[cfg(unix)]
use quickproj_runner::{SystemRunner, SystemRunnerOptions};
use tempfile::tempdir;

/// Sequential steps see each other's filesystem effects.
#[cfg(unix)]
#[test]
fn test_system_runner_sequential_effects_visible() {
    let dir = tempdir().unwrap();
    let runner = SystemRunner::new(SystemRunnerOptions::new().capture_output(true));

    let write = ShellCommand::new(["sh", "-c", "printf seed > a.txt"]);
    let read = ShellCommand::new(["cat", "a.txt"]);

    assert!(runner.run(&write, dir.path()).unwrap().success());
    let outcome = runner.run(&read, dir.path()).unwrap();
    assert_eq!(outcome.stdout, "seed");
}

#[cfg(unix)]
#[test]
fn test_system_runner_does_not_change_own_cwd() {
    let dir = tempdir().unwrap();
    let before = std::env::current_dir().unwrap();

    SystemRunner::default()
        .run(&ShellCommand::new(["true"]), dir.path())
        .unwrap();

    assert_eq!(std::env::current_dir().unwrap(), before);
}

#[cfg(unix)]
#[test]
fn test_spawn_detached_returns_pid() {
    let dir = tempdir().unwrap();
    let pid = SystemRunner::default()
        .spawn_detached(&ShellCommand::new(["true"]), dir.path())
        .unwrap();
    assert!(pid > 0);
}

#[test]
fn test_mock_runner_side_effect_writes_into_cwd() {
    let dir = tempdir().unwrap();
    let runner = MockRunner::new().with_side_effect(|cmd, cwd: &Path| {
        let name = format!("{}.ran", cmd.program().unwrap());
        fs::write(cwd.join(name), "").unwrap();
    });

    runner.run(&ShellCommand::new(["git", "init"]), dir.path()).unwrap();

    assert!(dir.path().join("git.ran").exists());
    let calls = runner.get_calls();
    assert_eq!(calls[0].kind, CallKind::Run);
    assert_eq!(calls[0].cwd, dir.path());
}

#[test]
fn test_mock_runner_failure_skips_side_effect() {
    let dir = tempdir().unwrap();
    let runner = MockRunner::new()
        .add_response(MockResponse::failure(1, "nope"))
        .with_side_effect(|_, cwd: &Path| fs::write(cwd.join("marker"), "").unwrap());

    let outcome = runner.run(&ShellCommand::new(["make"]), dir.path()).unwrap();
    assert!(!outcome.success());
    assert!(!dir.path().join("marker").exists());
}

#[test]
fn test_mock_runner_rejects_empty_command() {
    let runner = MockRunner::new();
    let err = runner
        .run(&ShellCommand::default(), Path::new("/tmp"))
        .unwrap_err();
    assert!(matches!(err, RunnerError::EmptyCommand));
}
