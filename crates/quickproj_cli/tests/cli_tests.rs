//! End-to-end tests for the `quickproj` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn quickproj(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quickproj").unwrap();
    cmd.env("HOME", home)
        .env_remove("QUICKPROJ_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a config into a fresh temp dir; projects go to `<tmp>/projects`.
fn write_config(templates: serde_json::Value, editor: serde_json::Value) -> (TempDir, String) {
    let tmp = tempdir().unwrap();
    let base = tmp.path().join("projects");
    fs::create_dir(&base).unwrap();

    let config = serde_json::json!({
        "base_instantiation_directory": base,
        "templates": templates,
        "editor": { "command": editor }
    });
    let path = tmp.path().join("config.json");
    fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    (tmp, path.to_string_lossy().into_owned())
}

#[test]
fn test_validate_accepts_good_config() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "Rust", "init_steps": [["cargo", "init"]] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["validate", "--config-path", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config is valid"));
}

#[test]
fn test_validate_reports_field() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "Rust", "init_steps": [[]] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["validate", "--config-path", &config])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("templates[0].init_steps[0]"));
}

#[test]
fn test_missing_config_file() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("nope.json");

    quickproj(tmp.path())
        .args(["list", "--config-path", missing.to_str().unwrap()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope.json"));
}

#[test]
fn test_list_bootstraps_default_config() {
    let home = tempdir().unwrap();

    quickproj(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Python Application (UV)"));

    assert!(home.path().join(".quick-proj").join("config.json").is_file());
    assert!(home.path().join("quick-projects").is_dir());
}

#[test]
fn test_out_of_range_index() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "Only", "init_steps": [] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["--config-path", &config, "--template-index", "3", "--project-name", "demo"])
        .assert()
        .code(4);

    assert!(!tmp.path().join("projects").join("demo").exists());
}

#[test]
fn test_unknown_template_name_lists_valid_names() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "Rust", "init_steps": [] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["new", "--config-path", &config, "--template-name", "Go"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("\"Rust\""));
}

#[test]
fn test_new_flags_before_subcommand_rejected() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "T", "init_steps": [] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["--project-name", "demo", "--no-editor", "new", "--config-path", &config, "-t", "T"])
        .assert()
        .code(2);

    let created: Vec<_> = fs::read_dir(tmp.path().join("projects")).unwrap().collect();
    assert!(created.is_empty());
}

#[test]
fn test_unknown_flag_is_invalid_args() {
    let tmp = tempdir().unwrap();

    quickproj(tmp.path())
        .args(["list", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_help_exits_successfully() {
    let tmp = tempdir().unwrap();

    quickproj(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_existing_file_at_target() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "T", "init_steps": [["touch", "x"]] }]),
        serde_json::json!(["code"]),
    );
    fs::write(tmp.path().join("projects").join("demo"), "file").unwrap();

    quickproj(tmp.path())
        .args(["--config-path", &config, "-t", "T", "-p", "demo", "--no-editor"])
        .assert()
        .code(5);
}

#[cfg(unix)]
#[test]
fn test_new_runs_steps_in_project_dir() {
    let (tmp, config) = write_config(
        serde_json::json!([{
            "name": "Python",
            "init_steps": [["sh", "-c", "echo hello > out.txt"]]
        }]),
        serde_json::json!(["true"]),
    );

    quickproj(tmp.path())
        .args(["--config-path", &config, "-t", "Python", "-p", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo' created"));

    let out = tmp.path().join("projects").join("demo").join("out.txt");
    assert_eq!(fs::read_to_string(out).unwrap().trim(), "hello");
}

#[cfg(unix)]
#[test]
fn test_failing_step_exit_code_and_message() {
    let (tmp, config) = write_config(
        serde_json::json!([{
            "name": "Broken",
            "init_steps": [["true"], ["sh", "-c", "echo kaput >&2; exit 7"], ["touch", "never"]]
        }]),
        serde_json::json!(["true"]),
    );

    quickproj(tmp.path())
        .args([
            "new",
            "--config-path",
            &config,
            "-t",
            "Broken",
            "-p",
            "demo",
            "--capture-output",
        ])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("index 1"))
        .stderr(predicate::str::contains("kaput"));

    let project = tmp.path().join("projects").join("demo");
    assert!(project.is_dir());
    assert!(!project.join("never").exists());
}

#[cfg(unix)]
#[test]
fn test_editor_failure_is_a_warning() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "T", "init_steps": [["true"]] }]),
        serde_json::json!(["quickproj-no-such-editor-binary"]),
    );

    quickproj(tmp.path())
        .args(["--config-path", &config, "-t", "T", "-p", "demo"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn test_dry_run_creates_nothing() {
    let (tmp, config) = write_config(
        serde_json::json!([{ "name": "T", "init_steps": [["touch", "x"]] }]),
        serde_json::json!(["code"]),
    );

    quickproj(tmp.path())
        .args(["--config-path", &config, "-t", "T", "-p", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing was created"));

    assert!(!tmp.path().join("projects").join("demo").exists());
}
