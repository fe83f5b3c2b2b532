//! `std::process` backed command runner.
//!
//! Tokens are handed to the OS as argv without any shell in between. The
//! program token is looked up on `PATH` first (which also picks up `.cmd`
//! and `.bat` shims on Windows); if the lookup fails the raw token is used.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use chrono::Utc;
use tracing::{debug, error, info};

use quickproj_config::ShellCommand;

use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandRunner, StepOutcome};

/// System runner options.
#[derive(Debug, Clone, Default)]
pub struct SystemRunnerOptions {
    /// Capture child stdout/stderr instead of inheriting the terminal.
    pub capture_output: bool,
}

impl SystemRunnerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capture_output(mut self, enabled: bool) -> Self {
        self.capture_output = enabled;
        self
    }
}

/// Resolve a program token to an executable path.
///
/// Tokens containing a path separator are returned untouched so relative
/// paths keep resolving against the child's working directory.
pub fn resolve_program(program: &str) -> PathBuf {
    let has_separator = program.contains('/') || program.contains(std::path::MAIN_SEPARATOR);
    if has_separator {
        return PathBuf::from(program);
    }

    match which::which(program) {
        Ok(path) => {
            debug!("Resolved `{}` to {}", program, path.display());
            path
        }
        Err(_) => {
            debug!("`{}` not found on PATH, using it as-is", program);
            PathBuf::from(program)
        }
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    options: SystemRunnerOptions,
}

impl SystemRunner {
    pub fn new(options: SystemRunnerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SystemRunnerOptions {
        &self.options
    }

    fn build_command(command: &ShellCommand, cwd: &Path) -> RunnerResult<(String, Command)> {
        let program = command
            .program()
            .filter(|p| !p.is_empty())
            .ok_or(RunnerError::EmptyCommand)?;

        let mut cmd = Command::new(resolve_program(program));
        cmd.args(command.args()).current_dir(cwd);
        Ok((program.to_string(), cmd))
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new(SystemRunnerOptions::default())
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<StepOutcome> {
        let (program, mut cmd) = Self::build_command(command, cwd)?;
        debug!("Executing in {}: {}", cwd.display(), command);

        let started_at = Utc::now();
        let output = if self.options.capture_output {
            cmd.stdin(Stdio::null())
                .output()
                .map_err(|source| RunnerError::SpawnFailed {
                    program: program.clone(),
                    source,
                })?
        } else {
            let mut child = cmd.spawn().map_err(|source| RunnerError::SpawnFailed {
                program: program.clone(),
                source,
            })?;
            let status = child.wait().map_err(|source| RunnerError::WaitFailed {
                program: program.clone(),
                source,
            })?;
            Output {
                status,
                stdout: Vec::new(),
                stderr: Vec::new(),
            }
        };
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;

        let exit_code = output.status.code().unwrap_or(-1);
        if exit_code == 0 {
            debug!("`{}` completed in {}ms", program, duration_ms);
        } else {
            error!(
                "`{}` failed with exit code {} after {}ms",
                program, exit_code, duration_ms
            );
        }

        Ok(StepOutcome {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            started_at,
            finished_at,
            duration_ms,
        })
    }

    fn spawn_detached(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<u32> {
        let (program, mut cmd) = Self::build_command(command, cwd)?;
        debug!("Spawning detached: {}", command);

        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| RunnerError::SpawnFailed { program, source })?;

        info!("Started `{}` (pid {})", command, child.id());
        Ok(child.id())
    }
}
