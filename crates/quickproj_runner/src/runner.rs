//! Command runner trait and types.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickproj_config::ShellCommand;

use crate::error::RunnerResult;

/// Result of running one command to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepOutcome {
    /// Exit code; `-1` when the process was terminated by a signal.
    pub exit_code: i32,
    /// Captured stdout (empty unless output capture is enabled)
    pub stdout: String,
    /// Captured stderr (empty unless output capture is enabled)
    pub stderr: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl StepOutcome {
    /// Check if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Get combined output (stdout + stderr).
    pub fn combined_output(&self) -> String {
        if self.stdout.is_empty() {
            self.stderr.clone()
        } else if self.stderr.is_empty() {
            self.stdout.clone()
        } else {
            format!("{}\n{}", self.stdout, self.stderr)
        }
    }
}

/// Executes commands as child processes.
pub trait CommandRunner {
    /// Run `command` with `cwd` as the child's working directory and block
    /// until it exits. A non-zero exit is reported through
    /// [`StepOutcome::exit_code`]; `Err` means the process never ran.
    fn run(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<StepOutcome>;

    /// Start `command` without waiting for it. Returns the child's pid.
    fn spawn_detached(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<u32>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<StepOutcome> {
        (**self).run(command, cwd)
    }

    fn spawn_detached(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<u32> {
        (**self).spawn_detached(command, cwd)
    }
}
