//! Mock command runner for testing.
//!
//! Provides a configurable implementation of [`CommandRunner`] that records
//! every invocation and returns scripted results, so callers can be tested
//! without launching real processes.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use quickproj_config::ShellCommand;

use crate::error::{RunnerError, RunnerResult};
use crate::runner::{CommandRunner, StepOutcome};

/// Scripted result for one `run` call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// The command ran and exited with this code.
    Exit {
        exit_code: i32,
        stdout: String,
        stderr: String,
    },
    /// The command could not be launched.
    SpawnError(String),
}

impl MockResponse {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::Exit {
            exit_code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::Exit {
            exit_code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn spawn_error(message: impl Into<String>) -> Self {
        Self::SpawnError(message.into())
    }
}

/// Which runner method was invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Run,
    SpawnDetached,
}

/// Captured call information for verification.
#[derive(Debug, Clone)]
pub struct CapturedCall {
    pub kind: CallKind,
    pub command: ShellCommand,
    pub cwd: PathBuf,
}

type SideEffect = Arc<dyn Fn(&ShellCommand, &Path) + Send + Sync>;

/// Mock command runner.
///
/// `run` responses are consumed in call order; once the script is exhausted
/// every further call succeeds with empty output.
#[derive(Clone, Default)]
pub struct MockRunner {
    /// Scripted responses for `run`
    responses: Arc<RwLock<Vec<MockResponse>>>,
    /// Index of the next response to hand out
    response_index: Arc<AtomicUsize>,
    /// Every call made, in order
    captured_calls: Arc<RwLock<Vec<CapturedCall>>>,
    /// Hook invoked after each successful `run`
    side_effect: Arc<RwLock<Option<SideEffect>>>,
    /// Error message returned by `spawn_detached` when set
    detached_failure: Arc<RwLock<Option<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response for the next `run` call.
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.write().push(response);
        self
    }

    /// Replace the scripted responses.
    pub fn with_responses(self, responses: Vec<MockResponse>) -> Self {
        *self.responses.write() = responses;
        self
    }

    /// Invoke `effect` for every `run` call that "executes" successfully.
    pub fn with_side_effect<F>(self, effect: F) -> Self
    where
        F: Fn(&ShellCommand, &Path) + Send + Sync + 'static,
    {
        *self.side_effect.write() = Some(Arc::new(effect));
        self
    }

    /// Make `spawn_detached` fail with the given message.
    pub fn fail_detached(self, message: impl Into<String>) -> Self {
        *self.detached_failure.write() = Some(message.into());
        self
    }

    pub fn clear_calls(&self) {
        self.captured_calls.write().clear();
    }

    pub fn get_calls(&self) -> Vec<CapturedCall> {
        self.captured_calls.read().clone()
    }

    pub fn call_count(&self) -> usize {
        self.captured_calls.read().len()
    }

    /// Commands passed to `run`, in invocation order.
    pub fn run_commands(&self) -> Vec<ShellCommand> {
        self.calls_of(CallKind::Run)
            .into_iter()
            .map(|c| c.command)
            .collect()
    }

    pub fn detached_commands(&self) -> Vec<ShellCommand> {
        self.calls_of(CallKind::SpawnDetached)
            .into_iter()
            .map(|c| c.command)
            .collect()
    }

    fn calls_of(&self, kind: CallKind) -> Vec<CapturedCall> {
        self.captured_calls
            .read()
            .iter()
            .filter(|c| c.kind == kind)
            .cloned()
            .collect()
    }

    fn record_call(&self, kind: CallKind, command: &ShellCommand, cwd: &Path) {
        self.captured_calls.write().push(CapturedCall {
            kind,
            command: command.clone(),
            cwd: cwd.to_path_buf(),
        });
    }

    fn next_response(&self) -> MockResponse {
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        self.responses
            .read()
            .get(index)
            .cloned()
            .unwrap_or_else(|| MockResponse::success(""))
    }

    fn program_of(command: &ShellCommand) -> String {
        command.program().unwrap_or_default().to_string()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<StepOutcome> {
        self.record_call(CallKind::Run, command, cwd);

        if command.program().map_or(true, str::is_empty) {
            return Err(RunnerError::EmptyCommand);
        }

        match self.next_response() {
            MockResponse::SpawnError(message) => Err(RunnerError::SpawnFailed {
                program: Self::program_of(command),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            }),
            MockResponse::Exit {
                exit_code,
                stdout,
                stderr,
            } => {
                if exit_code == 0 {
                    if let Some(effect) = self.side_effect.read().clone() {
                        effect(command, cwd);
                    }
                }
                let now = Utc::now();
                Ok(StepOutcome {
                    exit_code,
                    stdout,
                    stderr,
                    started_at: now,
                    finished_at: now,
                    duration_ms: 0,
                })
            }
        }
    }

    fn spawn_detached(&self, command: &ShellCommand, cwd: &Path) -> RunnerResult<u32> {
        self.record_call(CallKind::SpawnDetached, command, cwd);

        if let Some(message) = self.detached_failure.read().clone() {
            return Err(RunnerError::SpawnFailed {
                program: Self::program_of(command),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            });
        }

        Ok(4242)
    }
}
