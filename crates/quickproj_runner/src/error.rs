//! Error types for the runner module.

use thiserror::Error;

/// Result type alias for runner operations.
pub type RunnerResult<T> = Result<T, RunnerError>;

/// Errors that can occur while running a child process.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Command has no program token")]
    EmptyCommand,

    #[error("Failed to launch `{program}`: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to wait for `{program}`: {source}")]
    WaitFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}
