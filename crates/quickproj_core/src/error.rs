//! Error types for the core module.

use std::path::PathBuf;

use thiserror::Error;

use quickproj_config::{ConfigError, ShellCommand};
use quickproj_runner::RunnerError;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while picking a template.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No templates defined, check your config")]
    NoTemplates,

    #[error("Template index {index} is out of range ({count} templates available)")]
    OutOfRange { index: usize, count: usize },

    #[error(
        "Project template \"{name}\" does not exist, check your config. Valid template names are: {}",
        quoted_list(.available)
    )]
    UnknownTemplate { name: String, available: Vec<String> },

    #[error("Template selection was cancelled")]
    Cancelled,

    #[error("Template prompt failed: {0}")]
    Prompt(String),
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while preparing the project directory.
#[derive(Error, Debug)]
pub enum FilesystemError {
    #[error("Invalid project name \"{0}\": must be a single directory name")]
    InvalidProjectName(String),

    #[error("Project directory {} already exists and is not empty", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Project path {} exists and is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Failed to create project directory {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to inspect {}: {source}", .path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not find an unused project name in {} after {attempts} attempts", .base.display())]
    NameExhausted { base: PathBuf, attempts: usize },
}

/// Why an init step failed.
#[derive(Error, Debug)]
pub enum StepFailure {
    #[error("exited with code {exit_code}{}", stderr_suffix(.stderr))]
    NonZeroExit { exit_code: i32, stderr: String },

    #[error("could not be launched: {0}")]
    Launch(#[source] RunnerError),
}

fn stderr_suffix(stderr: &str) -> String {
    match stderr.trim().lines().last() {
        Some(line) if !line.is_empty() => format!(": {}", line),
        _ => String::new(),
    }
}

/// An init step failed; carries the zero-based step index and the command.
#[derive(Error, Debug)]
#[error("Step {} (index {index}) failed: `{command}` {reason}", .index + 1)]
pub struct StepExecutionError {
    pub index: usize,
    pub command: ShellCommand,
    #[source]
    pub reason: StepFailure,
}

/// The editor could not be started. Never fatal to a run.
#[derive(Error, Debug)]
#[error("Failed to launch editor `{command}`: {source}")]
pub struct EditorLaunchError {
    pub command: ShellCommand,
    #[source]
    pub source: RunnerError,
}

/// Errors that can occur during a quickproj run.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Filesystem(#[from] FilesystemError),

    #[error(transparent)]
    Step(#[from] StepExecutionError),

    #[error(transparent)]
    EditorLaunch(#[from] EditorLaunchError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_template_lists_names() {
        let err = SelectionError::UnknownTemplate {
            name: "Go".to_string(),
            available: vec!["Rust".to_string(), "Python".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Project template \"Go\" does not exist, check your config. \
             Valid template names are: \"Rust\", \"Python\""
        );
    }

    #[test]
    fn test_step_error_message() {
        let err = StepExecutionError {
            index: 1,
            command: ShellCommand::new(["npm", "install"]),
            reason: StepFailure::NonZeroExit {
                exit_code: 1,
                stderr: "npm WARN\nnpm ERR! missing package.json\n".to_string(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Step 2 (index 1) failed: `npm install` exited with code 1: npm ERR! missing package.json"
        );
    }
}
