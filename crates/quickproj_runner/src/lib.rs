//! # quickproj_runner
//!
//! Child process execution for quickproj.
//!
//! Init steps are run as direct child processes: the token list of a
//! [`ShellCommand`](quickproj_config::ShellCommand) becomes the argv, the
//! working directory is set on the child only, and the caller blocks until
//! the child exits. Editors are spawned detached and never waited on.
//!
//! # Features
//!
//! - **System runner**: `std::process` backed, with `PATH` lookup via `which`
//! - **Output modes**: inherit the terminal or capture stdout/stderr
//! - **Mock runner**: records every call for tests, with scripted results
//!
//! # Example
//!
//! ```rust,no_run
//! use quickproj_config::ShellCommand;
//! use quickproj_runner::{CommandRunner, SystemRunner, SystemRunnerOptions};
//! use std::path::Path;
//!
//! let runner = SystemRunner::new(SystemRunnerOptions::default());
//! let outcome = runner
//!     .run(&ShellCommand::new(["git", "init"]), Path::new("/tmp/demo"))
//!     .unwrap();
//! println!("Exit code: {}", outcome.exit_code);
//! ```

pub mod error;
pub mod mock;
pub mod runner;
pub mod system;

pub use error::{RunnerError, RunnerResult};
pub use mock::{CallKind, CapturedCall, MockResponse, MockRunner};
pub use runner::{CommandRunner, StepOutcome};
pub use system::{resolve_program, SystemRunner, SystemRunnerOptions};
