//! quickproj CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Config error
//! - 4: Template selection error
//! - 5: Filesystem error
//! - 6: Init step failed

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quickproj_config::ConfigError;
use quickproj_core::{CoreError, FilesystemError, SelectionError, StepExecutionError};

mod commands;

use commands::{Cli, Commands};

/// Process exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const CONFIG_ERROR: u8 = 3;
    pub const SELECTION_ERROR: u8 = 4;
    pub const FILESYSTEM_ERROR: u8 = 5;
    pub const STEP_FAILED: u8 = 6;
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_directives = if verbose {
        "quickproj=debug,warn"
    } else if quiet {
        "warn"
    } else {
        "quickproj=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    // Ignore the error if a subscriber is already installed.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() {
                ExitCodes::INVALID_ARGS
            } else {
                ExitCodes::SUCCESS
            });
        }
    };
    init_logging(cli.verbose, cli.quiet);

    let config_path = cli.config_path;
    let result = match cli.command {
        None => commands::new::execute(config_path, cli.new),
        Some(Commands::New(args)) => commands::new::execute(config_path, args),
        Some(Commands::List(args)) => commands::list::execute(config_path, args),
        Some(Commands::Validate(args)) => commands::validate::execute(config_path, args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(categorize_error(&e))
        }
    }
}

/// Map the root cause of an error to an exit code.
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(core) = cause.downcast_ref::<CoreError>() {
            return match core {
                CoreError::Config(_) => ExitCodes::CONFIG_ERROR,
                CoreError::Selection(_) => ExitCodes::SELECTION_ERROR,
                CoreError::Filesystem(_) => ExitCodes::FILESYSTEM_ERROR,
                CoreError::Step(_) => ExitCodes::STEP_FAILED,
                // Editor failures surface as warnings, not errors.
                CoreError::EditorLaunch(_) => ExitCodes::GENERAL_ERROR,
            };
        }
        if cause.is::<ConfigError>() {
            return ExitCodes::CONFIG_ERROR;
        }
        if cause.is::<SelectionError>() {
            return ExitCodes::SELECTION_ERROR;
        }
        if cause.is::<FilesystemError>() {
            return ExitCodes::FILESYSTEM_ERROR;
        }
        if cause.is::<StepExecutionError>() {
            return ExitCodes::STEP_FAILED;
        }
    }
    ExitCodes::GENERAL_ERROR
}
