//! CLI command definitions.
//!
//! Running `quickproj` without a subcommand instantiates a template, the
//! same as `quickproj new`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod list;
pub mod new;
pub mod validate;

/// quickproj - create projects from reusable command templates
#[derive(Parser)]
#[command(name = "quickproj")]
#[command(version, about = "quickproj - create projects from reusable command templates")]
#[command(long_about = r#"
quickproj reads a JSON config describing project templates. Instantiating a
template creates a new directory under the configured base directory, runs
the template's init steps inside it one after another, and opens the result
in your editor.

COMMANDS:
  new        → Instantiate a template (default when no command is given)
  list       → List the configured templates
  validate   → Check the config file and report problems

CONFIG:
  --config-path, then $QUICKPROJ_CONFIG, then ~/.quick-proj/config.json
  (created with defaults on first use).

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Config error
  4 - Template selection error
  5 - Filesystem error
  6 - Init step failed
"#)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to the config file
    #[arg(long, global = true, env = "QUICKPROJ_CONFIG")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub new: new::NewArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Instantiate a project template
    New(new::NewArgs),

    /// List configured templates
    List(list::ListArgs),

    /// Validate the config file
    Validate(validate::ValidateArgs),
}
