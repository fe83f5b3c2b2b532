//! Validate command - Check a config file and report every problem.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use quickproj_config::{ConfigError, ConfigLoader};

#[derive(Args)]
pub struct ValidateArgs {
    /// Treat warnings as errors
    #[arg(long)]
    strict: bool,
}

pub fn execute(config_path: Option<PathBuf>, args: ValidateArgs) -> Result<()> {
    let loader = ConfigLoader::resolve(config_path)?;
    info!("Validating {}", loader.path().display());

    let (config, report) = loader.check()?;

    println!("📋 {}", loader.path().display());
    println!("   {} template(s)", config.templates.len());

    for error in &report.errors {
        println!("   ❌ {}", error);
    }
    for warning in &report.warnings {
        println!("   ⚠️  {}", warning);
    }

    let failing = report
        .first_error()
        .or_else(|| report.warnings.first().filter(|_| args.strict));

    if let Some(issue) = failing {
        println!();
        println!(
            "Results: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
        return Err(ConfigError::Invalid {
            path: loader.path().to_path_buf(),
            field: issue.field.clone(),
            message: issue.message.clone(),
        }
        .into());
    }

    println!("✅ Config is valid");
    Ok(())
}
