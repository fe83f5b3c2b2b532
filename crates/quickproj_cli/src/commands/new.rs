//! New command - Instantiate a project template.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use quickproj_config::ConfigLoader;
use quickproj_core::{EditorOutcome, NewProjectRequest, QuickProject, TemplateChoice, TerminalPrompter};
use quickproj_runner::{SystemRunner, SystemRunnerOptions};

#[derive(Args, Debug, Default)]
pub struct NewArgs {
    /// Name of the template to instantiate (prompts when omitted)
    #[arg(short = 't', long)]
    pub template_name: Option<String>,

    /// Zero-based index of the template to instantiate
    #[arg(short = 'i', long, conflicts_with = "template_name")]
    pub template_index: Option<usize>,

    /// Name of the project directory (generated when omitted)
    #[arg(short = 'p', long)]
    pub project_name: Option<String>,

    /// Do not open an editor afterwards
    #[arg(long)]
    pub no_editor: bool,

    /// Show what would be done without creating anything
    #[arg(long)]
    pub dry_run: bool,

    /// Capture step output instead of streaming it to the terminal
    #[arg(long)]
    pub capture_output: bool,
}

impl NewArgs {
    fn template_choice(&self) -> TemplateChoice {
        match (&self.template_name, self.template_index) {
            (Some(name), _) => TemplateChoice::Name(name.clone()),
            (None, Some(index)) => TemplateChoice::Index(index),
            (None, None) => TemplateChoice::Interactive,
        }
    }
}

pub fn execute(config_path: Option<PathBuf>, args: NewArgs) -> Result<()> {
    let loader = ConfigLoader::resolve(config_path)?;
    let config = loader.load()?;
    info!("Using config: {}", loader.path().display());

    let mut request = NewProjectRequest::new(args.template_choice())
        .open_editor(!args.no_editor)
        .dry_run(args.dry_run);
    if let Some(name) = &args.project_name {
        request = request.project_name(name.clone());
    }

    let runner = SystemRunner::new(SystemRunnerOptions::new().capture_output(args.capture_output));
    let summary = QuickProject::new(&config, &runner)
        .run(&request, &TerminalPrompter)
        .context("Project instantiation failed")?;

    let report = &summary.report;
    if report.dry_run {
        println!("🔍 Dry run for template '{}' finished, nothing was created.", report.template);
        println!();
        println!("Would create: {}", report.project_dir.display());
        return Ok(());
    }

    println!(
        "✅ Project '{}' created from template '{}'!",
        report.project_name, report.template
    );
    println!();
    println!("Location: {}", report.project_dir.display());
    println!("Steps run: {}", report.steps.len());

    match &summary.editor {
        EditorOutcome::Launched { command, .. } => println!("Editor: {}", command),
        EditorOutcome::Skipped => {}
        EditorOutcome::Failed(e) => eprintln!("⚠️  Warning: {}", e),
    }

    Ok(())
}
