//! The quickproj pipeline: select a template, instantiate it, open the
//! editor.

use tracing::{info, warn};

use quickproj_config::{Config, ShellCommand};
use quickproj_runner::CommandRunner;

use crate::editor::{editor_invocation, resolve_editor, EditorLauncher};
use crate::error::{CoreResult, EditorLaunchError};
use crate::instantiator::{InstantiateOptions, InstantiationReport, ProjectInstantiator};
use crate::selector::{Prompter, TemplateChoice, TemplateSelector};

/// Everything a single run needs besides the config.
#[derive(Debug, Clone)]
pub struct NewProjectRequest {
    pub template: TemplateChoice,
    pub project_name: Option<String>,
    pub open_editor: bool,
    pub dry_run: bool,
}

impl NewProjectRequest {
    pub fn new(template: TemplateChoice) -> Self {
        Self {
            template,
            project_name: None,
            open_editor: true,
            dry_run: false,
        }
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn open_editor(mut self, enabled: bool) -> Self {
        self.open_editor = enabled;
        self
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}

/// What happened to the editor after a successful instantiation.
#[derive(Debug)]
pub enum EditorOutcome {
    Launched { command: ShellCommand, pid: u32 },
    Skipped,
    Failed(EditorLaunchError),
}

/// Result of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: InstantiationReport,
    pub editor: EditorOutcome,
}

/// Runs the pipeline for one loaded config.
pub struct QuickProject<'a, R> {
    config: &'a Config,
    runner: R,
}

impl<'a, R: CommandRunner> QuickProject<'a, R> {
    pub fn new(config: &'a Config, runner: R) -> Self {
        Self { config, runner }
    }

    /// Select, instantiate and open. Editor failures are reported in the
    /// summary rather than as an error.
    pub fn run(&self, request: &NewProjectRequest, prompter: &dyn Prompter) -> CoreResult<RunSummary> {
        let template =
            TemplateSelector::new(&self.config.templates).select(&request.template, prompter)?;
        info!("Using template: {}", template.name);

        let instantiator = ProjectInstantiator::new(
            &self.config.base_instantiation_directory,
            &self.runner,
        )
        .with_options(InstantiateOptions::new().dry_run(request.dry_run));
        let report = instantiator.instantiate(template, request.project_name.as_deref())?;

        let editor = resolve_editor(self.config, template);
        let editor = if !request.open_editor {
            EditorOutcome::Skipped
        } else if request.dry_run {
            info!(
                "[DRY-RUN] Would open editor: {}",
                editor_invocation(editor, &report.project_dir)
            );
            EditorOutcome::Skipped
        } else {
            match EditorLauncher::new(&self.runner).launch(editor, &report.project_dir) {
                Ok(pid) => EditorOutcome::Launched {
                    command: editor_invocation(editor, &report.project_dir),
                    pid,
                },
                Err(e) => {
                    warn!("{}", e);
                    EditorOutcome::Failed(e)
                }
            }
        };

        Ok(RunSummary { report, editor })
    }
}
