//! Project instantiation.
//!
//! Creates the project directory and runs a template's init steps inside
//! it, strictly in order. The first step that fails to launch or exits
//! non-zero ends the run; nothing is retried and nothing is rolled back,
//! so a partially initialized directory is left in place for inspection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info};

use quickproj_config::ProjectTemplate;
use quickproj_runner::{CommandRunner, StepOutcome};

use crate::error::{CoreResult, FilesystemError, StepExecutionError, StepFailure};
use crate::naming;

/// What `prepare_directory` found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectoryState {
    Created,
    ReusedEmpty,
}

/// Instantiation options.
#[derive(Debug, Clone, Default)]
pub struct InstantiateOptions {
    /// Log what would happen without touching the filesystem or spawning
    /// any process.
    pub dry_run: bool,
}

impl InstantiateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }
}

/// Result of a successful instantiation.
#[derive(Debug, Clone, Serialize)]
pub struct InstantiationReport {
    pub template: String,
    pub project_name: String,
    pub project_dir: PathBuf,
    /// `None` in dry-run mode.
    pub directory: Option<DirectoryState>,
    /// One outcome per executed step; empty in dry-run mode.
    pub steps: Vec<StepOutcome>,
    pub dry_run: bool,
}

/// Make sure `path` is an empty directory, creating it if absent.
pub fn prepare_directory(path: &Path) -> Result<DirectoryState, FilesystemError> {
    match fs::metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::create_dir(path).map_err(|source| FilesystemError::Create {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(DirectoryState::Created)
        }
        Err(source) => Err(FilesystemError::Inspect {
            path: path.to_path_buf(),
            source,
        }),
        Ok(meta) if meta.is_dir() => {
            let mut entries = fs::read_dir(path).map_err(|source| FilesystemError::Inspect {
                path: path.to_path_buf(),
                source,
            })?;
            if entries.next().is_none() {
                Ok(DirectoryState::ReusedEmpty)
            } else {
                Err(FilesystemError::AlreadyExists(path.to_path_buf()))
            }
        }
        Ok(_) => Err(FilesystemError::NotADirectory(path.to_path_buf())),
    }
}

/// Creates projects under a base directory using a command runner.
pub struct ProjectInstantiator<R> {
    base_dir: PathBuf,
    runner: R,
    options: InstantiateOptions,
}

impl<R: CommandRunner> ProjectInstantiator<R> {
    pub fn new(base_dir: impl Into<PathBuf>, runner: R) -> Self {
        Self {
            base_dir: base_dir.into(),
            runner,
            options: InstantiateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: InstantiateOptions) -> Self {
        self.options = options;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Work out the project name and directory. A supplied name must be a
    /// single path component; without one, an unused name is generated.
    pub fn resolve_target(&self, project_name: Option<&str>) -> CoreResult<(String, PathBuf)> {
        match project_name {
            Some(name) => {
                naming::validate_project_name(name)?;
                Ok((name.to_string(), self.base_dir.join(name)))
            }
            None => Ok(naming::unused_project_dir(&self.base_dir)?),
        }
    }

    /// Run every init step of `template` inside `project_dir`, in order,
    /// stopping at the first failure.
    pub fn run_steps(
        &self,
        template: &ProjectTemplate,
        project_dir: &Path,
    ) -> Result<Vec<StepOutcome>, StepExecutionError> {
        let total = template.init_steps.len();
        let mut outcomes = Vec::with_capacity(total);

        for (index, step) in template.init_steps.iter().enumerate() {
            info!("Step {}/{}: {}", index + 1, total, step);

            let outcome = self.runner.run(step, project_dir).map_err(|e| {
                error!("Step {} could not be launched: {}", index + 1, e);
                StepExecutionError {
                    index,
                    command: step.clone(),
                    reason: StepFailure::Launch(e),
                }
            })?;

            if !outcome.success() {
                error!("Step {} exited with code {}", index + 1, outcome.exit_code);
                return Err(StepExecutionError {
                    index,
                    command: step.clone(),
                    reason: StepFailure::NonZeroExit {
                        exit_code: outcome.exit_code,
                        stderr: outcome.stderr,
                    },
                });
            }

            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    /// Create the project directory and run the template's init steps.
    pub fn instantiate(
        &self,
        template: &ProjectTemplate,
        project_name: Option<&str>,
    ) -> CoreResult<InstantiationReport> {
        let (project_name, project_dir) = self.resolve_target(project_name)?;

        if self.options.dry_run {
            info!("[DRY-RUN] Would create project folder at: {}", project_dir.display());
            for (index, step) in template.init_steps.iter().enumerate() {
                info!("[DRY-RUN] Step {}: {}", index + 1, step);
            }
            return Ok(InstantiationReport {
                template: template.name.clone(),
                project_name,
                project_dir,
                directory: None,
                steps: Vec::new(),
                dry_run: true,
            });
        }

        let state = prepare_directory(&project_dir)?;
        match state {
            DirectoryState::Created => {
                info!("Created project folder at: {}", project_dir.display())
            }
            DirectoryState::ReusedEmpty => {
                info!("Using existing empty folder at: {}", project_dir.display())
            }
        }

        let steps = self.run_steps(template, &project_dir)?;
        info!(
            "Instantiated template \"{}\" ({} steps)",
            template.name,
            steps.len()
        );

        Ok(InstantiationReport {
            template: template.name.clone(),
            project_name,
            project_dir,
            directory: Some(state),
            steps,
            dry_run: false,
        })
    }
}
