//! # quickproj_core
//!
//! Template selection and project instantiation for quickproj.
//!
//! A run is a straight line: pick a template from the loaded config, create
//! the project directory, run the template's init steps one after another
//! inside it, then open an editor on the result. All state is passed
//! explicitly; nothing here holds global configuration.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quickproj_config::ConfigLoader;
//! use quickproj_core::{NewProjectRequest, QuickProject, TemplateChoice, TerminalPrompter};
//! use quickproj_runner::SystemRunner;
//!
//! let config = ConfigLoader::new("config.json").load().unwrap();
//! let runner = SystemRunner::default();
//!
//! let request = NewProjectRequest::new(TemplateChoice::Name("Rust".into())).project_name("demo");
//! let summary = QuickProject::new(&config, &runner)
//!     .run(&request, &TerminalPrompter)
//!     .unwrap();
//! println!("Created {}", summary.report.project_dir.display());
//! ```

pub mod editor;
pub mod error;
pub mod instantiator;
pub mod naming;
pub mod project;
pub mod selector;

pub use editor::{editor_invocation, resolve_editor, EditorLauncher, PATH_PLACEHOLDER};
pub use error::{
    CoreError, CoreResult, EditorLaunchError, FilesystemError, SelectionError, StepExecutionError,
    StepFailure,
};
pub use instantiator::{
    prepare_directory, DirectoryState, InstantiateOptions, InstantiationReport, ProjectInstantiator,
};
pub use naming::{generate_project_name, validate_project_name};
pub use project::{EditorOutcome, NewProjectRequest, QuickProject, RunSummary};
pub use selector::{Prompter, TemplateChoice, TemplateSelector, TerminalPrompter};
