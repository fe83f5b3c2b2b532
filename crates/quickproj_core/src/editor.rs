//! Editor launching.

use std::path::Path;

use tracing::{info, warn};

use quickproj_config::{Config, EditorOptions, ProjectTemplate, ShellCommand};
use quickproj_runner::CommandRunner;

use crate::error::EditorLaunchError;

/// Token replaced by the project directory in editor commands.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Pick the editor for a template: its override if set, else the default.
/// The override replaces the default entirely.
pub fn resolve_editor<'a>(config: &'a Config, template: &'a ProjectTemplate) -> &'a EditorOptions {
    template.editor_override.as_ref().unwrap_or(&config.editor)
}

/// Build the editor argv for `project_dir`.
///
/// Every `{path}` inside a token is substituted. If no token contains the
/// placeholder the directory is appended as the last argument.
pub fn editor_invocation(editor: &EditorOptions, project_dir: &Path) -> ShellCommand {
    let dir = project_dir.to_string_lossy();
    let tokens = editor.command.tokens();

    if tokens.iter().any(|t| t.contains(PATH_PLACEHOLDER)) {
        tokens
            .iter()
            .map(|t| t.replace(PATH_PLACEHOLDER, &dir))
            .collect()
    } else {
        tokens
            .iter()
            .cloned()
            .chain(std::iter::once(dir.into_owned()))
            .collect()
    }
}

/// Starts editors without waiting for them.
pub struct EditorLauncher<R> {
    runner: R,
}

impl<R: CommandRunner> EditorLauncher<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Open `project_dir` in `editor`. Returns the editor's pid.
    pub fn launch(&self, editor: &EditorOptions, project_dir: &Path) -> Result<u32, EditorLaunchError> {
        let command = editor_invocation(editor, project_dir);
        info!("Opening {} with `{}`", project_dir.display(), command);

        self.runner
            .spawn_detached(&command, project_dir)
            .map_err(|source| {
                warn!("Editor launch failed: {}", source);
                EditorLaunchError { command, source }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickproj_runner::MockRunner;
    use std::path::PathBuf;

    fn config() -> Config {
        Config {
            base_instantiation_directory: PathBuf::from("/projects"),
            templates: vec![
                ProjectTemplate::new("plain"),
                ProjectTemplate::new("custom")
                    .with_editor_override(EditorOptions::new(ShellCommand::new(["vim"]))),
            ],
            editor: EditorOptions::new(ShellCommand::new(["code", "--new-window"])),
        }
    }

    #[test]
    fn test_override_replaces_default() {
        let config = config();
        assert_eq!(
            resolve_editor(&config, &config.templates[0]).command,
            ShellCommand::new(["code", "--new-window"])
        );
        assert_eq!(
            resolve_editor(&config, &config.templates[1]).command,
            ShellCommand::new(["vim"])
        );
    }

    #[test]
    fn test_path_appended() {
        let editor = EditorOptions::new(ShellCommand::new(["code", "--new-window"]));
        let cmd = editor_invocation(&editor, Path::new("/projects/demo"));
        assert_eq!(cmd, ShellCommand::new(["code", "--new-window", "/projects/demo"]));
    }

    #[test]
    fn test_path_substituted() {
        let editor = EditorOptions::new(ShellCommand::new([
            "idea",
            "--project={path}",
            "{path}/README.md",
        ]));
        let cmd = editor_invocation(&editor, Path::new("/p/demo"));
        assert_eq!(
            cmd,
            ShellCommand::new(["idea", "--project=/p/demo", "/p/demo/README.md"])
        );
    }

    #[test]
    fn test_launch_is_detached() {
        let runner = MockRunner::new();
        let launcher = EditorLauncher::new(&runner);
        let editor = EditorOptions::new(ShellCommand::new(["code"]));

        launcher.launch(&editor, Path::new("/p/demo")).unwrap();

        assert!(runner.run_commands().is_empty());
        assert_eq!(
            runner.detached_commands(),
            vec![ShellCommand::new(["code", "/p/demo"])]
        );
    }

    #[test]
    fn test_launch_failure_carries_command() {
        let runner = MockRunner::new().fail_detached("no editor");
        let launcher = EditorLauncher::new(&runner);
        let editor = EditorOptions::new(ShellCommand::new(["code"]));

        let err = launcher.launch(&editor, Path::new("/p/demo")).unwrap_err();
        assert_eq!(err.command, ShellCommand::new(["code", "/p/demo"]));
    }
}
