//! Configuration models.
//!
//! These types mirror the JSON layout of the config file one to one. All
//! structs reject unknown keys so typos surface at load time instead of
//! being silently ignored.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A single process invocation: program name followed by its arguments.
///
/// Tokens are passed to the operating system verbatim. No shell parsing,
/// quoting or escaping is applied; if a step needs shell features it must
/// invoke the shell explicitly (e.g. `["sh", "-c", "..."]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShellCommand(Vec<String>);

impl ShellCommand {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tokens.into_iter().map(Into::into).collect())
    }

    /// The program token, if the command has any tokens at all.
    pub fn program(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Everything after the program token.
    pub fn args(&self) -> &[String] {
        self.0.get(1..).unwrap_or_default()
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ShellCommand {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if token.is_empty() || token.contains(char::is_whitespace) {
                write!(f, "'{}'", token)?;
            } else {
                f.write_str(token)?;
            }
        }
        Ok(())
    }
}

/// Command used to open a text editor, plus any arguments passed along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EditorOptions {
    /// Editor invocation, e.g. `["code"]` or `["code", "--new-window"]`.
    pub command: ShellCommand,
}

impl EditorOptions {
    pub fn new(command: ShellCommand) -> Self {
        Self { command }
    }
}

/// A project template: the sequence of commands used to set up a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectTemplate {
    /// Display name, unique within the config.
    pub name: String,
    /// Optional human readable description shown during selection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Editor to use for this template instead of the top-level one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor_override: Option<EditorOptions>,
    /// Commands executed in order inside the new project directory.
    pub init_steps: Vec<ShellCommand>,
}

impl ProjectTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            editor_override: None,
            init_steps: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_editor_override(mut self, editor: EditorOptions) -> Self {
        self.editor_override = Some(editor);
        self
    }

    pub fn with_step(mut self, step: ShellCommand) -> Self {
        self.init_steps.push(step);
        self
    }

    /// Label used when presenting the template in a list.
    pub fn display_label(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{} - {}", self.name, description)
            }
            _ => self.name.clone(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory new projects are created in.
    #[serde(alias = "instantiation_directory")]
    pub base_instantiation_directory: PathBuf,
    /// Available templates, in display order.
    pub templates: Vec<ProjectTemplate>,
    /// Default editor.
    pub editor: EditorOptions,
}

impl Config {
    /// Configuration written on first run when no config file exists yet.
    pub fn default_for(base_instantiation_directory: impl AsRef<Path>) -> Self {
        Self {
            base_instantiation_directory: base_instantiation_directory.as_ref().to_path_buf(),
            editor: EditorOptions::new(ShellCommand::new(["code"])),
            templates: vec![ProjectTemplate::new("Python Application (UV)")
                .with_description(
                    "Creates a Python project using the UV package manager. The created project \
                     is configured to be built as an application, rather than a library.",
                )
                .with_step(ShellCommand::new([
                    "uv",
                    "init",
                    "--app",
                    "--name",
                    "my-project",
                    "--author-from",
                    "auto",
                    "--vcs",
                    "git",
                ]))],
        }
    }

    /// Look up a template by exact name.
    pub fn template(&self, name: &str) -> Option<&ProjectTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_command_parts() {
        let cmd = ShellCommand::new(["git", "clone", "https://example.com/repo.git", "."]);
        assert_eq!(cmd.program(), Some("git"));
        assert_eq!(cmd.args().len(), 3);
        assert_eq!(cmd.len(), 4);

        let empty = ShellCommand::default();
        assert_eq!(empty.program(), None);
        assert!(empty.args().is_empty());
    }

    #[test]
    fn test_shell_command_display_quotes_whitespace() {
        let cmd = ShellCommand::new(["sh", "-c", "echo hello > out.txt"]);
        assert_eq!(cmd.to_string(), "sh -c 'echo hello > out.txt'");
    }

    #[test]
    fn test_shell_command_is_plain_json_array() {
        let cmd: ShellCommand = serde_json::from_str(r#"["npm", "install"]"#).unwrap();
        assert_eq!(cmd, ShellCommand::new(["npm", "install"]));
        assert_eq!(serde_json::to_string(&cmd).unwrap(), r#"["npm","install"]"#);
    }

    #[test]
    fn test_display_label() {
        let plain = ProjectTemplate::new("Rust");
        assert_eq!(plain.display_label(), "Rust");

        let described = ProjectTemplate::new("Rust").with_description("cargo new");
        assert_eq!(described.display_label(), "Rust - cargo new");
    }

    #[test]
    fn test_legacy_directory_key_is_accepted() {
        let json = r#"{
            "instantiation_directory": "/tmp/projects",
            "templates": [],
            "editor": { "command": ["vim"] }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.base_instantiation_directory, PathBuf::from("/tmp/projects"));

        let out = serde_json::to_value(&config).unwrap();
        assert!(out.get("base_instantiation_directory").is_some());
        assert!(out.get("instantiation_directory").is_none());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let json = r#"{
            "base_instantiation_directory": "/tmp",
            "templates": [{ "name": "x", "init_steps": [], "steps": [] }],
            "editor": { "command": ["vim"] }
        }"#;
        let err = serde_json::from_str::<Config>(json).unwrap_err();
        assert!(err.to_string().contains("steps"));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_for("/home/user/quick-projects");
        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.editor.command.program(), Some("code"));
        assert!(config.template("Python Application (UV)").is_some());
    }
}
