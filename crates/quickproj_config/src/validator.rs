//! Semantic validation of a parsed configuration.

use std::collections::HashSet;
use std::path::Path;

use crate::models::{Config, ProjectTemplate, ShellCommand};

/// A problem tied to a specific field of the config document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Path to the field, e.g. `templates[1].init_steps[0]`.
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result with details.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<FieldIssue>,
    pub warnings: Vec<FieldIssue>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.valid = false;
        self.errors.push(FieldIssue::new(field, message));
    }

    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(FieldIssue::new(field, message));
    }

    pub fn merge(&mut self, other: ValidationResult) {
        if !other.valid {
            self.valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn first_error(&self) -> Option<&FieldIssue> {
        self.errors.first()
    }
}

/// Validator for configuration documents.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate an entire configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.merge(Self::validate_base_directory(
            &config.base_instantiation_directory,
        ));
        result.merge(Self::validate_command("editor.command", &config.editor.command));

        if config.templates.is_empty() {
            result.add_warning("templates", "no templates defined, nothing can be instantiated");
        }

        let mut seen = HashSet::new();
        for (index, template) in config.templates.iter().enumerate() {
            result.merge(Self::validate_template(index, template));

            if !template.name.is_empty() && !seen.insert(template.name.as_str()) {
                result.add_error(
                    format!("templates[{}].name", index),
                    format!("duplicate template name \"{}\"", template.name),
                );
            }
        }

        result
    }

    /// The base directory must be set and must already exist as a directory.
    pub fn validate_base_directory(path: &Path) -> ValidationResult {
        let mut result = ValidationResult::new();
        let field = "base_instantiation_directory";

        if path.as_os_str().is_empty() {
            result.add_error(field, "must not be empty");
        } else if !path.exists() {
            result.add_error(field, format!("directory {} does not exist", path.display()));
        } else if !path.is_dir() {
            result.add_error(field, format!("{} is not a directory", path.display()));
        }

        result
    }

    /// Validate a single template.
    pub fn validate_template(index: usize, template: &ProjectTemplate) -> ValidationResult {
        let mut result = ValidationResult::new();
        let prefix = format!("templates[{}]", index);

        if template.name.trim().is_empty() {
            result.add_error(format!("{}.name", prefix), "must not be empty");
        }

        if let Some(editor) = &template.editor_override {
            result.merge(Self::validate_command(
                &format!("{}.editor_override.command", prefix),
                &editor.command,
            ));
        }

        if template.init_steps.is_empty() {
            result.add_warning(
                format!("{}.init_steps", prefix),
                format!("template \"{}\" has no init steps", template.name),
            );
        }

        for (step_index, step) in template.init_steps.iter().enumerate() {
            result.merge(Self::validate_command(
                &format!("{}.init_steps[{}]", prefix, step_index),
                step,
            ));
        }

        result
    }

    /// A command needs at least a non-empty program token.
    pub fn validate_command(field: &str, command: &ShellCommand) -> ValidationResult {
        let mut result = ValidationResult::new();

        match command.program() {
            None => result.add_error(field, "command must contain at least one token"),
            Some(program) if program.trim().is_empty() => {
                result.add_error(field, "program name must not be empty")
            }
            Some(_) => {}
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EditorOptions;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> Config {
        Config {
            base_instantiation_directory: dir.to_path_buf(),
            templates: vec![ProjectTemplate::new("Rust")
                .with_step(ShellCommand::new(["cargo", "init"]))],
            editor: EditorOptions::new(ShellCommand::new(["code"])),
        }
    }

    #[test]
    fn test_valid_config() {
        let dir = tempdir().unwrap();
        let result = ConfigValidator::validate(&config_in(dir.path()));
        assert!(result.valid, "unexpected errors: {:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_missing_base_directory() {
        let dir = tempdir().unwrap();
        let config = config_in(&dir.path().join("missing"));
        let result = ConfigValidator::validate(&config);
        assert!(!result.valid);
        assert_eq!(result.errors[0].field, "base_instantiation_directory");
    }

    #[test]
    fn test_base_directory_is_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();

        let result = ConfigValidator::validate_base_directory(&file);
        assert!(!result.valid);
        assert!(result.errors[0].message.contains("not a directory"));
    }

    #[test]
    fn test_empty_step_reports_field_path() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.templates[0].init_steps.push(ShellCommand::default());

        let result = ConfigValidator::validate(&config);
        assert!(!result.valid);
        assert_eq!(result.errors[0].field, "templates[0].init_steps[1]");
    }

    #[test]
    fn test_duplicate_template_names() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        let duplicate = config.templates[0].clone();
        config.templates.push(duplicate);

        let result = ConfigValidator::validate(&config);
        assert!(!result.valid);
        assert_eq!(result.errors[0].field, "templates[1].name");
    }

    #[test]
    fn test_empty_editor_command() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.editor = EditorOptions::new(ShellCommand::default());
        config.templates[0].editor_override =
            Some(EditorOptions::new(ShellCommand::new([""])));

        let result = ConfigValidator::validate(&config);
        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["editor.command", "templates[0].editor_override.command"]
        );
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let dir = tempdir().unwrap();
        let mut config = config_in(dir.path());
        config.templates.push(ProjectTemplate::new("Empty"));

        let result = ConfigValidator::validate(&config);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].field, "templates[1].init_steps");
    }
}
