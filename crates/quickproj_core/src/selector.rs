//! Template selection.
//!
//! Selection never touches the filesystem; it only maps user input (an
//! index, a name or an interactive choice) to one of the configured
//! templates.

use dialoguer::Select;
use tracing::debug;

use quickproj_config::ProjectTemplate;

use crate::error::SelectionError;

/// Source of an interactive choice.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask the user to pick one of `items`. `Ok(None)` means the prompt was
    /// dismissed without a choice.
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, SelectionError>;
}

/// Terminal prompter backed by `dialoguer`.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<Option<usize>, SelectionError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()
            .map_err(|e| SelectionError::Prompt(e.to_string()))
    }
}

/// How the template for a run is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateChoice {
    Name(String),
    Index(usize),
    Interactive,
}

/// Picks one template out of the configured list.
pub struct TemplateSelector<'a> {
    templates: &'a [ProjectTemplate],
}

impl<'a> TemplateSelector<'a> {
    pub fn new(templates: &'a [ProjectTemplate]) -> Self {
        Self { templates }
    }

    /// Labels shown to the user, in config order.
    pub fn labels(&self) -> Vec<String> {
        self.templates.iter().map(|t| t.display_label()).collect()
    }

    pub fn select(
        &self,
        choice: &TemplateChoice,
        prompter: &dyn Prompter,
    ) -> Result<&'a ProjectTemplate, SelectionError> {
        match choice {
            TemplateChoice::Name(name) => self.select_by_name(name),
            TemplateChoice::Index(index) => self.select_index(*index),
            TemplateChoice::Interactive => self.select_interactive(prompter),
        }
    }

    pub fn select_index(&self, index: usize) -> Result<&'a ProjectTemplate, SelectionError> {
        if self.templates.is_empty() {
            return Err(SelectionError::NoTemplates);
        }
        self.templates
            .get(index)
            .ok_or(SelectionError::OutOfRange {
                index,
                count: self.templates.len(),
            })
    }

    pub fn select_by_name(&self, name: &str) -> Result<&'a ProjectTemplate, SelectionError> {
        if self.templates.is_empty() {
            return Err(SelectionError::NoTemplates);
        }
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| SelectionError::UnknownTemplate {
                name: name.to_string(),
                available: self.templates.iter().map(|t| t.name.clone()).collect(),
            })
    }

    pub fn select_interactive(
        &self,
        prompter: &dyn Prompter,
    ) -> Result<&'a ProjectTemplate, SelectionError> {
        if self.templates.is_empty() {
            return Err(SelectionError::NoTemplates);
        }

        let index = prompter
            .select("Select a project template", &self.labels())?
            .ok_or(SelectionError::Cancelled)?;
        debug!("Interactive selection returned index {}", index);

        self.select_index(index)
    }
}
