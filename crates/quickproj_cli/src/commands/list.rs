//! List command - Show the configured templates.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use quickproj_config::ConfigLoader;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn execute(config_path: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let loader = ConfigLoader::resolve(config_path)?;
    let config = loader.load()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.templates)?);
        return Ok(());
    }

    if config.templates.is_empty() {
        println!("⚠️  No templates defined in {}", loader.path().display());
        return Ok(());
    }

    println!("Templates in {}:\n", loader.path().display());
    for (index, template) in config.templates.iter().enumerate() {
        println!(
            "  [{}] {} ({} steps)",
            index,
            template.name,
            template.init_steps.len()
        );
        if let Some(description) = &template.description {
            println!("      {}", description);
        }
        if let Some(editor) = &template.editor_override {
            println!("      editor: {}", editor.command);
        }
    }
    println!();
    println!("Projects are created in: {}", config.base_instantiation_directory.display());

    Ok(())
}
