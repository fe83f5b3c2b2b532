//! # quickproj_config
//!
//! Configuration handling for quickproj.
//!
//! A configuration file is a single JSON document describing where projects
//! are created, which editor opens them, and the list of project templates
//! that can be instantiated. Parsing is strict: unknown keys, missing
//! required fields and wrong types are rejected, and a validation pass
//! reports semantic problems with the offending field path.
//!
//! ## Example
//!
//! ```rust,no_run
//! use quickproj_config::ConfigLoader;
//!
//! let loader = ConfigLoader::new("config.json");
//! let config = loader.load().unwrap();
//!
//! for template in &config.templates {
//!     println!("{} ({} steps)", template.name, template.init_steps.len());
//! }
//! ```

pub mod error;
pub mod loader;
pub mod models;
pub mod validator;

pub use error::{ConfigError, ConfigResult};
pub use loader::{home_dir, ConfigLoader, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
pub use models::{Config, EditorOptions, ProjectTemplate, ShellCommand};
pub use validator::{ConfigValidator, FieldIssue, ValidationResult};
