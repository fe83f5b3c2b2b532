//! Config file loading functionality.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConfigError, ConfigResult};
use crate::models::Config;
use crate::validator::{ConfigValidator, ValidationResult};

/// Directory under the home directory holding the default config.
pub const CONFIG_DIR_NAME: &str = ".quick-proj";

/// File name of the default config.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Directory under the home directory used by the generated default config.
const DEFAULT_PROJECTS_DIR_NAME: &str = "quick-projects";

/// Get the user's home directory.
///
/// `HOME` wins over the platform lookup so overrides in containers and tests
/// are respected.
pub fn home_dir() -> ConfigResult<PathBuf> {
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)
}

/// Config file loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for an explicit config file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loader for `~/.quick-proj/config.json`.
    pub fn default_location() -> ConfigResult<Self> {
        Ok(Self::new(
            home_dir()?.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ))
    }

    /// Resolve the loader to use for a run.
    ///
    /// An explicit path is used as-is and must exist. Without one, the
    /// default location is used and bootstrapped with a default config if
    /// nothing is there yet.
    pub fn resolve(explicit: Option<PathBuf>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Ok(Self::new(path)),
            None => {
                let loader = Self::default_location()?;
                if !loader.path.exists() {
                    let base = home_dir()?.join(DEFAULT_PROJECTS_DIR_NAME);
                    loader.bootstrap(&base)?;
                }
                Ok(loader)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load, parse and validate the config file.
    pub fn load(&self) -> ConfigResult<Config> {
        let config = self.load_unvalidated()?;
        let report = ConfigValidator::validate(&config);

        for warning in &report.warnings {
            warn!("{}: {}", self.path.display(), warning);
        }

        if let Some(issue) = report.first_error() {
            return Err(ConfigError::Invalid {
                path: self.path.clone(),
                field: issue.field.clone(),
                message: issue.message.clone(),
            });
        }

        info!(
            "Loaded config from {} ({} templates)",
            self.path.display(),
            config.templates.len()
        );
        Ok(config)
    }

    /// Load and parse the config file, returning the full validation report
    /// instead of failing on the first semantic problem.
    pub fn check(&self) -> ConfigResult<(Config, ValidationResult)> {
        let config = self.load_unvalidated()?;
        let report = ConfigValidator::validate(&config);
        Ok((config, report))
    }

    /// Read and strictly parse the config file without semantic validation.
    pub fn load_unvalidated(&self) -> ConfigResult<Config> {
        debug!("Loading config from {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfigError::NotFound(self.path.clone()),
            _ => ConfigError::Read {
                path: self.path.clone(),
                source: e,
            },
        })?;

        self.parse(&content)
    }

    /// Strictly parse config JSON read from this loader's path.
    pub fn parse(&self, content: &str) -> ConfigResult<Config> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Write a config as pretty-printed JSON, creating parent directories.
    pub fn save(&self, config: &Config) -> ConfigResult<()> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json).map_err(write_err)?;
        debug!("Wrote config to {}", self.path.display());
        Ok(())
    }

    /// Write the default config, pointing at `projects_dir`, which is
    /// created as well so the fresh config passes validation.
    pub fn bootstrap(&self, projects_dir: &Path) -> ConfigResult<Config> {
        fs::create_dir_all(projects_dir).map_err(|source| ConfigError::Write {
            path: projects_dir.to_path_buf(),
            source,
        })?;

        let config = Config::default_for(projects_dir);
        self.save(&config)?;
        info!("Created default config file at: {}", self.path.display());
        Ok(config)
    }
}
