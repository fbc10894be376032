//! Configuration module for marktable
//!
//! Manages the default bookmark file, saved folder exclusions and display
//! preferences. Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::filters::ExclusionSet;

/// Default `chrono` format for the date column
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the table is written out
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    /// Aligned, coloured text table
    #[default]
    Table,
    /// Comma separated values
    Csv,
    /// JSON array of records
    Json,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MarktableConfig {
    /// Bookmark file used when none is given on the command line
    #[serde(default)]
    pub bookmarks_file: Option<PathBuf>,

    /// Folder names hidden from every table
    #[serde(default)]
    pub excluded_folders: Vec<String>,

    /// Column to sort by when none is given
    #[serde(default)]
    pub default_sort: Option<String>,

    /// `chrono` format string for the date column
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default output format
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

impl Default for MarktableConfig {
    fn default() -> Self {
        Self {
            bookmarks_file: None,
            excluded_folders: Vec::new(),
            default_sort: None,
            date_format: default_date_format(),
            output_format: OutputFormat::default(),
            quiet: false,
        }
    }
}

impl MarktableConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("marktable").join("config.toml"))
    }

    /// Load configuration from a file, creating it with defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "writing default configuration");
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Whether informational output and non-error logs are suppressed,
    /// either by this config or by the `--quiet` flag
    #[must_use]
    pub const fn is_quiet(&self, cli_quiet: bool) -> bool {
        cli_quiet || self.quiet
    }

    /// Saved exclusions as a set, duplicates and blanks dropped
    #[must_use]
    pub fn exclusions(&self) -> ExclusionSet {
        self.excluded_folders.iter().collect()
    }

    /// Add a saved exclusion. Returns `false` if it was already present or blank.
    pub fn add_excluded_folder(&mut self, name: &str) -> bool {
        let mut set = self.exclusions();
        let added = set.insert(name);
        self.excluded_folders = set.into();
        added
    }

    /// Remove a saved exclusion. Returns `false` if it was not present.
    pub fn remove_excluded_folder(&mut self, name: &str) -> bool {
        let mut set = self.exclusions();
        let removed = set.remove(name);
        self.excluded_folders = set.into();
        removed
    }
}
