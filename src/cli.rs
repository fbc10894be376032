//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for marktable using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **show**: Print the bookmark table (default)
//! - **folders**: List the folder paths that can be selected
//! - **count**: Print visible and excluded counts only
//! - **config**: Inspect and edit the configuration file
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Repeatable `-v` for log verbosity
//! - `--sort` may be repeated; each occurrence acts like a click on that
//!   column header, so `--sort title --sort title` sorts descending
//!
//! # Examples
//!
//! ```no_run
//! use marktable::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::Show { sort, .. } => println!("sorting by {sort:?}"),
//!     _ => {}
//! }
//! ```

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::filters::FolderSelector;
use crate::source::FileLayout;

/// Bookmark file layout accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutArg {
    /// Detect from the file contents
    #[default]
    Auto,
    /// JSON produced by the browser bookmarks API
    Tree,
    /// Chromium profile `Bookmarks` file
    Chromium,
}

impl From<LayoutArg> for FileLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Auto => Self::Auto,
            LayoutArg::Tree => Self::Tree,
            LayoutArg::Chromium => Self::Chromium,
        }
    }
}

/// Where to read bookmarks from
#[derive(Parser, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Bookmark file (defaults to `bookmarks_file` from the config)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Layout of the bookmark file
    #[arg(long = "layout", value_enum, default_value_t = LayoutArg::Auto)]
    pub layout: LayoutArg,
}

/// Folder filtering options
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only show bookmarks in this exact folder path ("all" for every folder, "" for the root)
    #[arg(short = 'f', long = "folder", value_name = "PATH")]
    pub folder: Option<String>,

    /// Hide bookmarks whose folder path contains NAME, ignoring case (comma separated or repeated)
    #[arg(short = 'e', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Ignore exclusions saved in the config
    #[arg(long = "no-saved-excludes")]
    pub no_saved_excludes: bool,
}

impl FilterArgs {
    /// Folder selector for these arguments
    #[must_use]
    pub fn selector(&self) -> FolderSelector {
        self.folder
            .as_deref()
            .map_or(FolderSelector::All, FolderSelector::from_option_value)
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "marktable")]
#[command(about = "Browse browser bookmarks as a sortable, filterable table", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default one
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the bookmark table (default)
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,

        /// Sort by column: title, url, folder, dateAdded (repeat to toggle direction)
        #[arg(short = 's', long = "sort", value_name = "COLUMN")]
        sort: Vec<String>,

        /// Output format (overrides config)
        #[arg(short = 'o', long = "format", value_enum)]
        format: Option<OutputFormat>,

        /// Do not print the count lines after the table
        #[arg(long = "no-counts")]
        no_counts: bool,
    },

    /// List folder paths that can be passed to --folder
    #[command(visible_alias = "ls")]
    Folders {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print visible and excluded bookmark counts
    #[command(visible_alias = "c")]
    Count {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Print the path of the config file
    Path,

    /// Set the default bookmark file
    #[command(name = "set-file")]
    SetFile {
        /// Path to a bookmark file
        path: PathBuf,
    },

    /// Save a folder exclusion
    #[command(name = "add-exclude")]
    AddExclude {
        /// Folder name to hide
        name: String,
    },

    /// Remove a saved folder exclusion
    #[command(name = "remove-exclude", visible_alias = "rm-exclude")]
    RemoveExclude {
        /// Folder name to stop hiding
        name: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Show if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Show {
            source: SourceArgs::default(),
            filter: FilterArgs::default(),
            sort: Vec::new(),
            format: None,
            no_counts: false,
        })
    }
}
