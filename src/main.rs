//! Marktable CLI application entry point
//!
//! This is the main executable for marktable. It reads a browser bookmark
//! file, flattens it into a table and prints it, optionally restricted to a
//! folder, with folders hidden by name and sorted by column.
//!
//! # Usage
//!
//! ```bash
//! # Show every bookmark
//! marktable show ~/.config/chromium/Default/Bookmarks
//!
//! # Without a subcommand, show the configured bookmark file
//! marktable
//!
//! # Only one folder, newest first
//! marktable show -f "Folder > Bookmarks bar" -s dateAdded -s dateAdded
//!
//! # Hide folders whose path contains "archive" or "old"
//! marktable show -e archive,old
//!
//! # List selectable folders, print counts
//! marktable folders
//! marktable count -e archive
//!
//! # Remember a bookmark file and an exclusion
//! marktable config set-file ~/bookmarks.json
//! marktable config add-exclude archive
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/marktable/config.toml` on Linux) and created on first run.

use colored::Colorize;
use marktable::{
    MarktableError,
    cli::{Cli, Commands},
    commands::{self, show::ShowOptions},
    config::MarktableConfig,
    logging,
};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, MarktableError>;

fn load_config(cli: &Cli) -> Result<(MarktableConfig, PathBuf)> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => MarktableConfig::config_path()?,
    };
    let config = MarktableConfig::load_from(&config_path)?;
    Ok((config, config_path))
}

fn run(cli: &Cli, mut config: MarktableConfig, config_path: &Path) -> Result<()> {
    let quiet = config.is_quiet(cli.quiet);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.get_command() {
        Commands::Show {
            source,
            filter,
            sort,
            format,
            no_counts,
        } => {
            let mut table = commands::build_table(&config, &source, &filter)?;
            let sort = if sort.is_empty() {
                config.default_sort.iter().cloned().collect()
            } else {
                sort
            };
            let options = ShowOptions {
                format: format.unwrap_or(config.output_format),
                date_format: &config.date_format,
                show_counts: !no_counts,
                quiet,
            };
            commands::show(&mut table, &sort, &options, &mut out)?;
        }
        Commands::Folders { source } => {
            let table = commands::load_table(&config, &source)?;
            commands::folders(&table, quiet, &mut out)?;
        }
        Commands::Count { source, filter } => {
            let table = commands::build_table(&config, &source, &filter)?;
            commands::count(&table, quiet, &mut out)?;
        }
        Commands::Config { command } => {
            commands::config(&command, &mut config, config_path, quiet, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = load_config(&cli).and_then(|(config, config_path)| {
        logging::init(cli.verbose, config.is_quiet(cli.quiet));
        run(&cli, config, &config_path)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
