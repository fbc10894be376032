//! Config command - inspect and edit the configuration file

use std::io::Write;
use std::path::Path;

use crate::{MarktableError, cli::ConfigCommands, config::MarktableConfig};

type Result<T> = std::result::Result<T, MarktableError>;

/// Execute a config subcommand against the config stored at `path`
///
/// # Errors
/// Returns an error if the configuration cannot be serialized or saved.
pub fn execute<W: Write>(
    command: &ConfigCommands,
    config: &mut MarktableConfig,
    path: &Path,
    quiet: bool,
    out: &mut W,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(config)
                .map_err(|e| MarktableError::InvalidInput(format!("Failed to serialize config: {e}")))?;
            write!(out, "{text}")?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", path.display())?;
        }
        ConfigCommands::SetFile { path: file } => {
            // Stored absolute; later runs may start elsewhere
            let file = std::path::absolute(file)?;
            if !file.exists() {
                tracing::warn!(file = %file.display(), "bookmark file does not exist yet");
            }
            config.bookmarks_file = Some(file.clone());
            config.save_to(path)?;
            if !quiet {
                writeln!(out, "Default bookmark file set to {}", file.display())?;
            }
        }
        ConfigCommands::AddExclude { name } => {
            let added = config.add_excluded_folder(name);
            if added {
                config.save_to(path)?;
            }
            if !quiet {
                if added {
                    writeln!(out, "Excluding folders matching '{}'", name.trim())?;
                } else {
                    writeln!(out, "'{}' is already excluded", name.trim())?;
                }
            }
        }
        ConfigCommands::RemoveExclude { name } => {
            let removed = config.remove_excluded_folder(name);
            if removed {
                config.save_to(path)?;
            }
            if !quiet {
                if removed {
                    writeln!(out, "No longer excluding '{}'", name.trim())?;
                } else {
                    writeln!(out, "'{}' was not excluded", name.trim())?;
                }
            }
        }
    }
    Ok(())
}
