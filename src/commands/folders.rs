//! Folders command - list the folder paths that can be selected

use std::io::Write;

use crate::{MarktableError, output, table::BookmarkTable};

type Result<T> = std::result::Result<T, MarktableError>;

/// Execute the folders command
///
/// In quiet mode each line is the exact value to pass to `--folder`.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn execute<W: Write>(table: &BookmarkTable, quiet: bool, out: &mut W) -> Result<()> {
    if !quiet {
        writeln!(out, "Folders:")?;
    }
    for option in table.folder_options() {
        writeln!(out, "{}", output::folder_option_line(&option, quiet))?;
    }
    Ok(())
}
