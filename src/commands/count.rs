//! Count command - print visible and excluded bookmark counts

use std::io::Write;

use crate::{MarktableError, output, table::BookmarkTable};

type Result<T> = std::result::Result<T, MarktableError>;

/// Execute the count command
///
/// Quiet mode prints `visible excluded` on one line.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn execute<W: Write>(table: &BookmarkTable, quiet: bool, out: &mut W) -> Result<()> {
    let counts = table.counts();
    if quiet {
        writeln!(out, "{} {}", counts.visible, counts.excluded_by_folder)?;
    } else {
        for line in output::counts_lines(counts) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
