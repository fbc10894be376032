//! Show command - print the bookmark table

use std::io::Write;

use crate::{
    MarktableError,
    config::OutputFormat,
    output,
    sort::ColumnKey,
    table::BookmarkTable,
};

type Result<T> = std::result::Result<T, MarktableError>;

/// Display options for the show command
#[derive(Debug, Clone)]
pub struct ShowOptions<'a> {
    pub format: OutputFormat,
    pub date_format: &'a str,
    pub show_counts: bool,
    pub quiet: bool,
}

/// Execute the show command
///
/// Each entry of `sort` is applied in turn, like clicking that column
/// header. Unknown column names are reported and skipped.
///
/// # Errors
/// Returns an error if the output cannot be written.
pub fn execute<W: Write>(
    table: &mut BookmarkTable,
    sort: &[String],
    options: &ShowOptions<'_>,
    out: &mut W,
) -> Result<()> {
    for column in sort {
        match column.parse::<ColumnKey>() {
            Ok(column) => {
                table.set_sort(column);
            }
            Err(e) => tracing::warn!("{e}"),
        }
    }

    let view = table.view();
    match options.format {
        OutputFormat::Table => {
            if view.rows.is_empty() {
                if !options.quiet {
                    writeln!(out, "No bookmarks match the current filters.")?;
                }
            } else {
                write!(out, "{}", output::render_table(&view, options.date_format))?;
            }

            if options.show_counts && !options.quiet {
                writeln!(out)?;
                for line in output::counts_lines(view.counts) {
                    writeln!(out, "{line}")?;
                }
            }
        }
        OutputFormat::Csv => output::write_csv(&view.rows, &mut *out)?,
        OutputFormat::Json => writeln!(out, "{}", output::to_json(&view.rows)?)?,
    }

    Ok(())
}
