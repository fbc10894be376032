//! Output formatting for CLI display
//!
//! This module turns a [`TableView`] into text: an aligned table for the
//! terminal, CSV or JSON. Dates are shown in local time; unknown dates are
//! left blank.

use std::io;

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use serde::Serialize;

use crate::bookmarks::BookmarkRecord;
use crate::sort::{ColumnKey, SortState};
use crate::table::{Counts, FolderOption, TableView};

/// Format a timestamp (milliseconds since the Unix epoch) in local time
#[must_use]
pub fn format_date(millis: Option<i64>, format: &str) -> String {
    millis
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| utc.with_timezone(&Local).format(format).to_string())
        .unwrap_or_default()
}

/// Header text for a column, with the sort arrow when it is the sort column
#[must_use]
pub fn header_label(column: ColumnKey, sort: &SortState) -> String {
    match sort.indicator(column) {
        Some(arrow) => format!("{} {arrow}", column.header()),
        None => column.header().to_string(),
    }
}

/// The two count lines shown under the table
#[must_use]
pub fn counts_lines(counts: Counts) -> [String; 2] {
    [
        format!("Bookmarks Count: {}", counts.visible),
        format!("Excluded Bookmarks: {}", counts.excluded_by_folder),
    ]
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}

/// Render the view as an aligned text table
///
/// Columns: row number, title, URL, folder, date added.
#[must_use]
pub fn render_table(view: &TableView<'_>, date_format: &str) -> String {
    let headers = [
        "#".to_string(),
        header_label(ColumnKey::Title, &view.sort),
        header_label(ColumnKey::Url, &view.sort),
        header_label(ColumnKey::Folder, &view.sort),
        header_label(ColumnKey::DateAdded, &view.sort),
    ];

    let cells: Vec<[String; 5]> = view
        .rows
        .iter()
        .enumerate()
        .map(|(index, record)| {
            [
                (index + 1).to_string(),
                record.title.clone(),
                record.url.clone(),
                record.folder_label().to_string(),
                format_date(record.date_added, date_format),
            ]
        })
        .collect();

    let mut widths = headers.each_ref().map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_line: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| pad(h, w).bold().to_string())
        .collect();
    out.push_str(header_line.join("  ").trim_end());
    out.push('\n');

    for row in &cells {
        let line = [
            format!("{:>width$}", row[0], width = widths[0]).dimmed().to_string(),
            pad(&row[1], widths[1]),
            pad(&row[2], widths[2]).blue().to_string(),
            pad(&row[3], widths[3]).dimmed().to_string(),
            row[4].clone(),
        ];
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

/// One CSV/JSON row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportRow<'a> {
    id: &'a str,
    title: &'a str,
    url: &'a str,
    folder_path: &'a str,
    folder_id: &'a str,
    date_added: Option<i64>,
}

impl<'a> From<&'a BookmarkRecord> for ExportRow<'a> {
    fn from(record: &'a BookmarkRecord) -> Self {
        Self {
            id: &record.id,
            title: &record.title,
            url: &record.url,
            folder_path: &record.folder_path,
            folder_id: &record.folder_id,
            date_added: record.date_added,
        }
    }
}

/// Write rows as CSV with a header line
///
/// # Errors
///
/// Returns `csv::Error` if a row cannot be written.
pub fn write_csv<W: io::Write>(rows: &[&BookmarkRecord], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in rows {
        csv_writer.serialize(ExportRow::from(*record))?;
    }
    if rows.is_empty() {
        csv_writer.write_record(["id", "title", "url", "folderPath", "folderId", "dateAdded"])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Rows as a pretty-printed JSON array
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails.
pub fn to_json(rows: &[&BookmarkRecord]) -> Result<String, serde_json::Error> {
    let export: Vec<ExportRow<'_>> = rows.iter().map(|r| ExportRow::from(*r)).collect();
    serde_json::to_string_pretty(&export)
}

/// Format a folder option for listing
#[must_use]
pub fn folder_option_line(option: &FolderOption, quiet: bool) -> String {
    if quiet {
        option.selector.option_value().to_string()
    } else {
        format!("  {}", option.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::BookmarkTable;
    use crate::testing::{bookmark, folder};

    fn table() -> BookmarkTable {
        BookmarkTable::from_tree(&[
            folder("1", "Docs", vec![bookmark("2", "a", "http://a").with_date_added(1_700_000_000_000)]),
            bookmark("3", "b", "http://b"),
        ])
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None, "%Y"), "");
        assert_eq!(format_date(Some(1_700_000_000_000), "%Y").len(), 4);
    }

    #[test]
    fn test_header_label_shows_direction() {
        let mut sort = SortState::default();
        assert_eq!(header_label(ColumnKey::Title, &sort), "Title");
        sort.select(ColumnKey::Title);
        assert_eq!(header_label(ColumnKey::Title, &sort), "Title ▲");
        sort.select(ColumnKey::Title);
        assert_eq!(header_label(ColumnKey::Title, &sort), "Title ▼");
        assert_eq!(header_label(ColumnKey::Url, &sort), "URL");
    }

    #[test]
    fn test_counts_lines() {
        let lines = counts_lines(Counts { visible: 3, excluded_by_folder: 1 });
        assert_eq!(lines[0], "Bookmarks Count: 3");
        assert_eq!(lines[1], "Excluded Bookmarks: 1");
    }

    #[test]
    fn test_render_table_rows() {
        colored::control::set_override(false);
        let table = table();
        let rendered = render_table(&table.view(), "%Y");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("#  Title"));
        assert!(lines[1].contains("http://a"));
        assert!(lines[1].contains("Docs"));
        assert!(lines[2].starts_with("2  b"));
        assert!(lines[2].contains("Root"));
    }

    #[test]
    fn test_csv_output() {
        let table = table();
        let mut buf = Vec::new();
        write_csv(&table.filtered_sorted_records(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "id,title,url,folderPath,folderId,dateAdded");
        assert_eq!(lines[1], "2,a,http://a,Docs,,1700000000000");
        assert_eq!(lines[2], "3,b,http://b,,,");
    }

    #[test]
    fn test_csv_output_empty_has_header() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "id,title,url,folderPath,folderId,dateAdded\n");
    }

    #[test]
    fn test_json_output() {
        let table = table();
        let json = to_json(&table.filtered_sorted_records()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["folderPath"], "Docs");
        assert_eq!(value[0]["dateAdded"], 1_700_000_000_000_i64);
        assert!(value[1]["dateAdded"].is_null());
    }

    #[test]
    fn test_folder_option_line() {
        let table = table();
        let options = table.folder_options();
        assert_eq!(folder_option_line(&options[1], false), "  Root");
        assert_eq!(folder_option_line(&options[1], true), "");
        assert_eq!(folder_option_line(&options[0], true), "all");
    }
}
