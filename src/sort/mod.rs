//! Column sorting
//!
//! The sort state behaves like clickable table headers: picking the current
//! column again flips the direction, picking another column sorts by it
//! ascending. Until a column is picked, rows stay in filter order.
//!
//! Text columns compare case-insensitively. The date column compares
//! numerically with unknown dates counted as zero, so they come first when
//! ascending. Ties fall back to the record id so the order is reproducible.

pub mod error;

pub use error::SortError;

use crate::bookmarks::BookmarkRecord;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A sortable column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    Title,
    Folder,
    Url,
    DateAdded,
}

impl ColumnKey {
    /// Column key as used in option values
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Folder => "folder",
            Self::Url => "url",
            Self::DateAdded => "dateAdded",
        }
    }

    /// Header text for this column
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Folder => "Folder",
            Self::Url => "URL",
            Self::DateAdded => "Date Added",
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "folder" | "folderpath" | "folder_path" => Ok(Self::Folder),
            "url" => Ok(Self::Url),
            "dateadded" | "date_added" | "date-added" | "date" => Ok(Self::DateAdded),
            _ => Err(SortError::UnknownColumn(s.to_string())),
        }
    }
}

/// Current sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<ColumnKey>,
    pub ascending: bool,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: None,
            ascending: true,
        }
    }
}

impl SortState {
    /// Apply a header selection
    pub fn select(&mut self, column: ColumnKey) {
        if self.column == Some(column) {
            self.ascending = !self.ascending;
        } else {
            self.column = Some(column);
            self.ascending = true;
        }
        tracing::debug!(%column, ascending = self.ascending, "sort column selected");
    }

    /// Header arrow for a column: `▲` ascending, `▼` descending, `None` if
    /// the column is not the current one
    #[must_use]
    pub fn indicator(&self, column: ColumnKey) -> Option<&'static str> {
        if self.column != Some(column) {
            return None;
        }
        Some(if self.ascending { "▲" } else { "▼" })
    }

    /// Order two records under this state
    #[must_use]
    pub fn compare(&self, a: &BookmarkRecord, b: &BookmarkRecord) -> Ordering {
        let Some(column) = self.column else {
            return Ordering::Equal;
        };
        let primary = compare_column(column, a, b);
        let directed = if self.ascending {
            primary
        } else {
            primary.reverse()
        };
        directed.then_with(|| a.id.cmp(&b.id))
    }

    /// Sort records in place. Without a column the slice is left untouched.
    pub fn sort(&self, records: &mut [&BookmarkRecord]) {
        if self.column.is_none() {
            return;
        }
        records.sort_by(|a, b| self.compare(a, b));
    }
}

/// Compare two records on a single column, ascending
#[must_use]
pub fn compare_column(column: ColumnKey, a: &BookmarkRecord, b: &BookmarkRecord) -> Ordering {
    match column {
        ColumnKey::Title => compare_ignore_case(&a.title, &b.title),
        ColumnKey::Folder => compare_ignore_case(&a.folder_path, &b.folder_path),
        ColumnKey::Url => compare_ignore_case(&a.url, &b.url),
        ColumnKey::DateAdded => a.date_added.unwrap_or(0).cmp(&b.date_added.unwrap_or(0)),
    }
}

/// Lexicographic comparison on lower-cased characters
#[must_use]
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{dated_record, record};

    fn titles(records: &[&BookmarkRecord]) -> Vec<String> {
        records.iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_parse_columns() {
        assert_eq!("title".parse::<ColumnKey>(), Ok(ColumnKey::Title));
        assert_eq!("Folder".parse::<ColumnKey>(), Ok(ColumnKey::Folder));
        assert_eq!("url".parse::<ColumnKey>(), Ok(ColumnKey::Url));
        assert_eq!("dateAdded".parse::<ColumnKey>(), Ok(ColumnKey::DateAdded));
        assert_eq!("date_added".parse::<ColumnKey>(), Ok(ColumnKey::DateAdded));
        assert_eq!(
            "rowNumber".parse::<ColumnKey>(),
            Err(SortError::UnknownColumn("rowNumber".into()))
        );
    }

    #[test]
    fn test_select_transitions() {
        let mut state = SortState::default();
        assert_eq!(state.column, None);
        assert!(state.ascending);

        state.select(ColumnKey::Title);
        assert_eq!(state, SortState { column: Some(ColumnKey::Title), ascending: true });

        state.select(ColumnKey::Title);
        assert!(!state.ascending);

        state.select(ColumnKey::Url);
        assert_eq!(state, SortState { column: Some(ColumnKey::Url), ascending: true });
    }

    #[test]
    fn test_no_column_keeps_order() {
        let (a, b) = (record("2", "b", ""), record("1", "a", ""));
        let mut rows = vec![&a, &b];
        SortState::default().sort(&mut rows);
        assert_eq!(titles(&rows), vec!["b", "a"]);
    }

    #[test]
    fn test_title_is_case_insensitive() {
        let (banana, apple, cherry) = (
            record("1", "banana", ""),
            record("2", "Apple", ""),
            record("3", "Cherry", ""),
        );
        let mut rows = vec![&banana, &apple, &cherry];
        let mut state = SortState::default();
        state.select(ColumnKey::Title);
        state.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["Apple", "banana", "Cherry"]);
    }

    #[test]
    fn test_folder_and_url_columns() {
        let mut x = record("1", "x", "work");
        x.url = "https://B.example".into();
        let mut y = record("2", "y", "Archive");
        y.url = "https://a.example".into();

        let mut state = SortState::default();
        state.select(ColumnKey::Folder);
        let mut rows = vec![&x, &y];
        state.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["y", "x"]);

        state.select(ColumnKey::Url);
        let mut rows = vec![&x, &y];
        state.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["y", "x"]);
    }

    #[test]
    fn test_unknown_dates_sort_first_ascending() {
        let (new, unknown, old) = (
            dated_record("1", "new", Some(2_000)),
            dated_record("2", "unknown", None),
            dated_record("3", "old", Some(1_000)),
        );
        let mut state = SortState::default();
        state.select(ColumnKey::DateAdded);

        let mut rows = vec![&new, &unknown, &old];
        state.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["unknown", "old", "new"]);

        state.select(ColumnKey::DateAdded);
        state.sort(&mut rows);
        assert_eq!(titles(&rows), vec!["new", "old", "unknown"]);
    }

    #[test]
    fn test_toggle_twice_restores_ascending_order() {
        let rows_src = vec![
            dated_record("3", "c", Some(5)),
            dated_record("1", "a", None),
            dated_record("2", "b", Some(5)),
            dated_record("4", "d", Some(1)),
        ];
        let mut state = SortState::default();
        state.select(ColumnKey::DateAdded);
        let mut first: Vec<&BookmarkRecord> = rows_src.iter().collect();
        state.sort(&mut first);

        state.select(ColumnKey::DateAdded);
        state.select(ColumnKey::DateAdded);
        assert!(state.ascending);
        let mut again: Vec<&BookmarkRecord> = rows_src.iter().rev().collect();
        state.sort(&mut again);

        assert_eq!(first, again);
    }

    #[test]
    fn test_ties_break_on_id() {
        let (b, a) = (record("b", "same", ""), record("a", "Same", ""));
        let mut state = SortState::default();
        state.select(ColumnKey::Title);
        let mut rows = vec![&b, &a];
        state.sort(&mut rows);
        assert_eq!(rows[0].id, "a");

        state.select(ColumnKey::Title);
        state.sort(&mut rows);
        assert_eq!(rows[0].id, "a");
    }

    #[test]
    fn test_indicator() {
        let mut state = SortState::default();
        assert_eq!(state.indicator(ColumnKey::Title), None);
        state.select(ColumnKey::Title);
        assert_eq!(state.indicator(ColumnKey::Title), Some("▲"));
        assert_eq!(state.indicator(ColumnKey::Url), None);
        state.select(ColumnKey::Title);
        assert_eq!(state.indicator(ColumnKey::Title), Some("▼"));
    }
}
