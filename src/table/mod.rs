//! Bookmark table controller
//!
//! `BookmarkTable` owns everything the table needs: the flattened records,
//! the folder registry, the folder selector, the exclusion set and the sort
//! state. Each user action is a method that updates that state and hands back
//! the refreshed [`TableView`].
//!
//! # Examples
//!
//! ```no_run
//! use marktable::table::BookmarkTable;
//! use marktable::source::BookmarkFile;
//! use marktable::sort::ColumnKey;
//!
//! let mut table = BookmarkTable::new();
//! table.load(&BookmarkFile::new("bookmarks.json")).unwrap();
//! table.add_exclusion("Archive");
//! let view = table.set_sort(ColumnKey::Title);
//! for row in &view.rows {
//!     println!("{} {}", row.title, row.url);
//! }
//! ```

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bookmarks::{BookmarkRecord, FolderRegistry, flatten, folder_label};
use crate::filters::{ExclusionSet, FolderSelector, filter_records};
use crate::sort::{ColumnKey, SortState};
use crate::source::{BookmarkNode, BookmarkSource, SourceError};

/// Row counts for the current view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counts {
    /// Rows shown
    pub visible: usize,
    /// Rows that matched the folder selector but were hidden by an exclusion
    pub excluded_by_folder: usize,
}

/// One entry of the folder selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderOption {
    pub selector: FolderSelector,
    pub label: String,
}

/// The filtered, sorted rows together with the state that produced them
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    pub rows: Vec<&'a BookmarkRecord>,
    pub counts: Counts,
    pub selector: &'a FolderSelector,
    pub exclusions: &'a ExclusionSet,
    pub sort: SortState,
}

/// State behind a bookmark table
#[derive(Debug, Clone, Default)]
pub struct BookmarkTable {
    records: Vec<BookmarkRecord>,
    registry: FolderRegistry,
    selector: FolderSelector,
    exclusions: ExclusionSet,
    sort: SortState,
}

impl BookmarkTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with initial exclusions
    #[must_use]
    pub fn with_exclusions(exclusions: ExclusionSet) -> Self {
        Self {
            exclusions,
            ..Self::default()
        }
    }

    /// Build a table directly from a tree
    #[must_use]
    pub fn from_tree(roots: &[BookmarkNode]) -> Self {
        let mut table = Self::new();
        table.replace_tree(roots);
        table
    }

    /// Fetch the tree from a source and replace all bookmark data
    ///
    /// Records and folder registry are rebuilt from scratch; the folder
    /// selector and sort state return to their initial values. Exclusions
    /// are kept.
    ///
    /// # Errors
    ///
    /// Returns the source's error if the fetch fails. The table is left
    /// exactly as it was.
    pub fn load(&mut self, source: &dyn BookmarkSource) -> Result<(), SourceError> {
        let roots = source.fetch_tree().inspect_err(|e| {
            tracing::warn!(source = %source.describe(), error = %e, "bookmark fetch failed");
        })?;
        self.replace_tree(&roots);
        tracing::info!(
            source = %source.describe(),
            bookmarks = self.records.len(),
            folders = self.registry.len(),
            "loaded bookmarks"
        );
        Ok(())
    }

    fn replace_tree(&mut self, roots: &[BookmarkNode]) {
        let flat = flatten(roots);
        self.records = flat.records;
        self.registry = flat.registry;
        self.selector = FolderSelector::All;
        self.sort = SortState::default();
    }

    /// Every record, in flattening order
    #[must_use]
    pub fn records(&self) -> &[BookmarkRecord] {
        &self.records
    }

    #[must_use]
    pub const fn folder_registry(&self) -> &FolderRegistry {
        &self.registry
    }

    /// Title of a folder by host id
    #[must_use]
    pub fn folder_name(&self, folder_id: &str) -> Option<&str> {
        self.registry.title(folder_id)
    }

    #[must_use]
    pub const fn selector(&self) -> &FolderSelector {
        &self.selector
    }

    #[must_use]
    pub const fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    #[must_use]
    pub const fn sort_state(&self) -> SortState {
        self.sort
    }

    /// The rows currently shown, filtered then sorted
    #[must_use]
    pub fn filtered_sorted_records(&self) -> Vec<&BookmarkRecord> {
        self.view().rows
    }

    /// The current view
    #[must_use]
    pub fn view(&self) -> TableView<'_> {
        let outcome = filter_records(&self.records, &self.selector, &self.exclusions);
        let counts = Counts {
            visible: outcome.visible(),
            excluded_by_folder: outcome.excluded_by_folder,
        };
        let mut rows = outcome.records;
        self.sort.sort(&mut rows);

        TableView {
            rows,
            counts,
            selector: &self.selector,
            exclusions: &self.exclusions,
            sort: self.sort,
        }
    }

    /// Current row counts
    #[must_use]
    pub fn counts(&self) -> Counts {
        let outcome = filter_records(&self.records, &self.selector, &self.exclusions);
        Counts {
            visible: outcome.visible(),
            excluded_by_folder: outcome.excluded_by_folder,
        }
    }

    /// Folder selector entries: "All Bookmarks" first, then every distinct
    /// folder path that holds a bookmark, sorted
    #[must_use]
    pub fn folder_options(&self) -> Vec<FolderOption> {
        let paths: BTreeSet<&str> = self.records.iter().map(|r| r.folder_path.as_str()).collect();

        std::iter::once(FolderOption {
            label: FolderSelector::All.to_string(),
            selector: FolderSelector::All,
        })
        .chain(paths.into_iter().map(|path| FolderOption {
            label: folder_label(path).to_string(),
            selector: FolderSelector::Path(path.to_string()),
        }))
        .collect()
    }

    /// Restrict the table to one folder path, or to all folders
    pub fn set_inclusion_filter(&mut self, selector: FolderSelector) -> TableView<'_> {
        tracing::debug!(folder = %selector.option_value(), "folder selected");
        self.selector = selector;
        self.view()
    }

    /// Hide bookmarks whose folder path contains `name` (ignoring case)
    ///
    /// Adding a name that is already present, or that is blank, changes
    /// nothing.
    pub fn add_exclusion(&mut self, name: &str) -> TableView<'_> {
        if self.exclusions.insert(name) {
            tracing::debug!(name = name.trim(), "exclusion added");
        }
        self.view()
    }

    /// Stop hiding bookmarks for `name`
    pub fn remove_exclusion(&mut self, name: &str) -> TableView<'_> {
        if self.exclusions.remove(name) {
            tracing::debug!(name = name.trim(), "exclusion removed");
        }
        self.view()
    }

    /// Click a column header
    pub fn set_sort(&mut self, column: ColumnKey) -> TableView<'_> {
        self.sort.select(column);
        self.view()
    }

    /// Click a column header by name. Unknown names leave the sort unchanged.
    pub fn set_sort_by_name(&mut self, column: &str) -> TableView<'_> {
        match column.parse::<ColumnKey>() {
            Ok(column) => self.sort.select(column),
            Err(e) => tracing::debug!("ignoring sort request: {e}"),
        }
        self.view()
    }
}
