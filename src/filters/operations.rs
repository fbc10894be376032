//! Filter application
//!
//! Both stages preserve the relative order of their input.

use super::types::{ExclusionSet, FolderSelector};
use crate::bookmarks::BookmarkRecord;

/// Result of running both filter stages
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'a> {
    /// Records that passed both stages, in input order
    pub records: Vec<&'a BookmarkRecord>,
    /// Records that passed inclusion but were removed by an exclusion
    pub excluded_by_folder: usize,
}

impl FilterOutcome<'_> {
    /// Number of records left after both stages
    #[must_use]
    pub fn visible(&self) -> usize {
        self.records.len()
    }

    /// Number of records that passed the inclusion stage
    #[must_use]
    pub fn inclusion_count(&self) -> usize {
        self.visible() + self.excluded_by_folder
    }
}

/// Whether a record passes the inclusion stage
#[must_use]
pub fn matches_inclusion(record: &BookmarkRecord, selector: &FolderSelector) -> bool {
    match selector {
        FolderSelector::All => true,
        FolderSelector::Path(path) => record.folder_path == *path,
    }
}

/// Whether any exclusion is a case-insensitive substring of the folder path
///
/// Matching is not anchored to path segments: `"ork"` excludes `"Work > 2024"`.
#[must_use]
pub fn is_excluded(folder_path: &str, exclusions: &ExclusionSet) -> bool {
    if exclusions.is_empty() {
        return false;
    }
    let path = folder_path.to_lowercase();
    exclusions
        .iter()
        .any(|name| path.contains(&name.to_lowercase()))
}

/// Run the inclusion stage, then the exclusion stage
#[must_use]
pub fn filter_records<'a>(
    records: &'a [BookmarkRecord],
    selector: &FolderSelector,
    exclusions: &ExclusionSet,
) -> FilterOutcome<'a> {
    let mut outcome = FilterOutcome::default();

    for record in records.iter().filter(|r| matches_inclusion(r, selector)) {
        if is_excluded(&record.folder_path, exclusions) {
            outcome.excluded_by_folder += 1;
        } else {
            outcome.records.push(record);
        }
    }

    outcome
}
