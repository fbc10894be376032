//! Folder filters
//!
//! Two independent stages narrow the record list, always in this order:
//!
//! 1. **Inclusion**: a folder selector keeps either every record or only the
//!    records whose folder path equals the selected path exactly.
//! 2. **Exclusion**: a set of folder names removes every record whose folder
//!    path contains one of them, ignoring case.
//!
//! # Examples
//!
//! ```
//! use marktable::filters::{ExclusionSet, FolderSelector, filter_records};
//! # use marktable::bookmarks::BookmarkRecord;
//! # let records: Vec<BookmarkRecord> = Vec::new();
//!
//! let mut exclusions = ExclusionSet::new();
//! exclusions.insert("archive");
//!
//! let outcome = filter_records(&records, &FolderSelector::All, &exclusions);
//! println!("{} shown, {} hidden", outcome.visible(), outcome.excluded_by_folder);
//! ```

pub mod operations;
pub mod types;

pub use operations::{FilterOutcome, filter_records, is_excluded, matches_inclusion};
pub use types::{ALL_FOLDERS, ExclusionSet, FolderSelector};
