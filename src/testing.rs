//! Testing utilities for marktable
//!
//! This module provides node builders, a canned bookmark tree, record
//! constructors and in-memory sources for writing tests without touching the
//! filesystem.
//!
//! Only available when compiled with `cfg(test)`.

use std::cell::{Cell, RefCell};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::bookmarks::BookmarkRecord;
use crate::source::{BookmarkNode, BookmarkSource, SourceError};

/// Shorthand for [`BookmarkNode::bookmark`]
pub fn bookmark(id: &str, title: &str, url: &str) -> BookmarkNode {
    BookmarkNode::bookmark(id, title, url)
}

/// Shorthand for [`BookmarkNode::folder`]
pub fn folder(id: &str, title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
    BookmarkNode::folder(id, title, children)
}

/// A tree shaped like the one a browser returns
///
/// ```text
/// (untitled root "0")
/// ├── Bookmarks bar "1"
/// │   ├── Rust Book          10  (date 3000)
/// │   ├── Work "3"
/// │   │   ├── Tracker        11  (no date)
/// │   │   └── Q1 "4"
/// │   │       └── Report     12  (date 1000)
/// │   └── apple pie          13  (date 2000)
/// └── Other bookmarks "2"
///     ├── Banana bread       20  (date 4000)
///     └── zebra facts        21  (no date)
/// ```
pub fn sample_tree() -> Vec<BookmarkNode> {
    vec![folder(
        "0",
        "",
        vec![
            folder(
                "1",
                "Bookmarks bar",
                vec![
                    bookmark("10", "Rust Book", "https://doc.rust-lang.org/book/")
                        .with_parent("1")
                        .with_date_added(3000),
                    folder(
                        "3",
                        "Work",
                        vec![
                            bookmark("11", "Tracker", "https://tracker.example/").with_parent("3"),
                            folder(
                                "4",
                                "Q1",
                                vec![
                                    bookmark("12", "Report", "https://reports.example/q1")
                                        .with_parent("4")
                                        .with_date_added(1000),
                                ],
                            ),
                        ],
                    ),
                    bookmark("13", "apple pie", "https://recipes.example/apple")
                        .with_parent("1")
                        .with_date_added(2000),
                ],
            ),
            folder(
                "2",
                "Other bookmarks",
                vec![
                    bookmark("20", "Banana bread", "https://recipes.example/banana")
                        .with_parent("2")
                        .with_date_added(4000),
                    bookmark("21", "zebra facts", "https://zoo.example/zebra").with_parent("2"),
                ],
            ),
        ],
    )]
}

/// Build a record directly, without a tree
pub fn record(id: &str, title: &str, folder_path: &str) -> BookmarkRecord {
    BookmarkRecord {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://example.com/{id}"),
        folder_path: folder_path.to_string(),
        folder_id: String::new(),
        date_added: None,
    }
}

/// Build a record with a date
pub fn dated_record(id: &str, title: &str, date_added: Option<i64>) -> BookmarkRecord {
    BookmarkRecord {
        date_added,
        ..record(id, title, "")
    }
}

/// In-memory source returning a fixed tree, counting fetches
pub struct StaticSource {
    tree: RefCell<Vec<BookmarkNode>>,
    fetches: Cell<usize>,
}

impl StaticSource {
    pub fn new(tree: Vec<BookmarkNode>) -> Self {
        Self {
            tree: RefCell::new(tree),
            fetches: Cell::new(0),
        }
    }

    /// Replace the tree returned by later fetches
    pub fn replace(&self, tree: Vec<BookmarkNode>) {
        *self.tree.borrow_mut() = tree;
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl BookmarkSource for StaticSource {
    fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.tree.borrow().clone())
    }

    fn describe(&self) -> String {
        "static test tree".to_string()
    }
}

/// Source whose fetch always fails
pub struct FailingSource;

impl BookmarkSource for FailingSource {
    fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        Err(SourceError::Unavailable("host did not respond".to_string()))
    }

    fn describe(&self) -> String {
        "failing test source".to_string()
    }
}

/// Write a tree to a temporary JSON file, removed when the handle drops
///
/// # Panics
/// Panics if the file cannot be created or written.
pub fn write_tree_file(tree: &[BookmarkNode]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    let json = serde_json::to_string(tree).expect("Failed to serialize tree");
    file.write_all(json.as_bytes()).expect("Failed to write temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BookmarkFile;

    #[test]
    fn test_static_source_counts_fetches() {
        let source = StaticSource::new(sample_tree());
        assert_eq!(source.fetches(), 0);
        source.fetch_tree().unwrap();
        source.fetch_tree().unwrap();
        assert_eq!(source.fetches(), 2);
    }

    #[test]
    fn test_static_source_replace() {
        let source = StaticSource::new(sample_tree());
        source.replace(vec![bookmark("1", "only", "http://only")]);
        assert_eq!(source.fetch_tree().unwrap().len(), 1);
    }

    #[test]
    fn test_tree_file_round_trips_through_file_source() {
        let tree = sample_tree();
        let file = write_tree_file(&tree);
        let loaded = BookmarkFile::new(file.path()).fetch_tree().unwrap();
        assert_eq!(loaded, tree);
    }
}
