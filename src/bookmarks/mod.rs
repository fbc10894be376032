//! Bookmark records and the folder registry
//!
//! Records are the flat rows of the table. They are produced once per
//! bookmark by the [`flatten`] pass and never modified afterwards.

pub mod flatten;

pub use flatten::{Flattened, flatten};

use serde::Serialize;
use std::collections::HashMap;

/// Separator placed between ancestor folder titles in a folder path
pub const PATH_SEPARATOR: &str = " > ";

/// Title used for folders that have none
pub const UNTITLED_FOLDER: &str = "Folder";

/// Label shown for the empty folder path
pub const ROOT_LABEL: &str = "Root";

/// A single bookmark, flattened out of the tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    /// Ancestor folder titles joined by `" > "`; empty for bookmarks at the root
    pub folder_path: String,
    /// Host id of the parent folder
    pub folder_id: String,
    /// Milliseconds since the Unix epoch, `None` when the host did not say
    pub date_added: Option<i64>,
}

impl BookmarkRecord {
    /// Folder path as displayed, with the root shown as `Root`
    #[must_use]
    pub fn folder_label(&self) -> &str {
        folder_label(&self.folder_path)
    }
}

/// Display label for a folder path
#[must_use]
pub fn folder_label(folder_path: &str) -> &str {
    if folder_path.is_empty() {
        ROOT_LABEL
    } else {
        folder_path
    }
}

/// Folder id to folder title, first registration wins
#[derive(Debug, Clone, Default)]
pub struct FolderRegistry {
    titles: HashMap<String, String>,
    order: Vec<String>,
}

impl FolderRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a folder. Returns `false` if the id was already known, in
    /// which case the existing title is kept.
    pub fn register(&mut self, id: &str, title: &str) -> bool {
        if self.titles.contains_key(id) {
            return false;
        }
        self.titles.insert(id.to_string(), title.to_string());
        self.order.push(id.to_string());
        true
    }

    /// Title registered for a folder id
    #[must_use]
    pub fn title(&self, id: &str) -> Option<&str> {
        self.titles.get(id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate `(id, title)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|id| (id.as_str(), self.titles[id].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_first_title_wins() {
        let mut registry = FolderRegistry::new();
        assert!(registry.register("1", "Work"));
        assert!(!registry.register("1", "Renamed"));
        assert_eq!(registry.title("1"), Some("Work"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_iterates_in_registration_order() {
        let mut registry = FolderRegistry::new();
        registry.register("9", "Zed");
        registry.register("2", "Alpha");
        let ids: Vec<&str> = registry.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["9", "2"]);
    }

    #[test]
    fn test_folder_label() {
        assert_eq!(folder_label(""), "Root");
        assert_eq!(folder_label("Docs > Rust"), "Docs > Rust");
    }
}
