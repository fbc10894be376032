//! Filter data structures
//!
//! - `FolderSelector`: the inclusion choice (every folder or one exact path)
//! - `ExclusionSet`: ordered, duplicate-free folder names to hide

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Option value that selects every folder
pub const ALL_FOLDERS: &str = "all";

/// Which folder the table is restricted to
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FolderSelector {
    /// Show bookmarks from every folder
    #[default]
    All,
    /// Show only bookmarks whose folder path is exactly this string
    Path(String),
}

impl FolderSelector {
    /// Build a selector from a selector option value, where `"all"` selects every folder
    #[must_use]
    pub fn from_option_value(value: &str) -> Self {
        if value == ALL_FOLDERS {
            Self::All
        } else {
            Self::Path(value.to_string())
        }
    }

    /// The option value for this selector
    #[must_use]
    pub fn option_value(&self) -> &str {
        match self {
            Self::All => ALL_FOLDERS,
            Self::Path(path) => path,
        }
    }
}

impl FromStr for FolderSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_option_value(s))
    }
}

impl fmt::Display for FolderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All Bookmarks"),
            Self::Path(path) => write!(f, "{}", crate::bookmarks::folder_label(path)),
        }
    }
}

/// Folder names whose bookmarks are hidden
///
/// Membership is case-sensitive (`"Work"` and `"work"` are two entries);
/// matching against folder paths is not. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ExclusionSet {
    names: Vec<String>,
}

impl ExclusionSet {
    /// Create an empty exclusion set
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Add a folder name. Surrounding whitespace is trimmed; empty names and
    /// names already present are ignored.
    ///
    /// Returns `true` if the set changed.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.names.push(name.to_string());
        true
    }

    /// Add every entry of a comma-separated list, in order
    ///
    /// Returns the number of names actually added.
    pub fn insert_list(&mut self, list: &str) -> usize {
        list.split(',').filter(|name| self.insert(name)).count()
    }

    /// Remove a folder name, trimmed like [`insert`](Self::insert). Returns
    /// `true` if it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let name = name.trim();
        let before = self.names.len();
        self.names.retain(|existing| existing != name);
        self.names.len() != before
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for ExclusionSet {
    fn from(names: Vec<String>) -> Self {
        names.into_iter().collect()
    }
}

impl From<ExclusionSet> for Vec<String> {
    fn from(set: ExclusionSet) -> Self {
        set.names
    }
}
