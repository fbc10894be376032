//! Bookmark sources
//!
//! A source is the host platform's "get full bookmark tree" operation. It
//! delivers the whole forest in one call; there is no paging or streaming.
//!
//! Two on-disk layouts are understood:
//! - a tree file: the JSON array (or single root object) produced by the
//!   browser `bookmarks.getTree` API
//! - a Chromium profile `Bookmarks` file, recognized by its `roots` object

pub mod chromium;
pub mod error;

pub use chromium::ChromiumDocument;
pub use error::SourceError;

use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A node in the host bookmark tree
///
/// A node with a `url` is a bookmark; a node with `children` is a folder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BookmarkNode>>,

    /// Milliseconds since the Unix epoch
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_added: Option<i64>,
}

impl BookmarkNode {
    /// Create a bookmark (leaf) node
    #[must_use]
    pub fn bookmark(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Create a folder (internal) node
    #[must_use]
    pub fn folder(id: impl Into<String>, title: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            children: Some(children),
            ..Self::default()
        }
    }

    /// Set the date this node was added
    #[must_use]
    pub const fn with_date_added(mut self, millis: i64) -> Self {
        self.date_added = Some(millis);
        self
    }

    /// Set the parent id
    #[must_use]
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// The node's URL, if it has a non-empty one
    #[must_use]
    pub fn bookmark_url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.is_empty())
    }
}

/// Browsers disagree on how `dateAdded` is encoded: integer, float or string.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTimestamp {
        Int(i64),
        Float(f64),
        Text(String),
    }

    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawTimestamp::Int(ms)) => Some(ms),
        #[allow(clippy::cast_possible_truncation)]
        Some(RawTimestamp::Float(ms)) if ms.is_finite() => Some(ms as i64),
        Some(RawTimestamp::Text(text)) => text.trim().parse().ok(),
        Some(RawTimestamp::Float(_)) | None => None,
    })
}

/// The host bookmark platform
///
/// Implementations deliver the full forest of root nodes in host order.
pub trait BookmarkSource {
    /// Fetch the full bookmark tree
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the tree cannot be delivered.
    fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, SourceError>;

    /// Human readable description, used in log output
    fn describe(&self) -> String;
}

/// On-disk layout of a bookmark file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileLayout {
    /// Decide from the document contents
    #[default]
    Auto,
    /// `bookmarks.getTree` JSON
    Tree,
    /// Chromium profile `Bookmarks` file
    Chromium,
}

/// A bookmark tree stored in a JSON file
///
/// The file is re-read on every fetch so a reload picks up changes.
#[derive(Debug, Clone)]
pub struct BookmarkFile {
    path: PathBuf,
    layout: FileLayout,
}

impl BookmarkFile {
    /// Open a bookmark file with automatic layout detection
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            layout: FileLayout::Auto,
        }
    }

    /// Force a specific layout
    #[must_use]
    pub const fn with_layout(mut self, layout: FileLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Path of the underlying file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_error(&self, source: serde_json::Error) -> SourceError {
        SourceError::Parse {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookmarkSource for BookmarkFile {
    fn fetch_tree(&self) -> Result<Vec<BookmarkNode>, SourceError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let document: serde_json::Value =
            serde_json::from_str(&contents).map_err(|e| self.parse_error(e))?;

        let layout = match self.layout {
            FileLayout::Auto if document.get("roots").is_some() => FileLayout::Chromium,
            FileLayout::Auto => FileLayout::Tree,
            explicit => explicit,
        };
        tracing::debug!(path = %self.path.display(), ?layout, "parsing bookmark file");

        match layout {
            FileLayout::Chromium => {
                let profile: ChromiumDocument =
                    serde_json::from_value(document).map_err(|e| self.parse_error(e))?;
                Ok(profile.into_tree())
            }
            _ => parse_tree_document(document).map_err(|reason| SourceError::UnsupportedLayout {
                path: self.path.clone(),
                reason,
            }),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Accept either a forest (array of roots) or a single root node.
fn parse_tree_document(document: serde_json::Value) -> Result<Vec<BookmarkNode>, String> {
    match document {
        serde_json::Value::Array(_) => {
            serde_json::from_value(document).map_err(|e| format!("invalid node array: {e}"))
        }
        serde_json::Value::Object(_) => serde_json::from_value::<BookmarkNode>(document)
            .map(|root| vec![root])
            .map_err(|e| format!("invalid root node: {e}")),
        other => Err(format!(
            "expected an array of nodes or a root node, found {}",
            json_kind(&other)
        )),
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"[{"id":"0","title":"","children":[
            {"id":"1","title":"Docs","parentId":"0","children":[
                {"id":"2","title":"a","url":"http://a","parentId":"1","dateAdded":1700000000000}
            ]}
        ]}]"#;
        let nodes: Vec<BookmarkNode> = serde_json::from_str(json).unwrap();
        let docs = &nodes[0].children.as_ref().unwrap()[0];
        let a = &docs.children.as_ref().unwrap()[0];
        assert_eq!(a.parent_id.as_deref(), Some("1"));
        assert_eq!(a.date_added, Some(1_700_000_000_000));
    }

    #[test]
    fn test_timestamp_encodings() {
        let nodes: Vec<BookmarkNode> = serde_json::from_str(
            r#"[{"id":"1","dateAdded":1.5e3},{"id":"2","dateAdded":"42"},{"id":"3","dateAdded":""},{"id":"4","dateAdded":null},{"id":"5"}]"#,
        )
        .unwrap();
        let dates: Vec<Option<i64>> = nodes.iter().map(|n| n.date_added).collect();
        assert_eq!(dates, vec![Some(1500), Some(42), None, None, None]);
    }

    #[test]
    fn test_bookmark_url_ignores_empty() {
        let mut node = BookmarkNode::bookmark("1", "t", "");
        assert_eq!(node.bookmark_url(), None);
        node.url = Some("http://x".into());
        assert_eq!(node.bookmark_url(), Some("http://x"));
    }

    #[test]
    fn test_file_forest() {
        let file = write_temp(r#"[{"id":"1","title":"b","url":"http://b"}]"#);
        let nodes = BookmarkFile::new(file.path()).fetch_tree().unwrap();
        assert_eq!(nodes, vec![BookmarkNode::bookmark("1", "b", "http://b")]);
    }

    #[test]
    fn test_file_single_root() {
        let file = write_temp(r#"{"id":"0","title":"","children":[]}"#);
        let nodes = BookmarkFile::new(file.path()).fetch_tree().unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "0");
    }

    #[test]
    fn test_file_detects_chromium_profile() {
        let file = write_temp(
            r#"{"roots":{"bookmark_bar":{"id":"1","name":"Bookmarks bar","type":"folder","children":[]}}}"#,
        );
        let nodes = BookmarkFile::new(file.path()).fetch_tree().unwrap();
        assert_eq!(nodes[0].id, chromium::ROOT_NODE_ID);
        assert_eq!(nodes[0].children.as_ref().unwrap()[0].title, "Bookmarks bar");
    }

    #[test]
    fn test_file_missing() {
        let result = BookmarkFile::new("/nonexistent/marktable/bookmarks.json").fetch_tree();
        assert!(matches!(result, Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_file_invalid_json() {
        let file = write_temp("{ not json");
        let result = BookmarkFile::new(file.path()).fetch_tree();
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }

    #[test]
    fn test_file_wrong_shape() {
        let file = write_temp("42");
        let result = BookmarkFile::new(file.path()).fetch_tree();
        assert!(matches!(result, Err(SourceError::UnsupportedLayout { .. })));
    }

    #[test]
    fn test_forced_chromium_layout_rejects_tree_file() {
        let file = write_temp(r#"[{"id":"1"}]"#);
        let result = BookmarkFile::new(file.path())
            .with_layout(FileLayout::Chromium)
            .fetch_tree();
        assert!(matches!(result, Err(SourceError::Parse { .. })));
    }
}
