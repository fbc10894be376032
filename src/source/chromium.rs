//! Chromium profile `Bookmarks` file support
//!
//! Chromium-based browsers persist bookmarks as a JSON document with a
//! `roots` object. This module converts that document into the node shape the
//! browser's `bookmarks.getTree` API returns, so the rest of the crate only
//! ever sees one tree format.

use super::BookmarkNode;
use serde::Deserialize;

/// Milliseconds between 1601-01-01 (the Windows epoch Chromium uses) and the Unix epoch
const WINDOWS_TO_UNIX_EPOCH_MS: i64 = 11_644_473_600_000;

/// Id the browser API assigns to the invisible root node
pub const ROOT_NODE_ID: &str = "0";

/// Top-level Chromium document
#[derive(Debug, Deserialize)]
pub struct ChromiumDocument {
    pub roots: ChromiumRoots,
}

/// The permanent root folders, in the order the browser presents them
#[derive(Debug, Deserialize)]
pub struct ChromiumRoots {
    pub bookmark_bar: Option<ChromiumNode>,
    pub other: Option<ChromiumNode>,
    pub synced: Option<ChromiumNode>,
}

/// A node as stored on disk
#[derive(Debug, Deserialize)]
pub struct ChromiumNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub url: Option<String>,
    pub children: Option<Vec<ChromiumNode>>,
    pub date_added: Option<String>,
}

impl ChromiumDocument {
    /// Convert into the forest shape returned by the browser API: a single
    /// untitled root whose children are the permanent folders.
    #[must_use]
    pub fn into_tree(self) -> Vec<BookmarkNode> {
        let ChromiumRoots {
            bookmark_bar,
            other,
            synced,
        } = self.roots;

        let children = [bookmark_bar, other, synced]
            .into_iter()
            .flatten()
            .map(|node| node.into_node(ROOT_NODE_ID))
            .collect();

        vec![BookmarkNode {
            id: ROOT_NODE_ID.to_string(),
            children: Some(children),
            ..BookmarkNode::default()
        }]
    }
}

impl ChromiumNode {
    fn into_node(self, parent_id: &str) -> BookmarkNode {
        let date_added = self.date_added.as_deref().and_then(chromium_time_to_unix_ms);
        let is_url = self.kind == "url" || (self.kind.is_empty() && self.url.is_some());

        let children = if is_url {
            None
        } else {
            let id = self.id.clone();
            Some(
                self.children
                    .unwrap_or_default()
                    .into_iter()
                    .map(|child| child.into_node(&id))
                    .collect(),
            )
        };

        BookmarkNode {
            id: self.id,
            title: self.name,
            parent_id: Some(parent_id.to_string()),
            url: if is_url { self.url } else { None },
            children,
            date_added,
        }
    }
}

/// Convert a Chromium timestamp (microseconds since 1601, as a decimal string)
/// to milliseconds since the Unix epoch. Zero and unparsable values are unknown.
#[must_use]
pub fn chromium_time_to_unix_ms(raw: &str) -> Option<i64> {
    let micros: i64 = raw.trim().parse().ok()?;
    if micros <= 0 {
        return None;
    }
    Some(micros / 1000 - WINDOWS_TO_UNIX_EPOCH_MS)
}
