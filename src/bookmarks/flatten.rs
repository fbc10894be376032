//! Tree flattening
//!
//! Walks the host tree depth-first in pre-order, carrying the titles of the
//! folders above the current node. Every bookmark becomes a record whose
//! folder path is those titles joined with [`PATH_SEPARATOR`]; every folder is
//! registered before its children are visited.

use super::{BookmarkRecord, FolderRegistry, PATH_SEPARATOR, UNTITLED_FOLDER};
use crate::source::BookmarkNode;

/// Output of a flattening pass
#[derive(Debug, Clone, Default)]
pub struct Flattened {
    pub records: Vec<BookmarkRecord>,
    pub registry: FolderRegistry,
}

/// Flatten a forest of root nodes into records and a folder registry
///
/// A node with a non-empty URL is a bookmark, even if it also has children
/// (those are not visited). Any other node is a folder; a node with neither
/// URL nor children is an empty folder.
#[must_use]
pub fn flatten(roots: &[BookmarkNode]) -> Flattened {
    let mut out = Flattened::default();
    let mut path = Vec::new();
    visit(roots, &mut path, &mut out);
    tracing::debug!(
        records = out.records.len(),
        folders = out.registry.len(),
        "flattened bookmark tree"
    );
    out
}

fn visit<'a>(nodes: &'a [BookmarkNode], path: &mut Vec<&'a str>, out: &mut Flattened) {
    for node in nodes {
        if let Some(url) = node.bookmark_url() {
            if node.children.as_ref().is_some_and(|c| !c.is_empty()) {
                tracing::debug!(id = %node.id, "bookmark has children; ignoring them");
            }
            out.records.push(BookmarkRecord {
                id: node.id.clone(),
                title: node.title.clone(),
                url: url.to_string(),
                folder_path: path.join(PATH_SEPARATOR),
                folder_id: node.parent_id.clone().unwrap_or_default(),
                date_added: node.date_added.filter(|&ms| ms != 0),
            });
            continue;
        }

        let title = if node.title.is_empty() {
            UNTITLED_FOLDER
        } else {
            node.title.as_str()
        };
        out.registry.register(&node.id, title);

        match &node.children {
            Some(children) => {
                path.push(title);
                visit(children, path, out);
                path.pop();
            }
            None => tracing::warn!(id = %node.id, "node has neither url nor children; treating as empty folder"),
        }
    }
}
