//! Error types for bookmark sources
//!
//! A source failure is the only fallible step between the user and a rendered
//! table. Callers propagate it unchanged and keep whatever state they already
//! had.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while fetching a bookmark tree
#[derive(Debug, Error)]
pub enum SourceError {
    /// The bookmark file could not be read
    #[error("Failed to read bookmarks from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bookmark file is not valid JSON or does not match the expected shape
    #[error("Failed to parse bookmarks from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The document parsed but its layout is not one we understand
    #[error("Unsupported bookmark layout in {path}: {reason}")]
    UnsupportedLayout { path: PathBuf, reason: String },

    /// The host could not deliver a tree
    #[error("Bookmark fetch failed: {0}")]
    Unavailable(String),
}
