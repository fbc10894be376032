//! Marktable - browser bookmarks as a flat, sortable, filterable table
//!
//! This library flattens a browser bookmark tree into rows carrying a
//! readable folder path, narrows them with a folder selector and
//! case-insensitive folder exclusions, and sorts them by column.
//!
//! The data layer ([`bookmarks`], [`filters`], [`sort`], [`table`]) is pure
//! and has no knowledge of where bookmarks come from or how they are shown;
//! [`source`] supplies trees and [`output`] renders views.

use thiserror::Error;

pub mod bookmarks;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filters;
pub mod logging;
pub mod output;
pub mod sort;
pub mod source;
pub mod table;

#[cfg(test)]
pub mod testing;

pub use bookmarks::{BookmarkRecord, FolderRegistry};
pub use filters::{ExclusionSet, FolderSelector};
pub use sort::{ColumnKey, SortState};
pub use source::{BookmarkFile, BookmarkNode, BookmarkSource};
pub use table::{BookmarkTable, Counts, TableView};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum MarktableError {
    /// The bookmark tree could not be fetched
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// CSV output failed
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// JSON output failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
