//! Error types for sorting

use thiserror::Error;

/// Errors that can occur while interpreting a sort request
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// The requested column is not one of the sortable columns
    #[error("Unknown column '{0}' (expected one of: title, folder, url, dateAdded)")]
    UnknownColumn(String),
}
