//! Error types for wikitable-extract.
//!
//! This module defines the error types returned by table extraction and the
//! surrounding record operations.

/// Error type for table extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No node matched the table selector in the document.
    #[error("no table found in document")]
    TableNotFound,

    /// A set-once table field was assigned a second time.
    #[error("table {0} already initialized")]
    AlreadyInitialized(&'static str),

    /// Extraction produced zero rows.
    #[error("table has no rows")]
    EmptyTable,

    /// A row's cell count differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowLengthMismatch {
        /// Zero-based index of the offending row.
        row: usize,
        /// Cell count of the first row.
        expected: usize,
        /// Cell count of the offending row.
        found: usize,
    },

    /// Supplied titles do not line up with the row width.
    #[error("{titles} titles for {columns} columns")]
    ColumnCountMismatch {
        /// Number of titles supplied.
        titles: usize,
        /// Width of the validated rows.
        columns: usize,
    },

    /// A record lacks a column required by the caller.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Externally supplied configuration is absent or invalid.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for table extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
