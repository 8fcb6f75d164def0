use std::io;

use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Rejected input (empty resource name, negative rate, unknown category).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Positional reference outside the current table bounds.
    #[error("row index {index} out of bounds (table has {len} rows)")]
    Index { index: usize, len: usize },

    /// Row identifier not present in the current table.
    #[error("no row with id {0}")]
    UnknownId(crate::ledger::entry::EntryId),

    /// IO error while reading or writing the persisted table.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed persisted table (bad header, unknown category, bad number).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
