use std::path::PathBuf;

use thiserror::Error;

/// Failures while reading the cat data file. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: could not split fields")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 7 comma-separated fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}: {field} is not a number: {value:?}")]
    InvalidNumber {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: unknown activity level {value:?} (expected low, medium or high)")]
    UnknownActivity { line: u64, value: String },
}
