//! Error types for cardsphere_export
//!
//! `ExportError` aborts the run. `RowError` only ever reaches the error log:
//! the offending row is reported and processing moves on to the next one.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: missing files, unreadable override tables, network failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid override table {path}: {reason}")]
    Overrides { path: PathBuf, reason: String },

    #[error("Network error looking up {catalog_id}: {source}")]
    Network {
        catalog_id: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Multiverse Bridge returned {status} looking up {catalog_id}")]
    Status {
        catalog_id: String,
        status: reqwest::StatusCode,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    CsvWrite(#[from] csv::Error),
}

impl ExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        ExportError::Csv {
            path: path.into(),
            source,
        }
    }
}

/// Per-row problems that land in error.log
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("MVB lookup FAILED")]
    LookupFailed,

    #[error("Unknown promo with set code: '{collector_number}'")]
    UnknownPromo { collector_number: String },

    #[error("Unfinity Attractions not supported yet: [{set_code}]")]
    UnfinityAttractions { set_code: String },

    #[error("Alternate art old cards not supported yet: [{set_code}]")]
    OldAlternateArt { set_code: String },

    #[error("Row has {found} columns, expected at least {expected}")]
    MissingColumns { found: usize, expected: usize },

    #[error("Unknown language code '{0}'")]
    UnknownLanguage(String),

    #[error("Collector number '{0}' is not numeric")]
    NonNumericCollectorNumber(String),

    #[error("Empty collector number")]
    EmptyCollectorNumber,

    #[error("Quantity '{0}' is not a number")]
    InvalidQuantity(String),

    #[error("Unreadable CSV record: {0}")]
    Unreadable(String),
}

impl RowError {
    /// Whether the row is still written to the output after being logged
    pub fn is_skipping(&self) -> bool {
        !matches!(self, RowError::LookupFailed)
    }
}

/// Result alias for cardsphere_export operations
pub type Result<T> = std::result::Result<T, ExportError>;
