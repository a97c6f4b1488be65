//! Error types for loading and analysing tables.
//!
//! `AnalysisError` covers the two user-facing failure families (a file that
//! cannot be parsed, and a column selection that does not match the table)
//! plus internal polars failures. Degenerate but valid input is never an
//! error; see [`crate::analysis::Notice`].

use std::path::PathBuf;

use polars::error::PolarsError;
use thiserror::Error;

/// Errors produced by the analysis library.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The input could not be parsed as comma-separated tabular text.
    #[error("Could not parse '{}' as CSV: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// The input file extension is not a supported tabular format.
    #[error("Unsupported file format: '{0}'. Supported formats: csv")]
    UnsupportedFormat(String),

    /// The input file could not be read.
    #[error("Could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selected column does not exist in the table.
    #[error("Column '{column}' not found. Available columns: {}", available.join(", "))]
    ColumnNotFound {
        column: String,
        available: Vec<String>,
    },

    /// A selection is missing one of its required column names.
    #[error("Incomplete selection: {0}")]
    IncompleteSelection(String),

    /// A chart plan lacks a column for one of its field roles.
    #[error("Invalid chart plan: {0}")]
    InvalidChart(String),

    /// Unexpected failure inside polars while computing a result.
    #[error("Internal polars error: {0}")]
    Polars(#[from] PolarsError),
}

impl AnalysisError {
    /// True for failures caused by the uploaded file itself.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::Parse { .. } | AnalysisError::UnsupportedFormat(_) | AnalysisError::Io { .. }
        )
    }

    /// True for failures caused by a column selection that does not fit the table.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::ColumnNotFound { .. } | AnalysisError::IncompleteSelection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
