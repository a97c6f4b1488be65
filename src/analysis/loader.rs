//! Dataset loader for CSV files

use std::io::Cursor;
use std::path::{Path, PathBuf};

use polars::prelude::*;
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::utils::{create_spinner, finish_with_success};

/// Label used in errors for tables parsed from in-memory bytes.
const UPLOAD_LABEL: &str = "<upload>";

fn schema_length(infer_schema_length: usize) -> Option<usize> {
    // 0 means full table scan
    if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    }
}

/// Run a CSV read, retrying once with a full-table schema scan when a value
/// past the inference window does not fit the inferred dtype.
fn with_full_scan_retry<F>(infer_schema_length: usize, read: F) -> PolarsResult<DataFrame>
where
    F: Fn(Option<usize>) -> PolarsResult<DataFrame>,
{
    match read(schema_length(infer_schema_length)) {
        Err(err) if infer_schema_length != 0 && !matches!(err, PolarsError::IO { .. }) => {
            debug!(
                infer_schema_length,
                error = %err,
                "schema inference window too short, retrying with a full scan"
            );
            read(None)
        }
        other => other,
    }
}

/// Load a comma-separated file into a DataFrame.
///
/// Files must carry a `.csv` extension or none at all.
pub fn load_dataset(path: &Path, infer_schema_length: usize) -> Result<DataFrame> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if !extension.is_empty() && extension != "csv" {
        return Err(AnalysisError::UnsupportedFormat(extension));
    }

    std::fs::metadata(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let df = with_full_scan_retry(infer_schema_length, |length| {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(length)
            .finish()
            .and_then(|lf| lf.collect())
    })
    .map_err(|source| AnalysisError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), rows = df.height(), cols = df.width(), "dataset loaded");
    Ok(df)
}

/// Parse CSV bytes held in memory, such as an uploaded file.
pub fn load_csv_bytes(bytes: &[u8], infer_schema_length: usize) -> Result<DataFrame> {
    with_full_scan_retry(infer_schema_length, |length| {
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(length)
            .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
            .finish()
    })
    .map_err(|source| AnalysisError::Parse {
        path: PathBuf::from(UPLOAD_LABEL),
        source,
    })
}

/// Load a dataset behind a spinner, returning it with rows, columns and estimated MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));

    let df = match load_dataset(path, infer_schema_length) {
        Ok(df) => df,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e);
        }
    };

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    finish_with_success(&spinner, "Dataset loaded");

    Ok((df, rows, cols, memory_mb))
}
