//! Missing value and duplicate row diagnostics

use std::collections::HashSet;

use polars::prelude::*;
use serde::Serialize;

use super::classify::text_values;

/// Null count of one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NullCount {
    pub column: String,
    pub nulls: usize,
}

/// Null count per column, in table order.
pub fn null_counts(df: &DataFrame) -> Vec<NullCount> {
    df.get_columns()
        .iter()
        .map(|col| NullCount {
            column: col.name().to_string(),
            nulls: col.null_count(),
        })
        .collect()
}

/// Number of rows identical, across every column, to an earlier row.
///
/// Nulls compare equal to each other.
pub fn count_duplicate_rows(df: &DataFrame) -> PolarsResult<usize> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(0);
    }

    let columns: Vec<Vec<Option<String>>> = df
        .get_columns()
        .iter()
        .map(text_values)
        .collect::<PolarsResult<_>>()?;

    let mut seen: HashSet<Vec<Option<&str>>> = HashSet::with_capacity(df.height());
    let mut duplicates = 0;

    for row in 0..df.height() {
        let key: Vec<Option<&str>> = columns.iter().map(|c| c[row].as_deref()).collect();
        if !seen.insert(key) {
            duplicates += 1;
        }
    }

    Ok(duplicates)
}
