//! Correlation matrix over the numerical columns of a table

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use super::classify::{classify, numeric_values, ColumnClass};
use super::stats::pearson;

/// Square Pearson correlation matrix.
///
/// `values[i][j]` is `None` when the correlation is undefined (zero variance
/// or no complete pairs).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == a)?;
        let j = self.columns.iter().position(|c| c == b)?;
        self.values[i][j]
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Compute the correlation matrix of all numerical columns.
///
/// Uses pairwise-complete observations. Returns `Ok(None)` when the table has
/// no numerical columns, so callers can tell "no numeric data" apart from an
/// empty matrix.
pub fn correlation_matrix(df: &DataFrame) -> PolarsResult<Option<CorrelationMatrix>> {
    let mut columns = Vec::new();
    let mut data: Vec<Vec<Option<f64>>> = Vec::new();

    for col in df.get_columns() {
        if classify(col) == ColumnClass::Numerical {
            columns.push(col.name().to_string());
            data.push(numeric_values(col)?);
        }
    }

    let n = columns.len();
    if n == 0 {
        return Ok(None);
    }

    // Upper triangle, computed in parallel
    let pairs: Vec<(usize, usize)> = (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .collect();

    let upper: Vec<(usize, usize, Option<f64>)> = pairs
        .par_iter()
        .map(|&(i, j)| {
            let r = pearson(data[i].iter().copied().zip(data[j].iter().copied()));
            (i, j, r)
        })
        .collect();

    let mut values = vec![vec![None; n]; n];
    for (i, column) in data.iter().enumerate() {
        values[i][i] = pearson(column.iter().copied().zip(column.iter().copied())).map(|_| 1.0);
    }
    for (i, j, r) in upper {
        values[i][j] = r;
        values[j][i] = r;
    }

    Ok(Some(CorrelationMatrix { columns, values }))
}
