//! Whole-table overview: shape, nulls, describe, duplicates and correlation

use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::classify::{classify, numeric_values, text_values, ColumnClass};
use super::config::AnalysisConfig;
use super::correlation::{correlation_matrix, CorrelationMatrix};
use super::missing::{count_duplicate_rows, null_counts, NullCount};
use super::notice::Notice;
use super::stats::{describe_numeric, value_counts, CategoricalSummary, NumericSummary};
use crate::error::Result;

/// Number of rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

/// Storage and class information for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub class: ColumnClass,
    pub non_null: usize,
}

/// First rows of the table, rendered as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TablePreview {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Describe statistics for one column, following the rule for its class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "class", rename_all = "lowercase")]
pub enum DescribeStats {
    Categorical(CategoricalSummary),
    Numerical(NumericSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescription {
    pub column: String,
    pub stats: DescribeStats,
}

/// Overview of a full table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub shape: Shape,
    pub columns: Vec<ColumnInfo>,
    pub preview: TablePreview,
    pub null_counts: Vec<NullCount>,
    pub describe: Vec<ColumnDescription>,
    pub duplicate_rows: usize,
    /// Absent when the table has no numerical columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation: Option<CorrelationMatrix>,
    pub notices: Vec<Notice>,
}

/// Build the overview of a table.
pub fn overview(df: &DataFrame, config: &AnalysisConfig) -> Result<Overview> {
    let (rows, cols) = df.shape();
    debug!(rows, cols, "building overview");

    let mut notices = Vec::new();
    if rows == 0 {
        notices.push(Notice::EmptyTable);
    }

    if rows > 0 {
        for col in df.get_columns() {
            if col.null_count() == rows {
                notices.push(Notice::EmptyColumn {
                    column: col.name().to_string(),
                });
            }
        }
    }

    let columns: Vec<ColumnInfo> = df
        .get_columns()
        .iter()
        .map(|col| ColumnInfo {
            name: col.name().to_string(),
            dtype: col.dtype().to_string(),
            class: classify(col),
            non_null: col.len() - col.null_count(),
        })
        .collect();

    let describe = df
        .get_columns()
        .iter()
        .map(describe_column)
        .collect::<PolarsResult<Vec<_>>>()?;

    let correlation = correlation_matrix(df)?;
    if correlation.is_none() {
        notices.push(Notice::NoNumericColumns);
    }

    Ok(Overview {
        shape: Shape {
            rows,
            columns: cols,
        },
        columns,
        preview: preview(df, config.preview_rows)?,
        null_counts: null_counts(df),
        describe,
        duplicate_rows: count_duplicate_rows(df)?,
        correlation,
        notices,
    })
}

/// Describe one column using the rule for its class.
pub fn describe_column(column: &Column) -> PolarsResult<ColumnDescription> {
    let stats = match classify(column) {
        ColumnClass::Categorical => {
            let values = text_values(column)?;
            let counts = value_counts(values.iter().map(|v| v.as_deref()));
            DescribeStats::Categorical(CategoricalSummary::from_counts(&counts))
        }
        ColumnClass::Numerical => {
            let values: Vec<f64> = numeric_values(column)?.into_iter().flatten().collect();
            DescribeStats::Numerical(describe_numeric(&values))
        }
    };

    Ok(ColumnDescription {
        column: column.name().to_string(),
        stats,
    })
}

/// First `n` rows of the table as text cells.
pub fn preview(df: &DataFrame, n: usize) -> PolarsResult<TablePreview> {
    let head = df.head(Some(n));
    let columns: Vec<Vec<Option<String>>> = head
        .get_columns()
        .iter()
        .map(text_values)
        .collect::<PolarsResult<_>>()?;

    let rows = (0..head.height())
        .map(|row| columns.iter().map(|c| c[row].clone()).collect())
        .collect();

    Ok(TablePreview {
        columns: head
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
    })
}
