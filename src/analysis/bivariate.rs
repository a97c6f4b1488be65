//! Two-column analysis with class-driven dispatch

use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::chart::ChartSpec;
use super::classify::{classify, column_by_name, text_values, ColumnClass};
use super::config::AnalysisConfig;
use super::notice::Notice;
use super::stats::{contingency, value_counts, ContingencyTable};
use crate::error::Result;

/// Analysis mode for a pair of columns, carrying the canonical column roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AnalysisMode {
    NumNum { x: String, y: String },
    CatCat { rows: String, columns: String },
    CatNum { categorical: String, numerical: String },
}

impl AnalysisMode {
    /// Pick the mode for two classified columns.
    ///
    /// When exactly one column is categorical it always becomes the grouping
    /// axis, whatever the argument order.
    pub fn resolve(first: (&str, ColumnClass), second: (&str, ColumnClass)) -> Self {
        use ColumnClass::{Categorical, Numerical};

        match (first, second) {
            ((x, Numerical), (y, Numerical)) => AnalysisMode::NumNum {
                x: x.to_string(),
                y: y.to_string(),
            },
            ((rows, Categorical), (columns, Categorical)) => AnalysisMode::CatCat {
                rows: rows.to_string(),
                columns: columns.to_string(),
            },
            ((cat, Categorical), (num, Numerical)) | ((num, Numerical), (cat, Categorical)) => {
                AnalysisMode::CatNum {
                    categorical: cat.to_string(),
                    numerical: num.to_string(),
                }
            }
        }
    }

    /// Column names in role order.
    pub fn columns(&self) -> (&str, &str) {
        match self {
            AnalysisMode::NumNum { x, y } => (x.as_str(), y.as_str()),
            AnalysisMode::CatCat { rows, columns } => (rows.as_str(), columns.as_str()),
            AnalysisMode::CatNum {
                categorical,
                numerical,
            } => (categorical.as_str(), numerical.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::NumNum { .. } => "Numerical vs Numerical",
            AnalysisMode::CatCat { .. } => "Categorical vs Categorical",
            AnalysisMode::CatNum { .. } => "Categorical vs Numerical",
        }
    }
}

/// Summary table for a pair of columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "table", rename_all = "snake_case")]
pub enum BivariateSummary {
    /// Chart-only modes.
    Empty,
    Contingency(ContingencyTable),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BivariateAnalysis {
    pub mode: AnalysisMode,
    pub summary: BivariateSummary,
    pub charts: Vec<ChartSpec>,
    pub notices: Vec<Notice>,
}

/// Analyse a pair of columns.
///
/// Numerical pairs get a scatter plot. Categorical pairs get a contingency
/// table and its heatmap. Mixed pairs get a grouped box plot, a bar of means
/// and a stacked histogram, with the categorical column as the grouping axis.
pub fn summarize_two(
    df: &DataFrame,
    col1_name: &str,
    col2_name: &str,
    config: &AnalysisConfig,
) -> Result<BivariateAnalysis> {
    let col1 = column_by_name(df, col1_name)?;
    let col2 = column_by_name(df, col2_name)?;

    let mode = AnalysisMode::resolve((col1_name, classify(col1)), (col2_name, classify(col2)));
    debug!(?mode, "bivariate analysis");

    let mut notices = Vec::new();
    if col1_name == col2_name {
        notices.push(Notice::SameColumn {
            column: col1_name.to_string(),
        });
    }

    // Canonical role order, so swapping the arguments yields the same notices
    let (first, second) = mode.columns();
    notices.extend(column_notices(column_by_name(df, first)?)?);
    if first != second {
        notices.extend(column_notices(column_by_name(df, second)?)?);
    }

    let (summary, charts) = match &mode {
        AnalysisMode::NumNum { x, y } => (BivariateSummary::Empty, vec![ChartSpec::scatter(x, y)]),
        AnalysisMode::CatCat { rows, columns } => {
            let row_values = text_values(column_by_name(df, rows)?)?;
            let column_values = text_values(column_by_name(df, columns)?)?;
            let table = contingency(
                rows,
                columns,
                row_values
                    .iter()
                    .map(|v| v.as_deref())
                    .zip(column_values.iter().map(|v| v.as_deref())),
            );
            (
                BivariateSummary::Contingency(table),
                vec![ChartSpec::heatmap(rows, columns, &config.heatmap_color_map)],
            )
        }
        AnalysisMode::CatNum {
            categorical,
            numerical,
        } => (
            BivariateSummary::Empty,
            vec![
                ChartSpec::box_grouped(categorical, numerical),
                ChartSpec::bar_mean(categorical, numerical),
                ChartSpec::stacked_histogram(numerical, categorical),
            ],
        ),
    };

    Ok(BivariateAnalysis {
        mode,
        summary,
        charts,
        notices,
    })
}

/// Notices for a selected column without values or with a single category.
fn column_notices(column: &Column) -> Result<Vec<Notice>> {
    let name = column.name().to_string();

    if column.len() == column.null_count() {
        return Ok(vec![Notice::EmptyColumn { column: name }]);
    }

    if classify(column) == ColumnClass::Categorical {
        let values = text_values(column)?;
        if value_counts(values.iter().map(|v| v.as_deref())).len() == 1 {
            return Ok(vec![Notice::SingleCategory { column: name }]);
        }
    }
    Ok(Vec::new())
}
