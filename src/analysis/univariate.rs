//! Single-column analysis

use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::chart::ChartSpec;
use super::classify::{classify, column_by_name, numeric_values, text_values, ColumnClass};
use super::config::AnalysisConfig;
use super::notice::Notice;
use super::stats::{describe_numeric, value_counts, NumericSummary, ValueCount};
use crate::error::Result;

/// Summary table for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "table", rename_all = "snake_case")]
pub enum UnivariateSummary {
    /// Frequency per distinct value, most frequent first.
    ValueCounts(Vec<ValueCount>),
    /// Descriptive statistics.
    Describe(NumericSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnivariateAnalysis {
    pub column: String,
    pub class: ColumnClass,
    pub summary: UnivariateSummary,
    pub charts: Vec<ChartSpec>,
    pub notices: Vec<Notice>,
}

/// Analyse one column according to its class.
///
/// Categorical columns get value counts with a count plot and a pie chart.
/// Numerical columns get describe statistics with a histogram, a density
/// curve and a box plot.
pub fn summarize_one(
    df: &DataFrame,
    column_name: &str,
    config: &AnalysisConfig,
) -> Result<UnivariateAnalysis> {
    let column = column_by_name(df, column_name)?;
    let class = classify(column);
    debug!(column = column_name, %class, "univariate analysis");

    let mut notices = Vec::new();

    let (summary, charts) = match class {
        ColumnClass::Categorical => {
            let values = text_values(column)?;
            let counts = value_counts(values.iter().map(|v| v.as_deref()));

            match counts.len() {
                0 => notices.push(Notice::EmptyColumn {
                    column: column_name.to_string(),
                }),
                1 => notices.push(Notice::SingleCategory {
                    column: column_name.to_string(),
                }),
                _ => {}
            }

            (
                UnivariateSummary::ValueCounts(counts),
                vec![
                    ChartSpec::count(column_name),
                    ChartSpec::pie(column_name, config.pie_decimals),
                ],
            )
        }
        ColumnClass::Numerical => {
            let values: Vec<f64> = numeric_values(column)?.into_iter().flatten().collect();
            let described = describe_numeric(&values);

            if described.count == 0 {
                notices.push(Notice::EmptyColumn {
                    column: column_name.to_string(),
                });
            } else if described.min == described.max {
                notices.push(Notice::ConstantColumn {
                    column: column_name.to_string(),
                });
            }

            (
                UnivariateSummary::Describe(described),
                vec![
                    ChartSpec::histogram(column_name, config.histogram_bins),
                    ChartSpec::density(column_name),
                    ChartSpec::box_single(column_name),
                ],
            )
        }
    };

    Ok(UnivariateAnalysis {
        column: column_name.to_string(),
        class,
        summary,
        charts,
        notices,
    })
}
