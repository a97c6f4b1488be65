//! Request dispatch: one selection against one table

use polars::prelude::*;
use serde::Serialize;

use super::bivariate::{summarize_two, BivariateAnalysis};
use super::config::AnalysisConfig;
use super::overview::{overview, Overview};
use super::univariate::{summarize_one, UnivariateAnalysis};
use crate::error::{AnalysisError, Result};

/// What the user asked to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "menu", rename_all = "snake_case")]
pub enum Selection {
    Overview,
    Univariate { column: String },
    Bivariate { first: String, second: String },
}

impl Selection {
    pub fn name(&self) -> &'static str {
        match self {
            Selection::Overview => "overview",
            Selection::Univariate { .. } => "univariate",
            Selection::Bivariate { .. } => "bivariate",
        }
    }
}

/// Result of one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "menu", content = "result", rename_all = "snake_case")]
pub enum AnalysisOutcome {
    Overview(Overview),
    Univariate(UnivariateAnalysis),
    Bivariate(BivariateAnalysis),
}

/// Run a selection against a table.
pub fn run_selection(
    df: &DataFrame,
    selection: &Selection,
    config: &AnalysisConfig,
) -> Result<AnalysisOutcome> {
    match selection {
        Selection::Overview => Ok(AnalysisOutcome::Overview(overview(df, config)?)),
        Selection::Univariate { column } => {
            require_name(column, "a column is required for univariate analysis")?;
            Ok(AnalysisOutcome::Univariate(summarize_one(df, column, config)?))
        }
        Selection::Bivariate { first, second } => {
            require_name(first, "the first column of the pair is missing")?;
            require_name(second, "the second column of the pair is missing")?;
            Ok(AnalysisOutcome::Bivariate(summarize_two(
                df, first, second, config,
            )?))
        }
    }
}

fn require_name(name: &str, message: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AnalysisError::IncompleteSelection(message.to_string()));
    }
    Ok(())
}
