//! Column classification and value extraction

use polars::prelude::*;
use serde::Serialize;

use crate::error::{AnalysisError, Result};

/// Analysis class of a column, derived from its storage dtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnClass {
    Categorical,
    Numerical,
}

impl ColumnClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnClass::Categorical => "categorical",
            ColumnClass::Numerical => "numerical",
        }
    }
}

impl std::fmt::Display for ColumnClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a column by its storage dtype.
///
/// Text storage is categorical and numeric storage is numerical. Values are
/// never parsed, so a text column of digit strings stays categorical. An
/// empty column is categorical since no numeric type can be inferred.
pub fn classify(column: &Column) -> ColumnClass {
    if column.len() == 0 {
        return ColumnClass::Categorical;
    }
    classify_dtype(column.dtype())
}

/// Classification rule for a bare dtype.
pub fn classify_dtype(dtype: &DataType) -> ColumnClass {
    let numeric = dtype.is_primitive_numeric()
        || matches!(dtype, DataType::Boolean | DataType::Decimal(_, _))
        || dtype.is_temporal();

    if numeric {
        ColumnClass::Numerical
    } else {
        ColumnClass::Categorical
    }
}

/// Classify every column of a table, in table order.
pub fn classify_table(df: &DataFrame) -> Vec<(String, ColumnClass)> {
    df.get_columns()
        .iter()
        .map(|col| (col.name().to_string(), classify(col)))
        .collect()
}

/// Names of the numerical columns, in table order.
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    classify_table(df)
        .into_iter()
        .filter(|(_, class)| *class == ColumnClass::Numerical)
        .map(|(name, _)| name)
        .collect()
}

/// Look up a column by name, reporting the available names when it is missing.
pub fn column_by_name<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| AnalysisError::ColumnNotFound {
        column: name.to_string(),
        available: df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

/// Column values as `f64`, with nulls and NaN both mapped to `None`.
pub fn numeric_values(column: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let floats = column
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    let ca = floats.f64()?;

    Ok(ca
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

/// Column values rendered as text, with nulls mapped to `None`.
///
/// Dtypes without a string cast (nested types) fall back to their display form.
pub fn text_values(column: &Column) -> PolarsResult<Vec<Option<String>>> {
    let series = column.as_materialized_series();

    match series.cast(&DataType::String) {
        Ok(strings) => {
            let ca = strings.str()?;
            Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect())
        }
        Err(_) => Ok(series
            .rechunk()
            .iter()
            .map(|v| if v.is_null() { None } else { Some(v.to_string()) })
            .collect()),
    }
}
