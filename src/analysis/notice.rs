//! Non-fatal notices for degenerate but valid input.

use std::fmt;

use serde::Serialize;

/// A condition the user should see, attached to a result instead of failing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The table has no rows.
    EmptyTable,
    /// No numerical columns exist, so there is no correlation matrix.
    NoNumericColumns,
    /// The column has no non-null values.
    EmptyColumn { column: String },
    /// A categorical column holds a single distinct value.
    SingleCategory { column: String },
    /// A numerical column holds a single distinct value, so its spread is zero or undefined.
    ConstantColumn { column: String },
    /// The same column was selected for both axes.
    SameColumn { column: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyTable => write!(f, "The table has no rows"),
            Notice::NoNumericColumns => {
                write!(f, "No numeric data available for correlation matrix")
            }
            Notice::EmptyColumn { column } => {
                write!(f, "Column '{}' has no non-null values", column)
            }
            Notice::SingleCategory { column } => {
                write!(f, "Column '{}' has a single category", column)
            }
            Notice::ConstantColumn { column } => {
                write!(f, "Column '{}' is constant; spread is zero or undefined", column)
            }
            Notice::SameColumn { column } => {
                write!(f, "Column '{}' was selected for both axes", column)
            }
        }
    }
}
