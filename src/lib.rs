//! Tabscope: Exploratory Analysis Library
//!
//! Classifies the columns of a CSV table and produces summary statistics,
//! missing value and duplicate diagnostics, and chart plans for one or two
//! selected columns.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod report;
pub mod utils;

pub use error::AnalysisError;
