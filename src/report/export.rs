//! JSON export of analysis results

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::analysis::{AnalysisConfig, AnalysisOutcome, Selection};

/// Metadata about the analysis run
#[derive(Serialize)]
pub struct ExportMetadata {
    /// Timestamp of the analysis (ISO 8601 format)
    pub timestamp: String,
    /// Tabscope version
    pub tabscope_version: String,
    /// Input file path
    pub input_file: String,
    /// Menu and columns selected
    pub selection: Selection,
    /// Settings in effect
    pub config: AnalysisConfig,
}

/// Complete analysis export with metadata
#[derive(Serialize)]
pub struct AnalysisExport<'a> {
    pub metadata: ExportMetadata,
    pub analysis: &'a AnalysisOutcome,
}

impl<'a> AnalysisExport<'a> {
    pub fn new(
        outcome: &'a AnalysisOutcome,
        selection: &Selection,
        config: &AnalysisConfig,
        input_file: &str,
    ) -> Self {
        Self {
            metadata: ExportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                tabscope_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: input_file.to_string(),
                selection: selection.clone(),
                config: config.clone(),
            },
            analysis: outcome,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize analysis to JSON")
    }
}

/// Export an analysis outcome to a JSON file
pub fn export_analysis(export: &AnalysisExport<'_>, output_path: &Path) -> Result<()> {
    let json = export.to_json()?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write analysis to {}", output_path.display()))?;

    Ok(())
}
