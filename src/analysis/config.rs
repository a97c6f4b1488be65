//! Analysis configuration shared by every summarizer.

use serde::Serialize;

/// Number of equal-width bins used by univariate histograms.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

/// Decimal places shown on pie chart percentage labels.
pub const DEFAULT_PIE_DECIMALS: u8 = 1;

/// Rows shown in the table preview.
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Colour map used for contingency heatmaps.
pub const DEFAULT_HEATMAP_COLOR_MAP: &str = "YlGnBu";

/// Grid points sampled when sketching a density curve.
pub const DEFAULT_DENSITY_POINTS: usize = 40;

/// Rows scanned when inferring CSV column types.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// Tunables for chart decoration and data loading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisConfig {
    pub histogram_bins: usize,
    pub pie_decimals: u8,
    pub preview_rows: usize,
    pub heatmap_color_map: String,
    pub density_points: usize,
    /// 0 means a full table scan.
    pub infer_schema_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            pie_decimals: DEFAULT_PIE_DECIMALS,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            heatmap_color_map: DEFAULT_HEATMAP_COLOR_MAP.to_string(),
            density_points: DEFAULT_DENSITY_POINTS,
            infer_schema_length: DEFAULT_INFER_SCHEMA_LENGTH,
        }
    }
}
