//! Command-line argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::analysis::{
    AnalysisConfig, DEFAULT_DENSITY_POINTS, DEFAULT_HEATMAP_COLOR_MAP,
};

/// Tabscope - Automatic exploratory analysis of CSV data
#[derive(Parser, Debug)]
#[command(name = "tabscope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Analysis to run. Defaults to the dataset overview.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Write the analysis as JSON next to the input file
    /// (e.g., data.csv → data_overview_eda.json).
    #[arg(long, global = true, default_value = "false")]
    pub export: bool,

    /// Explicit JSON output path. Implies --export.
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Number of histogram bins for numerical columns
    #[arg(long, global = true, default_value = "30", value_parser = validate_bins)]
    pub bins: usize,

    /// Decimal places on pie chart percentage labels
    #[arg(long, global = true, default_value = "1", value_parser = validate_pie_decimals)]
    pub pie_decimals: u8,

    /// Rows shown in the table preview
    #[arg(long, global = true, default_value = "5")]
    pub preview_rows: usize,

    /// Number of rows to use for schema inference.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, global = true, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Never prompt for missing column selections
    #[arg(long, global = true, default_value = "false")]
    pub no_interactive: bool,

    /// Skip the terminal report (useful with --export)
    #[arg(short, long, global = true, default_value = "false")]
    pub quiet: bool,

    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Shape, missing values, descriptive statistics, duplicates and correlations
    Overview,

    /// Analyse a single column
    Univariate {
        /// Column to analyse (prompted interactively if omitted)
        #[arg(short, long)]
        column: Option<String>,
    },

    /// Analyse a pair of columns
    Bivariate {
        /// First column (prompted interactively if omitted)
        #[arg(short = 'x', long)]
        first: Option<String>,

        /// Second column (prompted interactively if omitted)
        #[arg(short = 'y', long)]
        second: Option<String>,
    },
}

impl Cli {
    /// Get the input path.
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Selected command, defaulting to the overview.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Overview)
    }

    pub fn menu_name(&self) -> &'static str {
        match self.command() {
            Commands::Overview => "overview",
            Commands::Univariate { .. } => "univariate",
            Commands::Bivariate { .. } => "bivariate",
        }
    }

    /// Get the JSON export path, if exporting.
    /// Derived paths sit next to the input with a '_<menu>_eda.json' suffix.
    pub fn export_path(&self) -> Option<PathBuf> {
        if let Some(output) = &self.output {
            return Some(output.clone());
        }
        if !self.export {
            return None;
        }
        let input = self.input.as_ref()?;
        let parent = input.parent().unwrap_or_else(|| std::path::Path::new("."));
        let stem = input.file_stem().and_then(|s| s.to_str())?;
        Some(parent.join(format!("{}_{}_eda.json", stem, self.menu_name())))
    }

    /// Analysis settings chosen on the command line.
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            histogram_bins: self.bins,
            pie_decimals: self.pie_decimals,
            preview_rows: self.preview_rows,
            heatmap_color_map: DEFAULT_HEATMAP_COLOR_MAP.to_string(),
            density_points: DEFAULT_DENSITY_POINTS,
            infer_schema_length: self.infer_schema_length,
        }
    }
}

/// Validator for bins parameter
fn validate_bins(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid bin count", s))?;

    if !(1..=500).contains(&value) {
        Err(format!("bins must be between 1 and 500, got {}", value))
    } else {
        Ok(value)
    }
}

/// Validator for pie_decimals parameter
fn validate_pie_decimals(s: &str) -> Result<u8, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number of decimals", s))?;

    if value > 6 {
        Err(format!("pie_decimals must be at most 6, got {}", value))
    } else {
        Ok(value)
    }
}
