//! Tabscope: Exploratory Analysis CLI Tool
//!
//! Loads a CSV file and runs one of three analyses: a dataset overview,
//! a single-column analysis or a two-column analysis.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use console::style;
use polars::prelude::DataFrame;
use tracing::{debug, info};

use tabscope::analysis::{
    load_dataset, load_dataset_with_progress, preview, run_selection, AnalysisOutcome, Selection,
};
use tabscope::cli::{is_interactive, select_column, Cli, Commands};
use tabscope::report::{display_outcome, display_preview, export_analysis, AnalysisExport};
use tabscope::utils::{
    init_logging, print_banner, print_completion, print_config, print_error, print_success,
};
use tabscope::AnalysisError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = match err.downcast_ref::<AnalysisError>() {
                Some(e) if e.is_parse_error() => format!("Parse error: {}", e),
                Some(e) if e.is_selection_error() => format!("Selection error: {}", e),
                _ => format!("{:#}", err),
            };
            print_error(&message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = cli.input().ok_or_else(|| {
        anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let config = cli.analysis_config();
    let export_path = cli.export_path();
    let started = Instant::now();

    // Load dataset (spinner only when the report is shown)
    let df = if cli.quiet {
        load_dataset(input, config.infer_schema_length)?
    } else {
        print_banner(env!("CARGO_PKG_VERSION"));
        print_config(input, cli.menu_name(), export_path.as_deref());

        let (df, rows, cols, memory_mb) =
            load_dataset_with_progress(input, config.infer_schema_length)?;
        println!("\n    {} Dataset Statistics:", style("✧").cyan());
        println!("      Rows: {}", rows);
        println!("      Columns: {}", cols);
        println!("      Estimated memory: {:.2} MB", memory_mb);
        df
    };

    let selection = resolve_selection(cli, &df)?;
    debug!(?selection, "running analysis");
    let outcome = run_selection(&df, &selection, &config)?;

    if !cli.quiet {
        if !matches!(outcome, AnalysisOutcome::Overview(_)) {
            display_preview(&preview(&df, config.preview_rows)?);
        }
        display_outcome(&df, &outcome, &config)?;
    }

    if let Some(path) = &export_path {
        let export = AnalysisExport::new(
            &outcome,
            &selection,
            &config,
            &input.display().to_string(),
        );
        export_analysis(&export, path)?;
        if !cli.quiet {
            println!();
            print_success(&format!("Saved analysis to {}", path.display()));
        }
    }

    info!(elapsed_ms = started.elapsed().as_millis() as u64, "analysis finished");
    if !cli.quiet {
        print_completion();
    }
    Ok(())
}

/// Turn the command line into a selection, prompting for omitted columns when possible.
fn resolve_selection(cli: &Cli, df: &DataFrame) -> Result<Selection> {
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let interactive = !cli.no_interactive && is_interactive() && !columns.is_empty();

    // An empty name is rejected by the dispatcher as an incomplete selection
    let pick = |given: Option<String>, prompt: &str| -> Result<String> {
        match given {
            Some(name) => Ok(name),
            None if interactive => select_column(prompt, &columns),
            None => Ok(String::new()),
        }
    };

    Ok(match cli.command() {
        Commands::Overview => Selection::Overview,
        Commands::Univariate { column } => Selection::Univariate {
            column: pick(column, "Select a column for univariate analysis")?,
        },
        Commands::Bivariate { first, second } => Selection::Bivariate {
            first: pick(first, "Select the first column")?,
            second: pick(second, "Select the second column")?,
        },
    })
}
