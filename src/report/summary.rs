//! Terminal rendering of analysis results

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;
use polars::prelude::*;

use super::charts::{fmt_num, render_chart};
use crate::analysis::{
    AnalysisConfig, AnalysisOutcome, BivariateAnalysis, BivariateSummary, ChartSpec,
    ColumnClass, ContingencyTable, CorrelationMatrix, DescribeStats, Notice, NumericSummary,
    Overview, TablePreview, UnivariateAnalysis, UnivariateSummary, ValueCount,
};
use crate::error::Result;
use crate::utils::{
    print_indented, print_info, print_step_header, print_subheading, print_success, print_warning,
};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table
}

fn opt_num(v: Option<f64>) -> Cell {
    match v {
        Some(v) => Cell::new(fmt_num(v)).set_alignment(CellAlignment::Right),
        None => Cell::new("NaN").fg(Color::DarkGrey),
    }
}

fn opt_text<T: ToString>(v: Option<T>) -> Cell {
    match v {
        Some(v) => Cell::new(v.to_string()),
        None => Cell::new("NaN").fg(Color::DarkGrey),
    }
}

/// Display the first rows of the table.
pub fn display_preview(preview: &TablePreview) {
    print_subheading("Preview of Uploaded Data:");
    let mut table = new_table(preview.columns.iter().map(String::as_str).collect());
    for row in &preview.rows {
        table.add_row(row.iter().map(|v| opt_text(v.as_deref())).collect::<Vec<_>>());
    }
    print_indented(&table.to_string());
}

/// Display any result, followed by its chart sketches.
pub fn display_outcome(df: &DataFrame, outcome: &AnalysisOutcome, config: &AnalysisConfig) -> Result<()> {
    match outcome {
        AnalysisOutcome::Overview(overview) => display_overview(overview),
        AnalysisOutcome::Univariate(analysis) => display_univariate(df, analysis, config)?,
        AnalysisOutcome::Bivariate(analysis) => display_bivariate(df, analysis, config)?,
    }
    Ok(())
}

pub fn display_overview(overview: &Overview) {
    print_step_header(1, "Overview of your Data");
    display_preview(&overview.preview);

    println!();
    println!(
        "    {} {} rows × {} columns",
        style("Shape of the data:").bold(),
        style(overview.shape.rows).yellow(),
        style(overview.shape.columns).yellow()
    );

    print_subheading("Data Information:");
    let mut info = new_table(vec!["Column", "Dtype", "Class", "Non-Null"]);
    for column in &overview.columns {
        info.add_row(vec![
            Cell::new(&column.name),
            Cell::new(&column.dtype),
            class_cell(column.class),
            Cell::new(column.non_null).set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&info.to_string());

    print_step_header(2, "Missing Values");
    let mut nulls = new_table(vec!["Column", "Missing"]);
    for entry in &overview.null_counts {
        nulls.add_row(vec![
            Cell::new(&entry.column),
            Cell::new(entry.nulls)
                .set_alignment(CellAlignment::Right)
                .fg(if entry.nulls > 0 { Color::Red } else { Color::White }),
        ]);
    }
    print_indented(&nulls.to_string());

    print_step_header(3, "Descriptive Statistics");
    let mut describe = new_table(vec![
        "Column", "count", "unique", "top", "freq", "mean", "std", "min", "25%", "50%", "75%",
        "max",
    ]);
    for description in &overview.describe {
        let mut row = vec![Cell::new(&description.column)];
        match &description.stats {
            DescribeStats::Categorical(s) => {
                row.push(Cell::new(s.count).set_alignment(CellAlignment::Right));
                row.push(Cell::new(s.unique).set_alignment(CellAlignment::Right));
                row.push(opt_text(s.top.as_deref()));
                row.push(opt_text(s.freq));
                row.extend((0..7).map(|_| opt_num(None)));
            }
            DescribeStats::Numerical(s) => {
                row.push(Cell::new(s.count).set_alignment(CellAlignment::Right));
                row.extend((0..3).map(|_| opt_text(None::<String>)));
                row.extend(numeric_cells(s));
            }
        }
        describe.add_row(row);
    }
    print_indented(&describe.to_string());

    print_step_header(4, "Duplicates");
    if overview.duplicate_rows == 0 {
        print_success("No duplicated rows");
    } else {
        println!(
            "    Number of duplicated rows: {}",
            style(overview.duplicate_rows).yellow().bold()
        );
    }

    print_step_header(5, "Correlation Matrix");
    match &overview.correlation {
        Some(matrix) => display_correlation(matrix),
        None => print_info("No numeric data available for correlation matrix."),
    }

    display_notices(
        overview
            .notices
            .iter()
            .filter(|n| !matches!(n, Notice::NoNumericColumns)),
    );
}

fn numeric_cells(s: &NumericSummary) -> Vec<Cell> {
    vec![
        opt_num(s.mean),
        opt_num(s.std),
        opt_num(s.min),
        opt_num(s.q25),
        opt_num(s.q50),
        opt_num(s.q75),
        opt_num(s.max),
    ]
}

fn class_cell(class: ColumnClass) -> Cell {
    Cell::new(class).fg(match class {
        ColumnClass::Categorical => Color::Magenta,
        ColumnClass::Numerical => Color::Cyan,
    })
}

fn display_correlation(matrix: &CorrelationMatrix) {
    let mut header = vec![""];
    header.extend(matrix.columns.iter().map(String::as_str));
    let mut table = new_table(header);

    for (name, values) in matrix.columns.iter().zip(&matrix.values) {
        let mut row = vec![Cell::new(name).add_attribute(Attribute::Bold)];
        row.extend(values.iter().map(|v| opt_num(*v)));
        table.add_row(row);
    }
    print_indented(&table.to_string());
}

pub fn display_univariate(
    df: &DataFrame,
    analysis: &UnivariateAnalysis,
    config: &AnalysisConfig,
) -> Result<()> {
    print_step_header(1, "Univariate Analysis");
    println!(
        "    {} {} is {}.",
        style("Column:").bold(),
        style(&analysis.column).yellow(),
        analysis.class
    );

    match &analysis.summary {
        UnivariateSummary::ValueCounts(counts) => display_value_counts(counts),
        UnivariateSummary::Describe(summary) => display_describe(summary),
    }

    display_notices(analysis.notices.iter());
    display_charts(df, &analysis.charts, config)
}

fn display_value_counts(counts: &[ValueCount]) {
    let mut table = new_table(vec!["Value", "Count", "Share"]);
    for c in counts {
        table.add_row(vec![
            Cell::new(&c.value),
            Cell::new(c.count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", c.percent)).set_alignment(CellAlignment::Right),
        ]);
    }
    print_indented(&table.to_string());
}

fn display_describe(summary: &NumericSummary) {
    let mut table = new_table(vec!["Statistic", "Value"]);
    table.add_row(vec![
        Cell::new("count"),
        Cell::new(summary.count).set_alignment(CellAlignment::Right),
    ]);
    let labels = ["mean", "std", "min", "25%", "50%", "75%", "max"];
    for (label, cell) in labels.iter().zip(numeric_cells(summary)) {
        table.add_row(vec![Cell::new(label), cell]);
    }
    print_indented(&table.to_string());
}

pub fn display_bivariate(
    df: &DataFrame,
    analysis: &BivariateAnalysis,
    config: &AnalysisConfig,
) -> Result<()> {
    print_step_header(1, "Bivariate Analysis");
    println!("    {}", style(analysis.mode.label()).bold());

    if let BivariateSummary::Contingency(table) = &analysis.summary {
        display_contingency(table);
    }

    display_notices(analysis.notices.iter());
    display_charts(df, &analysis.charts, config)
}

fn display_contingency(contingency: &ContingencyTable) {
    print_subheading(&format!(
        "Counts of {} by {}:",
        contingency.row_variable, contingency.column_variable
    ));
    println!(
        "    {} rows × {} columns, {} observations",
        contingency.row_labels.len(),
        contingency.column_labels.len(),
        contingency.total()
    );
}

fn display_charts(df: &DataFrame, charts: &[ChartSpec], config: &AnalysisConfig) -> Result<()> {
    print_step_header(2, "Charts");
    for spec in charts {
        print_subheading(&format!("{}: {}", spec.kind.label(), spec.title));
        for line in render_chart(df, spec, config)? {
            println!("      {}", line);
        }
    }
    Ok(())
}

fn display_notices<'a>(notices: impl Iterator<Item = &'a Notice>) {
    for notice in notices {
        print_warning(&notice.to_string());
    }
}
