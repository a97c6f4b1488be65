//! Text sketches of chart plans for the terminal
//!
//! Each `ChartSpec` is drawn as a handful of lines: bars for counts and means,
//! sparklines for distributions, five-number summaries for box plots.

use std::collections::HashMap;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};
use polars::prelude::*;

use crate::analysis::{
    box_summary, column_by_name, contingency, gaussian_kde, group_means, histogram,
    histogram_with_range, min_max, numeric_values, pearson, text_values, value_counts,
    AnalysisConfig, BoxSummary, ChartKind, ChartSpec,
};
use crate::error::{AnalysisError, Result};

const BAR_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 16;
const STACK_BINS: usize = 10;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a chart plan as text lines.
pub fn render_chart(df: &DataFrame, spec: &ChartSpec, config: &AnalysisConfig) -> Result<Vec<String>> {
    let x = spec.encoding.x.as_deref();
    let y = spec.encoding.y.as_deref();
    let hue = spec.encoding.hue.as_deref();

    match (spec.kind, x, y, hue) {
        (ChartKind::Count, Some(x), _, _) => render_count(df, x),
        (ChartKind::Pie, Some(x), _, _) => render_pie(df, x, spec.style.label_decimals.unwrap_or(1)),
        (ChartKind::Histogram, Some(x), _, _) => render_histogram(
            df,
            x,
            spec.style.bins.unwrap_or(config.histogram_bins),
            spec.style.density_overlay,
            config.density_points,
        ),
        (ChartKind::Density, Some(x), _, _) => render_density(df, x, config.density_points),
        (ChartKind::Box, Some(cat), Some(num), _) => render_box_grouped(df, cat, num),
        (ChartKind::Box, Some(x), None, _) => render_box(df, x),
        (ChartKind::Scatter, Some(x), Some(y), _) => render_scatter(df, x, y),
        (ChartKind::Heatmap, Some(cols), Some(rows), _) => render_heatmap(df, rows, cols),
        (ChartKind::Bar, Some(cat), Some(num), _) => render_bar_mean(df, cat, num),
        (ChartKind::StackedHistogram, Some(num), _, Some(cat)) => {
            render_stacked(df, num, cat, spec.style.bins.unwrap_or(STACK_BINS))
        }
        _ => Err(AnalysisError::InvalidChart(format!(
            "'{}' ({}) is missing a field role",
            spec.title,
            spec.kind.label()
        ))),
    }
}

fn present_numbers(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    Ok(numeric_values(column_by_name(df, name)?)?
        .into_iter()
        .flatten()
        .collect())
}

fn render_count(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let values = text_values(column_by_name(df, column)?)?;
    let counts = value_counts(values.iter().map(|v| v.as_deref()));
    let max = counts.first().map(|c| c.count).unwrap_or(0);

    Ok(counts
        .iter()
        .map(|c| {
            format!(
                "{} {} {}",
                pad_label(&c.value),
                bar(c.count as f64, max as f64),
                c.count
            )
        })
        .collect())
}

fn render_pie(df: &DataFrame, column: &str, decimals: u8) -> Result<Vec<String>> {
    let values = text_values(column_by_name(df, column)?)?;
    let counts = value_counts(values.iter().map(|v| v.as_deref()));

    Ok(counts
        .iter()
        .map(|c| {
            format!(
                "{} {:>width$.prec$}%",
                pad_label(&c.value),
                c.percent,
                width = decimals as usize + 4,
                prec = decimals as usize
            )
        })
        .collect())
}

fn render_histogram(
    df: &DataFrame,
    column: &str,
    bins: usize,
    density_overlay: bool,
    density_points: usize,
) -> Result<Vec<String>> {
    let values = present_numbers(df, column)?;
    let Some(hist) = histogram(&values, bins) else {
        return Ok(vec!["(no values)".to_string()]);
    };

    let counts: Vec<f64> = hist.counts.iter().map(|&c| c as f64).collect();
    let mut lines = vec![
        format!("counts  {}", sparkline(&counts)),
        format!(
            "range   [{}, {}] in {} bins",
            fmt_num(hist.edges[0]),
            fmt_num(hist.edges[hist.edges.len() - 1]),
            bins
        ),
    ];

    if density_overlay {
        let kde: Vec<f64> = gaussian_kde(&values, density_points)
            .into_iter()
            .map(|(_, d)| d)
            .collect();
        if !kde.is_empty() {
            lines.push(format!("density {}", sparkline(&kde)));
        }
    }
    Ok(lines)
}

fn render_density(df: &DataFrame, column: &str, points: usize) -> Result<Vec<String>> {
    let values = present_numbers(df, column)?;
    let kde = gaussian_kde(&values, points);

    let (Some(first), Some(last)) = (kde.first(), kde.last()) else {
        return Ok(vec!["(no spread to estimate a density)".to_string()]);
    };
    let densities: Vec<f64> = kde.iter().map(|(_, d)| *d).collect();

    Ok(vec![
        sparkline(&densities),
        format!("over [{}, {}]", fmt_num(first.0), fmt_num(last.0)),
    ])
}

fn box_line(label: &str, summary: &BoxSummary) -> String {
    format!(
        "{} {} ├ {} │ {} │ {} ┤ {}  ({} outliers)",
        pad_label(label),
        fmt_num(summary.lower_whisker),
        fmt_num(summary.q1),
        fmt_num(summary.median),
        fmt_num(summary.q3),
        fmt_num(summary.upper_whisker),
        summary.outliers
    )
}

fn render_box(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let values = present_numbers(df, column)?;
    Ok(match box_summary(&values) {
        Some(summary) => vec![box_line(column, &summary)],
        None => vec!["(no values)".to_string()],
    })
}

/// Categories of `cat` in order of first appearance, with the `num` values of each.
fn grouped_values(df: &DataFrame, cat: &str, num: &str) -> Result<Vec<(String, Vec<f64>)>> {
    let categories = text_values(column_by_name(df, cat)?)?;
    let values = numeric_values(column_by_name(df, num)?)?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for (category, value) in categories.into_iter().zip(values) {
        let (Some(category), Some(value)) = (category, value) else {
            continue;
        };
        match positions.get(&category) {
            Some(&idx) => groups[idx].1.push(value),
            None => {
                positions.insert(category.clone(), groups.len());
                groups.push((category, vec![value]));
            }
        }
    }
    Ok(groups)
}

fn render_box_grouped(df: &DataFrame, cat: &str, num: &str) -> Result<Vec<String>> {
    Ok(grouped_values(df, cat, num)?
        .iter()
        .filter_map(|(category, values)| {
            box_summary(values).map(|summary| box_line(category, &summary))
        })
        .collect())
}

fn render_scatter(df: &DataFrame, x: &str, y: &str) -> Result<Vec<String>> {
    let xs = numeric_values(column_by_name(df, x)?)?;
    let ys = numeric_values(column_by_name(df, y)?)?;

    let complete = xs
        .iter()
        .zip(ys.iter())
        .filter(|(a, b)| a.is_some() && b.is_some())
        .count();
    let r = pearson(xs.into_iter().zip(ys));

    Ok(vec![format!(
        "{} points, Pearson r = {}",
        complete,
        r.map(fmt_num).unwrap_or_else(|| "undefined".to_string())
    )])
}

fn render_heatmap(df: &DataFrame, rows: &str, cols: &str) -> Result<Vec<String>> {
    let row_values = text_values(column_by_name(df, rows)?)?;
    let col_values = text_values(column_by_name(df, cols)?)?;
    let table = contingency(
        rows,
        cols,
        row_values
            .iter()
            .map(|v| v.as_deref())
            .zip(col_values.iter().map(|v| v.as_deref())),
    );

    let mut out = Table::new();
    out.load_preset(UTF8_FULL_CONDENSED);
    let mut header = vec![Cell::new(format!("{} \\ {}", rows, cols)).add_attribute(Attribute::Bold)];
    header.extend(
        table
            .column_labels
            .iter()
            .map(|l| Cell::new(l).add_attribute(Attribute::Bold)),
    );
    out.set_header(header);

    for (label, counts) in table.row_labels.iter().zip(&table.counts) {
        let mut row = vec![Cell::new(label)];
        row.extend(
            counts
                .iter()
                .map(|c| Cell::new(c).set_alignment(CellAlignment::Right)),
        );
        out.add_row(row);
    }

    Ok(out.to_string().lines().map(str::to_string).collect())
}

fn render_bar_mean(df: &DataFrame, cat: &str, num: &str) -> Result<Vec<String>> {
    let categories = text_values(column_by_name(df, cat)?)?;
    let values = numeric_values(column_by_name(df, num)?)?;
    let means = group_means(categories.iter().map(|c| c.as_deref()).zip(values));

    let max = means.iter().map(|m| m.mean.abs()).fold(0.0, f64::max);
    Ok(means
        .iter()
        .map(|m| {
            format!(
                "{} {} {}",
                pad_label(&m.category),
                bar(m.mean.abs(), max),
                fmt_num(m.mean)
            )
        })
        .collect())
}

fn render_stacked(df: &DataFrame, num: &str, cat: &str, bins: usize) -> Result<Vec<String>> {
    let groups = grouped_values(df, cat, num)?;
    let all: Vec<f64> = groups.iter().flat_map(|(_, v)| v.iter().copied()).collect();

    let Some((mut lo, mut hi)) = min_max(&all) else {
        return Ok(vec!["(no values)".to_string()]);
    };
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let layers: Vec<(String, Vec<f64>)> = groups
        .iter()
        .map(|(category, values)| {
            let hist = histogram_with_range(values, bins, lo, hi);
            (
                category.clone(),
                hist.counts.iter().map(|&c| c as f64).collect(),
            )
        })
        .collect();

    // Shared scale so layers stay comparable
    let peak = layers
        .iter()
        .flat_map(|(_, counts)| counts.iter().copied())
        .fold(0.0, f64::max);

    let mut lines: Vec<String> = layers
        .iter()
        .map(|(category, counts)| {
            format!("{} {}", pad_label(category), sparkline_scaled(counts, peak))
        })
        .collect();
    lines.push(format!("range [{}, {}] in {} bins", fmt_num(lo), fmt_num(hi), bins));
    Ok(lines)
}

fn pad_label(label: &str) -> String {
    let truncated: String = label.chars().take(LABEL_WIDTH).collect();
    format!("{:<width$}", truncated, width = LABEL_WIDTH)
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.max(if value > 0.0 { 1 } else { 0 }))
}

fn sparkline(values: &[f64]) -> String {
    let peak = values.iter().copied().fold(0.0, f64::max);
    sparkline_scaled(values, peak)
}

fn sparkline_scaled(values: &[f64], peak: f64) -> String {
    values
        .iter()
        .map(|&v| {
            if v <= 0.0 || peak <= 0.0 {
                ' '
            } else {
                let idx = ((v / peak) * (SPARKS.len() - 1) as f64).round() as usize;
                SPARKS[idx.min(SPARKS.len() - 1)]
            }
        })
        .collect()
}

/// Format a number with up to four decimals, trimming trailing zeros.
pub fn fmt_num(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{summarize_one, summarize_two};

    fn sales() -> DataFrame {
        df! {
            "city" => ["NY", "LA", "NY"],
            "sales" => [10i64, 20, 30],
        }
        .unwrap()
    }

    #[test]
    fn test_fmt_num_trims_zeros() {
        assert_eq!(fmt_num(20.0), "20");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1.0 / 3.0), "0.3333");
        assert_eq!(fmt_num(-0.00001), "0");
    }

    #[test]
    fn test_bar_chart_shows_group_means() {
        let df = sales();
        let config = AnalysisConfig::default();
        let analysis = summarize_two(&df, "sales", "city", &config).unwrap();
        let bar_spec = analysis
            .charts
            .iter()
            .find(|c| c.kind == ChartKind::Bar)
            .unwrap();

        let lines = render_chart(&df, bar_spec, &config).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("NY"));
        assert!(lines[0].ends_with(" 20"));
        assert!(lines[1].starts_with("LA"));
        assert!(lines[1].ends_with(" 20"));
    }

    #[test]
    fn test_pie_labels_use_one_decimal() {
        let df = sales();
        let config = AnalysisConfig::default();
        let analysis = summarize_one(&df, "city", &config).unwrap();

        let lines = render_chart(&df, &analysis.charts[1], &config).unwrap();
        assert!(lines[0].trim_end().ends_with("66.7%"));
        assert!(lines[1].trim_end().ends_with("33.3%"));
    }

    #[test]
    fn test_chart_without_field_role_is_internal_error() {
        let df = sales();
        let mut spec = ChartSpec::scatter("sales", "sales");
        spec.encoding.y = None;

        let err = render_chart(&df, &spec, &AnalysisConfig::default()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidChart(_)));
        assert!(!err.is_selection_error());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_grouped_values_keep_first_appearance() {
        let df = df! {
            "city" => [Some("NY"), Some("LA"), None, Some("NY"), Some("SF")],
            "sales" => [Some(1.0f64), Some(2.0), Some(9.0), Some(3.0), None],
        }
        .unwrap();

        let groups = grouped_values(&df, "city", "sales").unwrap();
        assert_eq!(
            groups,
            vec![
                ("NY".to_string(), vec![1.0, 3.0]),
                ("LA".to_string(), vec![2.0]),
            ]
        );
    }

    #[test]
    fn test_every_planned_chart_renders() {
        let df = sales();
        let config = AnalysisConfig::default();

        let mut specs = summarize_one(&df, "sales", &config).unwrap().charts;
        specs.extend(summarize_two(&df, "city", "sales", &config).unwrap().charts);
        specs.extend(summarize_two(&df, "sales", "sales", &config).unwrap().charts);
        specs.extend(summarize_two(&df, "city", "city", &config).unwrap().charts);

        for spec in &specs {
            let lines = render_chart(&df, spec, &config).unwrap();
            assert!(!lines.is_empty(), "{:?} rendered nothing", spec.kind);
        }
    }
}
