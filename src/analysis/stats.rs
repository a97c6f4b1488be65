//! Statistics kernel shared by the summarizers and the chart renderer
//!
//! Everything here works on plain slices so it can be tested without polars.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

/// Frequency of one distinct value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    /// Share of the non-null values, in percent.
    pub percent: f64,
}

/// Count distinct non-null values.
///
/// Sorted by count descending; ties keep the order in which values first appear.
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut counts: Vec<(&'a str, usize)> = Vec::new();

    for value in values.into_iter().flatten() {
        match positions.get(value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value, 1));
            }
        }
    }

    // Stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let total: usize = counts.iter().map(|(_, c)| c).sum();
    counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
            percent: if total > 0 {
                count as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Summary of a categorical column: count, unique, top, freq.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalSummary {
    pub count: usize,
    pub unique: usize,
    pub top: Option<String>,
    pub freq: Option<usize>,
}

impl CategoricalSummary {
    pub fn from_counts(counts: &[ValueCount]) -> Self {
        let first = counts.first();
        Self {
            count: counts.iter().map(|c| c.count).sum(),
            unique: counts.len(),
            top: first.map(|c| c.value.clone()),
            freq: first.map(|c| c.count),
        }
    }
}

/// Descriptive statistics of a numerical column.
///
/// Every statistic is `None` for a column without values; `std` is also `None`
/// with fewer than two values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub q50: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// Describe a set of numeric values (nulls already removed).
pub fn describe_numeric(values: &[f64]) -> NumericSummary {
    let sorted = sorted_copy(values);

    NumericSummary {
        count: sorted.len(),
        mean: mean(&sorted),
        std: sample_std(&sorted),
        min: sorted.first().copied(),
        q25: quantile_sorted(&sorted, 0.25),
        q50: quantile_sorted(&sorted, 0.50),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted.last().copied(),
    }
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (n - 1 denominator).
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let ss: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    Some((ss / (values.len() - 1) as f64).sqrt())
}

/// Quantile of already sorted values using linear interpolation between ranks.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    let value = sorted[lo] + (sorted[hi] - sorted[lo]) * frac;

    Some(value.clamp(sorted[lo], sorted[hi]))
}

pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

/// Pearson correlation over the pairs where both values are present.
///
/// Single-pass Welford update. Returns `None` when either side has zero variance
/// or there are no complete pairs.
pub fn pearson<I>(pairs: I) -> Option<f64>
where
    I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
{
    let mut n = 0.0;
    let mut mean_x = 0.0;
    let mut mean_y = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    let mut cov_xy = 0.0;

    for (x, y) in pairs {
        if let (Some(x), Some(y)) = (x, y) {
            n += 1.0;
            let dx = x - mean_x;
            let dy = y - mean_y;
            mean_x += dx / n;
            mean_y += dy / n;
            var_x += dx * (x - mean_x);
            var_y += dy * (y - mean_y);
            cov_xy += dx * (y - mean_y);
        }
    }

    if n == 0.0 || var_x <= 0.0 || var_y <= 0.0 {
        return None;
    }

    let r = cov_xy / (var_x.sqrt() * var_y.sqrt());
    if r.is_nan() {
        None
    } else {
        Some(r.clamp(-1.0, 1.0))
    }
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// `counts.len() + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Bin values into `bins` equal-width bins spanning their range.
///
/// The last bin is closed on the right. A zero-width range is widened by 0.5
/// on each side. Returns `None` for no values or zero bins.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let (mut lo, mut hi) = min_max(values)?;
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    Some(histogram_with_range(values, bins, lo, hi))
}

/// Bin values into `bins` equal-width bins over a fixed range.
pub fn histogram_with_range(values: &[f64], bins: usize, lo: f64, hi: f64) -> Histogram {
    if bins == 0 {
        return Histogram {
            edges: vec![lo],
            counts: Vec::new(),
        };
    }
    let width = (hi - lo) / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
    let mut counts = vec![0usize; bins];

    for &v in values {
        if v < lo || v > hi {
            continue;
        }
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { edges, counts }
}

pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Gaussian kernel density estimate on an even grid, with Scott's bandwidth.
///
/// Returns `(x, density)` points; empty when the values have no spread.
pub fn gaussian_kde(values: &[f64], points: usize) -> Vec<(f64, f64)> {
    let n = values.len();
    let std = match sample_std(values) {
        Some(s) if s > 0.0 => s,
        _ => return Vec::new(),
    };
    let Some((lo, hi)) = min_max(values) else {
        return Vec::new();
    };
    if points < 2 {
        return Vec::new();
    }

    let bandwidth = std * (n as f64).powf(-0.2);
    let start = lo - 3.0 * bandwidth;
    let end = hi + 3.0 * bandwidth;
    let step = (end - start) / (points - 1) as f64;
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());

    (0..points)
        .map(|i| {
            let x = start + step * i as f64;
            let density: f64 = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density)
        })
        .collect()
}

/// Five-number box plot summary with 1.5 IQR whiskers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub lower_whisker: f64,
    pub upper_whisker: f64,
    pub outliers: usize,
}

pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    let sorted = sorted_copy(values);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let median = quantile_sorted(&sorted, 0.5)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;
    let iqr = q3 - q1;
    let low_fence = q1 - 1.5 * iqr;
    let high_fence = q3 + 1.5 * iqr;

    let inside: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|v| *v >= low_fence && *v <= high_fence)
        .collect();

    Some(BoxSummary {
        q1,
        median,
        q3,
        lower_whisker: inside.first().copied().unwrap_or(q1),
        upper_whisker: inside.last().copied().unwrap_or(q3),
        outliers: sorted.len() - inside.len(),
    })
}

/// Mean of a numeric variable within one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub category: String,
    pub mean: f64,
    pub count: usize,
}

/// Mean per category, in order of first appearance.
///
/// Rows with a null category or null value are skipped.
pub fn group_means<'a, I>(pairs: I) -> Vec<GroupMean>
where
    I: IntoIterator<Item = (Option<&'a str>, Option<f64>)>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut sums: Vec<(&'a str, f64, usize)> = Vec::new();

    for (category, value) in pairs {
        let (Some(category), Some(value)) = (category, value) else {
            continue;
        };
        match positions.get(category) {
            Some(&idx) => {
                sums[idx].1 += value;
                sums[idx].2 += 1;
            }
            None => {
                positions.insert(category, sums.len());
                sums.push((category, value, 1));
            }
        }
    }

    sums.into_iter()
        .map(|(category, sum, count)| GroupMean {
            category: category.to_string(),
            mean: sum / count as f64,
            count,
        })
        .collect()
}

/// Cross-tabulated counts of two categorical variables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContingencyTable {
    pub row_variable: String,
    pub column_variable: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// `counts[r][c]` for `row_labels[r]` and `column_labels[c]`.
    pub counts: Vec<Vec<usize>>,
}

impl ContingencyTable {
    pub fn get(&self, row: &str, column: &str) -> Option<usize> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.column_labels.iter().position(|l| l == column)?;
        Some(self.counts[r][c])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

/// Cross-tabulate two categorical variables.
///
/// Labels are sorted; rows with a null on either side are excluded.
pub fn contingency<'a, I>(row_variable: &str, column_variable: &str, pairs: I) -> ContingencyTable
where
    I: IntoIterator<Item = (Option<&'a str>, Option<&'a str>)>,
{
    let complete: Vec<(&str, &str)> = pairs
        .into_iter()
        .filter_map(|(r, c)| Some((r?, c?)))
        .collect();

    let row_labels: Vec<String> = complete
        .iter()
        .map(|(r, _)| *r)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();
    let column_labels: Vec<String> = complete
        .iter()
        .map(|(_, c)| *c)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let row_index: HashMap<&str, usize> = row_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();
    let column_index: HashMap<&str, usize> = column_labels
        .iter()
        .enumerate()
        .map(|(i, l)| (l.as_str(), i))
        .collect();

    let mut counts = vec![vec![0usize; column_labels.len()]; row_labels.len()];
    for (r, c) in complete {
        counts[row_index[r]][column_index[c]] += 1;
    }

    ContingencyTable {
        row_variable: row_variable.to_string(),
        column_variable: column_variable.to_string(),
        row_labels,
        column_labels,
        counts,
    }
}
