//! Declarative chart plans
//!
//! A `ChartSpec` names the chart family, the columns bound to each field role
//! and the decoration to apply. Drawing is left to the presentation layer.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Count,
    Pie,
    Histogram,
    Density,
    Box,
    Scatter,
    Heatmap,
    Bar,
    StackedHistogram,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Count => "Count Plot",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Histogram => "Histogram",
            ChartKind::Density => "Density Plot",
            ChartKind::Box => "Box Plot",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Heatmap => "Heatmap of Counts",
            ChartKind::Bar => "Bar Plot",
            ChartKind::StackedHistogram => "Stacked Histogram",
        }
    }
}

/// Columns bound to each field role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartEncoding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<String>,
}

/// Cell label format for annotated charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellFormat {
    Integer,
}

/// Aggregate drawn by a bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimator {
    Mean,
}

/// Decoration applied on top of the encoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins: Option<usize>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub density_overlay: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_decimals: Option<u8>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub annotate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_format: Option<CellFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimator: Option<Estimator>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stacked: bool,
}

/// One chart to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub encoding: ChartEncoding,
    pub style: ChartStyle,
}

impl ChartSpec {
    fn new(kind: ChartKind, title: String, encoding: ChartEncoding) -> Self {
        Self {
            kind,
            title,
            encoding,
            style: ChartStyle::default(),
        }
    }

    fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Bar of category against frequency.
    pub fn count(column: &str) -> Self {
        Self::new(
            ChartKind::Count,
            format!("Count of {}", column),
            ChartEncoding {
                x: Some(column.to_string()),
                ..Default::default()
            },
        )
    }

    /// Percentage share per category.
    pub fn pie(column: &str, label_decimals: u8) -> Self {
        Self::new(
            ChartKind::Pie,
            format!("Share of {}", column),
            ChartEncoding {
                x: Some(column.to_string()),
                ..Default::default()
            },
        )
        .with_style(ChartStyle {
            label_decimals: Some(label_decimals),
            ..Default::default()
        })
    }

    /// Histogram with an overlaid density curve.
    pub fn histogram(column: &str, bins: usize) -> Self {
        Self::new(
            ChartKind::Histogram,
            format!("Distribution of {}", column),
            ChartEncoding {
                x: Some(column.to_string()),
                ..Default::default()
            },
        )
        .with_style(ChartStyle {
            bins: Some(bins),
            density_overlay: true,
            ..Default::default()
        })
    }

    pub fn density(column: &str) -> Self {
        Self::new(
            ChartKind::Density,
            format!("Density of {}", column),
            ChartEncoding {
                x: Some(column.to_string()),
                ..Default::default()
            },
        )
    }

    /// Box plot of a single column.
    pub fn box_single(column: &str) -> Self {
        Self::new(
            ChartKind::Box,
            format!("Spread of {}", column),
            ChartEncoding {
                x: Some(column.to_string()),
                ..Default::default()
            },
        )
    }

    /// Box plot of `numerical` grouped by `categorical`.
    pub fn box_grouped(categorical: &str, numerical: &str) -> Self {
        Self::new(
            ChartKind::Box,
            format!("{} by {}", numerical, categorical),
            ChartEncoding {
                x: Some(categorical.to_string()),
                y: Some(numerical.to_string()),
                hue: None,
            },
        )
    }

    pub fn scatter(x: &str, y: &str) -> Self {
        Self::new(
            ChartKind::Scatter,
            format!("{} vs {}", y, x),
            ChartEncoding {
                x: Some(x.to_string()),
                y: Some(y.to_string()),
                hue: None,
            },
        )
    }

    /// Annotated heatmap of a contingency table with integer cell labels.
    pub fn heatmap(rows: &str, columns: &str, color_map: &str) -> Self {
        Self::new(
            ChartKind::Heatmap,
            format!("{} x {}", rows, columns),
            ChartEncoding {
                x: Some(columns.to_string()),
                y: Some(rows.to_string()),
                hue: None,
            },
        )
        .with_style(ChartStyle {
            annotate: true,
            cell_format: Some(CellFormat::Integer),
            color_map: Some(color_map.to_string()),
            ..Default::default()
        })
    }

    /// Bar of mean `numerical` per `categorical` category.
    pub fn bar_mean(categorical: &str, numerical: &str) -> Self {
        Self::new(
            ChartKind::Bar,
            format!("Mean {} by {}", numerical, categorical),
            ChartEncoding {
                x: Some(categorical.to_string()),
                y: Some(numerical.to_string()),
                hue: None,
            },
        )
        .with_style(ChartStyle {
            estimator: Some(Estimator::Mean),
            ..Default::default()
        })
    }

    /// Histogram of `numerical` with one stacked layer per `categorical` category.
    pub fn stacked_histogram(numerical: &str, categorical: &str) -> Self {
        Self::new(
            ChartKind::StackedHistogram,
            format!("{} stacked by {}", numerical, categorical),
            ChartEncoding {
                x: Some(numerical.to_string()),
                y: None,
                hue: Some(categorical.to_string()),
            },
        )
        .with_style(ChartStyle {
            stacked: true,
            ..Default::default()
        })
    }
}
