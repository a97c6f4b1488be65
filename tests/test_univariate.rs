//! Unit tests for single-column analysis

use polars::prelude::*;
use tabscope::analysis::{
    summarize_one, AnalysisConfig, ChartKind, ColumnClass, Notice, UnivariateSummary,
};
use tabscope::AnalysisError;

#[path = "common/mod.rs"]
mod common;

fn kinds(charts: &[tabscope::analysis::ChartSpec]) -> Vec<ChartKind> {
    charts.iter().map(|c| c.kind).collect()
}

#[test]
fn test_categorical_value_counts() {
    let df = common::create_city_sales_dataframe();
    let result = summarize_one(&df, "city", &AnalysisConfig::default()).unwrap();

    assert_eq!(result.class, ColumnClass::Categorical);
    let UnivariateSummary::ValueCounts(counts) = &result.summary else {
        panic!("expected value counts, got {:?}", result.summary);
    };
    assert_eq!(counts.len(), 2);
    assert_eq!(counts[0].value, "NY");
    assert_eq!(counts[0].count, 2);
    assert_eq!(counts[1].value, "LA");
    assert_eq!(counts[1].count, 1);

    assert_eq!(kinds(&result.charts), vec![ChartKind::Count, ChartKind::Pie]);
    assert_eq!(result.charts[1].style.label_decimals, Some(1));
    assert!(result.notices.is_empty());
}

#[test]
fn test_value_counts_sum_to_non_null_length() {
    let df = common::create_mixed_dataframe();
    let column = df.column("region").unwrap();
    let result = summarize_one(&df, "region", &AnalysisConfig::default()).unwrap();

    let UnivariateSummary::ValueCounts(counts) = &result.summary else {
        panic!("expected value counts");
    };
    let total: usize = counts.iter().map(|c| c.count).sum();
    assert_eq!(total, column.len() - column.null_count());

    let percent: f64 = counts.iter().map(|c| c.percent).sum();
    assert!((percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_value_count_ties_keep_first_appearance() {
    let df = df! {
        "grade" => ["b", "a", "c", "a", "b"],
    }
    .unwrap();
    let result = summarize_one(&df, "grade", &AnalysisConfig::default()).unwrap();

    let UnivariateSummary::ValueCounts(counts) = &result.summary else {
        panic!("expected value counts");
    };
    let order: Vec<&str> = counts.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(order, vec!["b", "a", "c"]);
}

#[test]
fn test_numerical_describe_and_charts() {
    let df = common::create_city_sales_dataframe();
    let config = AnalysisConfig {
        histogram_bins: 12,
        ..Default::default()
    };
    let result = summarize_one(&df, "sales", &config).unwrap();

    assert_eq!(result.class, ColumnClass::Numerical);
    let UnivariateSummary::Describe(summary) = &result.summary else {
        panic!("expected describe statistics");
    };
    assert_eq!(summary.count, 3);
    assert_eq!(summary.mean, Some(20.0));
    assert_eq!(summary.std, Some(10.0));
    assert_eq!(summary.q25, Some(15.0));
    assert_eq!(summary.q50, Some(20.0));
    assert_eq!(summary.q75, Some(25.0));

    assert_eq!(
        kinds(&result.charts),
        vec![ChartKind::Histogram, ChartKind::Density, ChartKind::Box]
    );
    let histogram = &result.charts[0];
    assert_eq!(histogram.style.bins, Some(12));
    assert!(histogram.style.density_overlay);
    assert_eq!(result.charts[2].encoding.x.as_deref(), Some("sales"));
}

#[test]
fn test_quantiles_are_ordered_on_random_data() {
    for seed in 0..20 {
        let df = common::create_random_numeric_dataframe(37, 1, seed);
        let result = summarize_one(&df, "feature_0", &AnalysisConfig::default()).unwrap();

        let UnivariateSummary::Describe(s) = &result.summary else {
            panic!("expected describe statistics");
        };
        let chain = [
            s.min.unwrap(),
            s.q25.unwrap(),
            s.q50.unwrap(),
            s.q75.unwrap(),
            s.max.unwrap(),
        ];
        assert!(
            chain.windows(2).all(|w| w[0] <= w[1]),
            "seed {}: quantiles out of order: {:?}",
            seed,
            chain
        );
        assert!(s.std.unwrap() >= 0.0);
    }
}

#[test]
fn test_single_value_column() {
    let df = df! {
        "v" => [42.0f64],
    }
    .unwrap();
    let result = summarize_one(&df, "v", &AnalysisConfig::default()).unwrap();

    let UnivariateSummary::Describe(s) = &result.summary else {
        panic!("expected describe statistics");
    };
    assert_eq!(s.count, 1);
    assert_eq!(s.std, None);
    assert_eq!(s.min, Some(42.0));
    assert_eq!(s.q50, Some(42.0));
    assert_eq!(s.max, Some(42.0));
    assert!(result.notices.contains(&Notice::ConstantColumn {
        column: "v".to_string()
    }));
}

#[test]
fn test_constant_column_has_zero_std() {
    let df = df! {
        "v" => [3i64, 3, 3, 3],
    }
    .unwrap();
    let result = summarize_one(&df, "v", &AnalysisConfig::default()).unwrap();

    let UnivariateSummary::Describe(s) = &result.summary else {
        panic!("expected describe statistics");
    };
    assert_eq!(s.std, Some(0.0));
    assert_eq!(result.charts.len(), 3);
}

#[test]
fn test_single_category_notice() {
    let df = df! {
        "status" => ["ok", "ok", "ok"],
    }
    .unwrap();
    let result = summarize_one(&df, "status", &AnalysisConfig::default()).unwrap();

    assert!(result.notices.contains(&Notice::SingleCategory {
        column: "status".to_string()
    }));
}

#[test]
fn test_all_null_numeric_column() {
    let df = df! {
        "v" => [None::<f64>, None, None],
    }
    .unwrap();
    let result = summarize_one(&df, "v", &AnalysisConfig::default()).unwrap();

    let UnivariateSummary::Describe(s) = &result.summary else {
        panic!("expected describe statistics");
    };
    assert_eq!(s.count, 0);
    assert_eq!(s.mean, None);
    assert!(result.notices.contains(&Notice::EmptyColumn {
        column: "v".to_string()
    }));
}

#[test]
fn test_unknown_column_is_selection_error() {
    let df = common::create_city_sales_dataframe();
    let err = summarize_one(&df, "revenue", &AnalysisConfig::default()).unwrap_err();

    assert!(err.is_selection_error());
    match err {
        AnalysisError::ColumnNotFound { column, available } => {
            assert_eq!(column, "revenue");
            assert_eq!(available, vec!["city", "sales"]);
        }
        other => panic!("unexpected error: {}", other),
    }
}
