//! Unit tests for the dataset overview

use polars::prelude::*;
use tabscope::analysis::{overview, AnalysisConfig, DescribeStats, Notice};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_duplicate_rows_counted_once() {
    let df = common::create_duplicate_dataframe();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.duplicate_rows, 1);
}

#[test]
fn test_duplicates_treat_nulls_as_equal() {
    let df = df! {
        "a" => [Some(1i32), None, None, Some(1)],
        "b" => [Some("x"), None, None, Some("y")],
    }
    .unwrap();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.duplicate_rows, 1);
}

#[test]
fn test_shape_and_null_counts() {
    let df = common::create_mixed_dataframe();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.shape.rows, 6);
    assert_eq!(result.shape.columns, 4);

    let nulls: Vec<(&str, usize)> = result
        .null_counts
        .iter()
        .map(|n| (n.column.as_str(), n.nulls))
        .collect();
    assert_eq!(
        nulls,
        vec![("region", 1), ("product", 1), ("units", 1), ("price", 1)]
    );

    let units = result.columns.iter().find(|c| c.name == "units").unwrap();
    assert_eq!(units.non_null, 5);
}

#[test]
fn test_describe_uses_rule_per_class() {
    let df = common::create_mixed_dataframe();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    let region = &result.describe[0];
    assert_eq!(region.column, "region");
    match &region.stats {
        DescribeStats::Categorical(s) => {
            assert_eq!(s.count, 5);
            assert_eq!(s.unique, 3);
            assert_eq!(s.top.as_deref(), Some("north"));
            assert_eq!(s.freq, Some(2));
        }
        other => panic!("region should be categorical, got {:?}", other),
    }

    let units = &result.describe[2];
    match &units.stats {
        DescribeStats::Numerical(s) => {
            // 2, 3, 5, 5, 8
            assert_eq!(s.count, 5);
            assert_eq!(s.min, Some(2.0));
            assert_eq!(s.q25, Some(3.0));
            assert_eq!(s.q50, Some(5.0));
            assert_eq!(s.q75, Some(5.0));
            assert_eq!(s.max, Some(8.0));
            assert!((s.mean.unwrap() - 4.6).abs() < 1e-12);
        }
        other => panic!("units should be numerical, got {:?}", other),
    }
}

#[test]
fn test_correlation_restricted_to_numeric_columns() {
    let df = common::create_mixed_dataframe();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    let matrix = result.correlation.expect("numeric columns exist");
    assert_eq!(matrix.columns, vec!["units", "price"]);
}

#[test]
fn test_correlation_symmetric_with_unit_diagonal() {
    let df = common::create_random_numeric_dataframe(60, 5, 7);
    let result = overview(&df, &AnalysisConfig::default()).unwrap();
    let matrix = result.correlation.unwrap();

    assert_eq!(matrix.len(), 5);
    for i in 0..5 {
        assert_eq!(matrix.values[i][i], Some(1.0));
        for j in 0..5 {
            assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            let r = matrix.values[i][j].unwrap();
            assert!((-1.0..=1.0).contains(&r));
        }
    }
}

#[test]
fn test_perfect_correlation() {
    let df = common::create_xy_dataframe();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();
    let matrix = result.correlation.unwrap();

    assert!((matrix.get("x", "y").unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_no_numeric_columns_has_no_matrix() {
    let df = df! {
        "a" => ["x", "y", "z"],
        "b" => ["p", "q", "p"],
    }
    .unwrap();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert!(result.correlation.is_none());
    assert!(result.notices.contains(&Notice::NoNumericColumns));

    let json = serde_json::to_value(&result).unwrap();
    assert!(
        json.get("correlation").is_none(),
        "correlation must be absent, not an empty matrix"
    );
}

#[test]
fn test_constant_column_correlation_is_undefined() {
    let df = df! {
        "a" => [1.0f64, 2.0, 3.0],
        "flat" => [4.0f64, 4.0, 4.0],
    }
    .unwrap();
    let matrix = overview(&df, &AnalysisConfig::default())
        .unwrap()
        .correlation
        .unwrap();

    assert_eq!(matrix.get("a", "flat"), None);
    assert_eq!(matrix.get("flat", "flat"), None);
    assert_eq!(matrix.get("a", "a"), Some(1.0));
}

#[test]
fn test_preview_respects_row_limit() {
    let df = common::create_random_numeric_dataframe(20, 2, 1);
    let config = AnalysisConfig {
        preview_rows: 3,
        ..Default::default()
    };
    let result = overview(&df, &config).unwrap();

    assert_eq!(result.preview.rows.len(), 3);
    assert_eq!(result.preview.columns, vec!["feature_0", "feature_1"]);
}

#[test]
fn test_empty_table_does_not_fail() {
    let df = df! {
        "a" => Vec::<f64>::new(),
        "b" => Vec::<&str>::new(),
    }
    .unwrap();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.shape.rows, 0);
    assert_eq!(result.duplicate_rows, 0);
    assert!(result.notices.contains(&Notice::EmptyTable));
}

#[test]
fn test_all_null_columns_are_flagged() {
    let df = df! {
        "a" => [None::<f64>, None, None],
        "b" => [None::<f64>, None, None],
        "c" => [Some(1.0f64), None, Some(3.0)],
    }
    .unwrap();
    let result = overview(&df, &AnalysisConfig::default()).unwrap();

    assert_eq!(
        result.notices,
        vec![
            Notice::EmptyColumn {
                column: "a".to_string()
            },
            Notice::EmptyColumn {
                column: "b".to_string()
            },
        ]
    );
}
