//! Shared test utilities and fixture generators
#![allow(dead_code)]

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// `city` (text) and `sales` (numeric): NY 10, LA 20, NY 30
pub fn create_city_sales_dataframe() -> DataFrame {
    df! {
        "city" => ["NY", "LA", "NY"],
        "sales" => [10i64, 20, 30],
    }
    .unwrap()
}

/// Three rows where the second repeats the first
pub fn create_duplicate_dataframe() -> DataFrame {
    df! {
        "n" => [1i64, 1, 2],
        "s" => ["a", "a", "b"],
    }
    .unwrap()
}

/// Two numeric columns with y = 2x
pub fn create_xy_dataframe() -> DataFrame {
    df! {
        "x" => [1.0f64, 2.0, 3.0],
        "y" => [2.0f64, 4.0, 6.0],
    }
    .unwrap()
}

/// Mixed table with nulls in both classes
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "region" => [Some("north"), Some("south"), None, Some("north"), Some("east"), Some("south")],
        "product" => [Some("a"), Some("b"), Some("a"), Some("a"), None, Some("b")],
        "units" => [Some(3i32), Some(5), Some(2), None, Some(8), Some(5)],
        "price" => [Some(9.5f64), Some(12.0), Some(7.25), Some(10.0), Some(15.5), None],
    }
    .unwrap()
}

/// Random numeric table for property checks
pub fn create_random_numeric_dataframe(rows: usize, cols: usize, seed: u64) -> DataFrame {
    use rand::{Rng, SeedableRng};
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let columns: Vec<Column> = (0..cols)
        .map(|i| {
            let values: Vec<f64> = (0..rows).map(|_| rng.gen::<f64>() * 100.0 - 50.0).collect();
            Column::new(format!("feature_{}", i).into(), values)
        })
        .collect();

    DataFrame::new(columns).unwrap()
}

/// Write raw CSV text to a temporary file
pub fn create_temp_csv_text(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");
    std::fs::write(&csv_path, contents).unwrap();
    (temp_dir, csv_path)
}

/// Write a DataFrame to a temporary CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}
