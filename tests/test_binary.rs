//! End-to-end tests of the tabscope binary

use assert_cmd::Command;
use predicates::prelude::*;

#[path = "common/mod.rs"]
mod common;

const CITY_SALES: &str = "city,sales\nNY,10\nLA,20\nNY,30\n";

fn tabscope() -> Command {
    Command::cargo_bin("tabscope").unwrap()
}

#[test]
fn test_overview_report() {
    let (_temp_dir, path) = common::create_temp_csv_text(CITY_SALES);

    tabscope()
        .arg("-i")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Shape of the data"))
        .stdout(predicate::str::contains("Correlation Matrix"));
}

#[test]
fn test_overview_without_numeric_columns() {
    let (_temp_dir, path) = common::create_temp_csv_text("a,b\nx,p\ny,q\n");

    tabscope()
        .arg("-i")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No numeric data available for correlation matrix",
        ));
}

#[test]
fn test_quiet_export_writes_json() {
    let (temp_dir, path) = common::create_temp_csv_text(CITY_SALES);
    let output = temp_dir.path().join("result.json");

    tabscope()
        .args(["bivariate", "-x", "sales", "-y", "city", "--quiet"])
        .arg("-i")
        .arg(&path)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["metadata"]["selection"]["menu"], "bivariate");
    assert_eq!(json["analysis"]["result"]["mode"]["mode"], "cat_num");
    assert_eq!(json["analysis"]["result"]["mode"]["categorical"], "city");
}

#[test]
fn test_derived_export_path() {
    let (temp_dir, path) = common::create_temp_csv_text(CITY_SALES);

    tabscope()
        .args(["--quiet", "--export", "univariate", "-c", "city"])
        .arg("-i")
        .arg(&path)
        .assert()
        .success();

    assert!(temp_dir.path().join("test_data_univariate_eda.json").exists());
}

#[test]
fn test_missing_file_is_parse_error() {
    tabscope()
        .args(["-i", "/nonexistent/data.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_unknown_column_is_selection_error() {
    let (_temp_dir, path) = common::create_temp_csv_text(CITY_SALES);

    tabscope()
        .args(["univariate", "-c", "revenue"])
        .arg("-i")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection error"))
        .stderr(predicate::str::contains("revenue"));
}

#[test]
fn test_omitted_column_without_prompt_fails() {
    let (_temp_dir, path) = common::create_temp_csv_text(CITY_SALES);

    tabscope()
        .args(["bivariate", "-x", "city", "--no-interactive"])
        .arg("-i")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incomplete selection"));
}

#[test]
fn test_missing_input_argument() {
    tabscope()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file is required"));
}
