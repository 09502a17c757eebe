//! Integration tests that load scenario batches from an on-disk fixture.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use prequal_cli::app::render_batch;
use prequal_cli::scenarios;
use prequal_core::{AffordabilityConfig, LvrBand};
use rust_decimal_macros::dec;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("scenarios.csv")
}

#[test]
fn fixture_file_loads_every_row() {
    let loaded = scenarios::load_from_file(&fixture_path()).expect("fixture should load");

    let labels: Vec<_> = loaded.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["single", "couple", "over-committed"]);
}

#[test]
fn fixture_rows_keep_optional_cells() {
    let loaded = scenarios::load_from_file(&fixture_path()).unwrap();

    assert_eq!(loaded[0].input.gross_annual_income, Some(dec!(150000)));
    assert_eq!(loaded[0].deposit, Some(dec!(120000)));

    assert_eq!(loaded[1].band, LvrBand::NinetyFive);
    assert_eq!(loaded[1].input.other_monthly_debt, Some(dec!(800)));
    assert!(loaded[1].deposit.is_none());

    // Empty band cell falls back to 80%.
    assert_eq!(loaded[2].band, LvrBand::Eighty);
}

#[test]
fn batch_table_has_one_row_per_scenario() {
    let loaded = scenarios::load_from_file(&fixture_path()).unwrap();

    let table = render_batch(&loaded, &AffordabilityConfig::default());
    let lines: Vec<_> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("label"));
    assert!(lines[1].starts_with("single"));
    assert!(lines[1].contains("434,617"));
    assert!(lines[1].contains("543,271"));
    assert!(lines[1].ends_with("none"));
    assert!(lines[2].ends_with("-"));
    // Debts exceed the housing allowance, so nothing can be borrowed.
    assert!(lines[3].contains(" 0 "));
    assert!(lines[3].ends_with("none"));
}

#[test]
fn missing_file_reports_path() {
    let err = scenarios::load_from_file(Path::new("tests/fixtures/absent.csv")).unwrap_err();

    assert!(err.to_string().contains("absent.csv"));
}
