//! CSV loader for batches of affordability scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter.
//!
//! | Column                | Required | Type    | Notes                           |
//! |-----------------------|----------|---------|---------------------------------|
//! | `label`               | yes      | string  | Shown in the output table       |
//! | `gross_annual_income` | no       | decimal | Empty cell counts as zero       |
//! | `other_monthly_debt`  | no       | decimal | Empty cell counts as zero       |
//! | `band`                | no       | string  | `80` or `95`; defaults to `80`  |
//! | `deposit`             | no       | decimal | Empty cell skips the gap column |
//!
//! ### Example
//!
//! ```csv
//! label,gross_annual_income,other_monthly_debt,band,deposit
//! single,150000,0,80,120000
//! couple,220000,800,95,
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use prequal_core::{AffordabilityInput, LvrBand};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    label: String,
    gross_annual_income: Option<Decimal>,
    other_monthly_debt: Option<Decimal>,
    band: Option<String>,
    deposit: Option<Decimal>,
}

/// One borrower scenario read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub label: String,
    pub input: AffordabilityInput,
    pub band: LvrBand,
    pub deposit: Option<Decimal>,
}

/// Errors that can occur while loading scenario rows.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    /// The CSV structure or a numeric cell was invalid.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A `band` cell was neither 80 nor 95. `row` is 1-based, header
    /// excluded.
    #[error("unrecognised LVR band '{band}' on row {row}")]
    InvalidBand { band: String, row: usize },
}

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoadError> {
    let band = match row.band.as_deref().map(str::trim) {
        None | Some("") => LvrBand::default(),
        Some(text) => text.parse().map_err(|_| ScenarioLoadError::InvalidBand {
            band: text.to_string(),
            row: row_number,
        })?,
    };

    Ok(Scenario {
        label: row.label,
        input: AffordabilityInput {
            gross_annual_income: row.gross_annual_income,
            other_monthly_debt: row.other_monthly_debt,
        },
        band,
        deposit: row.deposit,
    })
}

/// Parses CSV text into scenarios, in file order.
///
/// # Errors
///
/// * [ScenarioLoadError::Parse] if the CSV is malformed or a numeric cell
///   is not a number.
/// * [ScenarioLoadError::InvalidBand] if a band cell is not 80 or 95.
pub fn load_from_str(input: &str) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Reads a scenario file from disk and delegates to [load_from_str].
pub fn load_from_file(path: &Path) -> Result<Vec<Scenario>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read scenario file '{}'", path.display()))?;
    let scenarios = load_from_str(&contents)
        .with_context(|| format!("cannot parse scenario file '{}'", path.display()))?;
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const MINIMAL_CSV: &str = "\
label
empty
";

    const FULL_CSV: &str = "\
label,gross_annual_income,other_monthly_debt,band,deposit
single,150000,0,80,120000
couple,\"220,000\",800,95,
";

    #[test]
    fn minimal_row_uses_defaults() {
        let scenarios = load_from_str(MINIMAL_CSV).expect("should parse minimal CSV");

        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].label, "empty");
        assert_eq!(scenarios[0].input, AffordabilityInput::default());
        assert_eq!(scenarios[0].band, LvrBand::Eighty);
        assert_eq!(scenarios[0].deposit, None);
    }

    #[test]
    fn full_row_is_converted() {
        let scenarios = load_from_str(&FULL_CSV.replace("\"220,000\"", "220000")).unwrap();

        let first = &scenarios[0];
        assert_eq!(first.input.gross_annual_income, Some(dec!(150000)));
        assert_eq!(first.input.other_monthly_debt, Some(dec!(0)));
        assert_eq!(first.deposit, Some(dec!(120000)));

        let second = &scenarios[1];
        assert_eq!(second.band, LvrBand::NinetyFive);
        assert_eq!(second.deposit, None);
    }

    #[test]
    fn grouped_number_cell_is_a_parse_error() {
        let err = load_from_str(FULL_CSV).unwrap_err();

        assert!(matches!(err, ScenarioLoadError::Parse(_)));
    }

    #[test]
    fn unknown_band_reports_row() {
        let csv = "label,band\nfirst,80\nsecond,90\n";

        let err = load_from_str(csv).unwrap_err();

        assert_eq!(err.to_string(), "unrecognised LVR band '90' on row 2");
    }
}
