use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a checklist index list cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid checklist item '{input}': expected a number from 1 to {max}")]
pub struct ParseIndexError {
    input: String,
    max: usize,
}

/// Normalizes input for decimal parsing: trims whitespace, drops a leading
/// `$` and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a raw field into an optional [`Decimal`].
///
/// Handles `$` and comma separators. Returns `None` for empty input and for
/// text that is not a number (logged as a warning), so the calculators only
/// ever see a number or "absent".
pub fn parse_optional_decimal(s: &str) -> Option<Decimal> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse().map_or_else(
        |e| {
            tracing::warn!(input = %s, "invalid number treated as absent: {}", e);
            None
        },
        Some,
    )
}

/// Parses an optional raw field, keeping `None` for an absent flag.
pub fn parse_field(s: Option<&str>) -> Option<Decimal> {
    s.and_then(parse_optional_decimal)
}

/// Parses a comma-separated list of 1-based checklist positions into
/// 0-based indices.
pub fn parse_checklist_indices(
    s: &str,
    max: usize,
) -> Result<Vec<usize>, ParseIndexError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => Ok(n - 1),
            _ => Err(ParseIndexError {
                input: part.to_string(),
                max,
            }),
        })
        .collect()
}
