//! Serviceability-based affordability estimate.
//!
//! A lender caps housing repayments at a share of gross monthly income and
//! tests them at a stressed rate. The largest loan those repayments amortise
//! over the term is the loan ceiling:
//!
//! | Step | Formula |
//! |------|---------|
//! | 1    | monthly income = gross annual income / 12 |
//! | 2    | max repayment = max(0, monthly income × housing ratio − other debts) |
//! | 3    | r = (annual rate + stress buffer) / 12, n = term years × 12 |
//! | 4    | annuity factor = (1 − (1 + r)^−n) / r, or n when r = 0 |
//! | 5    | loan ceiling = max(0, max repayment × factor) |
//! | 6    | price ceilings = loan ceiling / 0.80 and / 0.95 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use prequal_core::{AffordabilityConfig, AffordabilityInput, compute_affordability};
//!
//! let input = AffordabilityInput::new(dec!(150000), dec!(0));
//! let result = compute_affordability(&input, &AffordabilityConfig::default());
//!
//! assert_eq!(result.max_monthly_repayment, dec!(3750));
//! assert!(result.loan_ceiling > dec!(434617) && result.loan_ceiling < dec!(434618));
//! assert!(result.price_ceiling_80 > result.price_ceiling_95);
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use tracing::{debug, warn};

use crate::calculations::common::max;
use crate::{AffordabilityConfig, AffordabilityInput, AffordabilityResult};

/// Computes the loan ceiling and purchase-price ceilings for a borrower.
///
/// Never fails: absent income or debt counts as zero, debts larger than the
/// housing allowance floor the repayment at zero, and a negative test rate
/// whose annuity factor cannot be represented yields a zero loan ceiling.
pub fn compute_affordability(
    input: &AffordabilityInput,
    config: &AffordabilityConfig,
) -> AffordabilityResult {
    let income = input.gross_annual_income.unwrap_or(Decimal::ZERO);
    let debt = input.other_monthly_debt.unwrap_or(Decimal::ZERO);

    let max_repayment = max_monthly_repayment(income, debt, config.housing_expense_ratio);
    let monthly_rate = config.monthly_test_rate();
    let periods = config.term_months();

    let loan_ceiling = match annuity_factor(monthly_rate, periods)
        .and_then(|factor| max_repayment.checked_mul(factor))
    {
        Some(loan) => max(loan, Decimal::ZERO),
        None => {
            warn!(
                monthly_rate = %monthly_rate,
                periods,
                max_repayment = %max_repayment,
                "Annuity factor out of range; loan ceiling floored at zero"
            );
            Decimal::ZERO
        }
    };

    let result = AffordabilityResult::from_loan_ceiling(max_repayment, loan_ceiling);
    debug!(
        income = %income,
        debt = %debt,
        loan_ceiling = %result.loan_ceiling,
        "Computed affordability"
    );
    result
}

/// Repayment capacity left for housing each month.
fn max_monthly_repayment(
    gross_annual_income: Decimal,
    other_monthly_debt: Decimal,
    housing_expense_ratio: Decimal,
) -> Decimal {
    let monthly_income = gross_annual_income / Decimal::from(12);
    let capacity = monthly_income * housing_expense_ratio - other_monthly_debt;
    if capacity < Decimal::ZERO {
        warn!(
            monthly_income = %monthly_income,
            other_monthly_debt = %other_monthly_debt,
            "Other debts exceed the housing allowance; repayment capacity is zero"
        );
    }
    max(capacity, Decimal::ZERO)
}

/// Present value of one unit paid at the end of each of `periods` months.
///
/// Uses the level-payment identity `(1 - (1 + r)^-n) / r` and its limit `n`
/// when `r` is zero. The discount term is raised directly, so for a positive
/// rate it shrinks toward zero and the factor approaches `1 / r` on very long
/// terms or very high rates. Returns `None` if `1 + r` is zero or, for a
/// negative rate, the power overflows.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::calculations::annuity_factor;
///
/// assert_eq!(annuity_factor(dec!(0), 360), Some(dec!(360)));
///
/// let factor = annuity_factor(dec!(0.098) / dec!(12), 360).unwrap();
/// assert!(factor > dec!(115.89) && factor < dec!(115.90));
/// ```
pub fn annuity_factor(
    monthly_rate: Decimal,
    periods: u64,
) -> Option<Decimal> {
    if monthly_rate.is_zero() {
        return Some(Decimal::from(periods));
    }
    let base = Decimal::ONE.checked_div(Decimal::ONE + monthly_rate)?;
    let discount = match base.checked_powu(periods) {
        Some(discount) => discount,
        None if base < Decimal::ONE => Decimal::ZERO,
        None => return None,
    };
    (Decimal::ONE - discount).checked_div(monthly_rate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;

    fn default_config() -> AffordabilityConfig {
        AffordabilityConfig::default()
    }

    fn assert_close(
        actual: Decimal,
        expected: Decimal,
    ) {
        let diff = (actual - expected).abs();
        assert!(
            diff < dec!(0.01),
            "expected {expected}, got {actual} (diff {diff})"
        );
    }

    // =========================================================================
    // reference scenarios
    // =========================================================================

    #[test]
    fn computes_ceiling_for_default_assumptions() {
        let input = AffordabilityInput::new(dec!(150000), dec!(0));

        let result = compute_affordability(&input, &default_config());

        assert_eq!(result.max_monthly_repayment, dec!(3750));
        assert_close(result.loan_ceiling, dec!(434617.01));
        assert_close(result.price_ceiling_80, dec!(543271.26));
        assert_close(result.price_ceiling_95, dec!(457491.59));
    }

    #[test]
    fn other_debts_reduce_repayment_capacity() {
        let input = AffordabilityInput::new(dec!(120000), dec!(500));

        let result = compute_affordability(&input, &default_config());

        assert_eq!(result.max_monthly_repayment, dec!(2500));
        assert_close(result.loan_ceiling, dec!(289744.67));
    }

    #[test]
    fn debts_above_allowance_floor_at_zero() {
        let input = AffordabilityInput::new(dec!(100000), dec!(3000));

        let result = compute_affordability(&input, &default_config());

        assert_eq!(result.max_monthly_repayment, Decimal::ZERO);
        assert_eq!(result.loan_ceiling, Decimal::ZERO);
        assert_eq!(result.price_ceiling_80, Decimal::ZERO);
        assert_eq!(result.price_ceiling_95, Decimal::ZERO);
    }

    #[test]
    fn absent_income_and_debt_count_as_zero() {
        let result = compute_affordability(&AffordabilityInput::default(), &default_config());

        assert_eq!(result.loan_ceiling, Decimal::ZERO);
    }

    #[test]
    fn absent_debt_only_is_ignored() {
        let input = AffordabilityInput {
            gross_annual_income: Some(dec!(80000)),
            other_monthly_debt: None,
        };

        let result = compute_affordability(&input, &default_config());

        assert_close(result.max_monthly_repayment, dec!(2000));
        assert_close(result.loan_ceiling, dec!(231795.74));
    }

    #[test]
    fn zero_test_rate_uses_period_count() {
        let config = AffordabilityConfig {
            annual_rate: dec!(0),
            stress_buffer: dec!(0),
            ..default_config()
        };
        let input = AffordabilityInput::new(dec!(120000), dec!(0));

        let result = compute_affordability(&input, &config);

        assert_eq!(result.loan_ceiling, dec!(1080000));
    }

    #[test]
    fn higher_buffer_lowers_ceiling() {
        let input = AffordabilityInput::new(dec!(150000), dec!(0));
        let stressed = AffordabilityConfig {
            stress_buffer: dec!(0.05),
            ..default_config()
        };

        let base = compute_affordability(&input, &default_config());
        let harsher = compute_affordability(&input, &stressed);

        assert!(harsher.loan_ceiling < base.loan_ceiling);
    }

    #[test]
    fn unrepresentable_factor_floors_at_zero() {
        // 1 + r == 0 makes the discount term undefined.
        assert_eq!(annuity_factor(dec!(-1), 360), None);

        let config = AffordabilityConfig {
            annual_rate: dec!(-12),
            stress_buffer: dec!(0),
            ..default_config()
        };
        let input = AffordabilityInput::new(dec!(150000), dec!(0));

        let result = compute_affordability(&input, &config);

        assert_eq!(result.loan_ceiling, Decimal::ZERO);
    }

    #[test]
    fn extreme_rate_approaches_perpetuity() {
        let config = AffordabilityConfig {
            annual_rate: dec!(3),
            ..default_config()
        };
        assert!(config.validate().is_ok());
        let input = AffordabilityInput::new(dec!(150000), dec!(0));

        let result = compute_affordability(&input, &config);

        let perpetuity = dec!(3750) / config.monthly_test_rate();
        assert_close(result.loan_ceiling, perpetuity);
        assert!(result.loan_ceiling > dec!(14000));
    }

    #[test]
    fn very_long_term_approaches_perpetuity() {
        let config = AffordabilityConfig {
            term_years: 1000,
            ..default_config()
        };
        assert!(config.validate().is_ok());
        let input = AffordabilityInput::new(dec!(150000), dec!(0));

        let result = compute_affordability(&input, &config);

        assert_close(result.loan_ceiling, dec!(459183.67));
        assert!(result.loan_ceiling > dec!(434617.01));
    }

    #[test]
    fn positive_rate_factor_is_always_defined() {
        let factor = annuity_factor(dec!(0.25), 1_000_000).unwrap();

        assert_close(factor, dec!(4));
    }

    // =========================================================================
    // properties
    // =========================================================================

    proptest! {
        #[test]
        fn price_ceilings_are_pure_divisions(
            income in 0u32..2_000_000,
            debt in 0u32..20_000,
        ) {
            let input = AffordabilityInput::new(Decimal::from(income), Decimal::from(debt));

            let result = compute_affordability(&input, &default_config());

            prop_assert!(result.loan_ceiling >= Decimal::ZERO);
            prop_assert_eq!(result.price_ceiling_80, result.loan_ceiling / dec!(0.80));
            prop_assert_eq!(result.price_ceiling_95, result.loan_ceiling / dec!(0.95));
            prop_assert!(result.price_ceiling_80 >= result.price_ceiling_95);
        }

        #[test]
        fn repeated_calls_are_identical(
            income in 0u32..2_000_000,
            debt in 0u32..20_000,
        ) {
            let input = AffordabilityInput::new(Decimal::from(income), Decimal::from(debt));

            let first = compute_affordability(&input, &default_config());
            let second = compute_affordability(&input, &default_config());

            prop_assert_eq!(first, second);
        }
    }
}
