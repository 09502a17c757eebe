//! Deposit position at a chosen LVR band.
//!
//! The price ceiling for the band fixes the deposit the buyer needs. The gap
//! is reported the way the affordability card presents it: the price that
//! the available deposit cannot yet reach at this band, i.e.
//! `target_price - available_deposit / (1 - band)`, floored at zero. The
//! same shortfall expressed in deposit dollars is reported alongside. Both
//! are zero under the same condition, which signals "deposit sufficient".

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::{AffordabilityResult, DepositGap, LvrBand};

/// Derives the required deposit and the shortfall against it.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::{AffordabilityResult, LvrBand, compute_deposit_gap};
///
/// let result = AffordabilityResult::from_loan_ceiling(dec!(3000), dec!(400000));
///
/// let gap = compute_deposit_gap(&result, LvrBand::Eighty, dec!(60000));
///
/// assert_eq!(gap.target_price, dec!(500000));
/// assert_eq!(gap.required_deposit, dec!(100000));
/// assert_eq!(gap.gap, dec!(200000));
/// assert_eq!(gap.deposit_shortfall, dec!(40000));
/// assert!(!gap.is_sufficient());
/// ```
pub fn compute_deposit_gap(
    result: &AffordabilityResult,
    band: LvrBand,
    available_deposit: Decimal,
) -> DepositGap {
    let target_price = band.price_ceiling(result);
    let deposit_ratio = band.deposit_ratio();

    let required_deposit = target_price * deposit_ratio;
    let reachable_price = available_deposit / deposit_ratio;
    let gap = max(target_price - reachable_price, Decimal::ZERO);
    let deposit_shortfall = max(required_deposit - available_deposit, Decimal::ZERO);

    debug!(
        band = ?band,
        target_price = %target_price,
        required_deposit = %required_deposit,
        gap = %gap,
        "Computed deposit gap"
    );

    DepositGap {
        band,
        target_price,
        required_deposit,
        available_deposit,
        gap,
        deposit_shortfall,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn result_with_loan(loan: Decimal) -> AffordabilityResult {
        AffordabilityResult::from_loan_ceiling(dec!(0), loan)
    }

    #[test]
    fn exact_deposit_is_sufficient() {
        let result = result_with_loan(dec!(400000));

        let gap = compute_deposit_gap(&result, LvrBand::Eighty, dec!(100000));

        assert_eq!(gap.gap, Decimal::ZERO);
        assert_eq!(gap.deposit_shortfall, Decimal::ZERO);
        assert!(gap.is_sufficient());
    }

    #[test]
    fn surplus_deposit_floors_gap_at_zero() {
        let result = result_with_loan(dec!(400000));

        let gap = compute_deposit_gap(&result, LvrBand::Eighty, dec!(250000));

        assert_eq!(gap.gap, Decimal::ZERO);
        assert_eq!(gap.deposit_shortfall, Decimal::ZERO);
    }

    #[test]
    fn ninety_five_band_needs_smaller_deposit() {
        let result = result_with_loan(dec!(475000));

        let gap = compute_deposit_gap(&result, LvrBand::NinetyFive, dec!(20000));

        assert_eq!(gap.target_price, dec!(500000));
        assert_eq!(gap.required_deposit, dec!(25000));
        assert_eq!(gap.deposit_shortfall, dec!(5000));
        // 20000 / 0.05 = 400000 reachable
        assert_eq!(gap.gap, dec!(100000));
    }

    #[test]
    fn zero_ceiling_needs_no_deposit() {
        let result = result_with_loan(Decimal::ZERO);

        let gap = compute_deposit_gap(&result, LvrBand::NinetyFive, Decimal::ZERO);

        assert_eq!(gap.required_deposit, Decimal::ZERO);
        assert!(gap.is_sufficient());
    }

    #[test]
    fn gap_and_shortfall_agree_on_sufficiency() {
        let result = result_with_loan(dec!(434617.01));

        for band in LvrBand::all() {
            for deposit in [dec!(0), dec!(30000), dec!(120000), dec!(500000)] {
                let gap = compute_deposit_gap(&result, *band, deposit);

                assert_eq!(gap.gap.is_zero(), gap.deposit_shortfall.is_zero());
            }
        }
    }
}
