//! Loan-to-value ratio estimate.
//!
//! The LVR is only defined when a positive target price and a deposit have
//! both been entered. A deposit of zero or less is a valid entry and yields
//! 100%; a deposit at or above the price yields 0%.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_half_up};

/// LVR above which lenders mortgage insurance is usually required.
pub fn lmi_threshold() -> Decimal {
    Decimal::from(80)
}

/// Computes the LVR as a percentage rounded to one decimal place.
///
/// Returns `None` when the target price is absent or not positive, or when
/// the deposit is absent. Otherwise the loan is `max(price - deposit, 0)`
/// and the percentage is clamped into `[0, 100]`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::compute_lvr;
///
/// assert_eq!(compute_lvr(Some(dec!(800000)), Some(dec!(80000))), Some(dec!(90)));
/// assert_eq!(compute_lvr(Some(dec!(500000)), Some(dec!(-1000))), Some(dec!(100)));
/// assert_eq!(compute_lvr(Some(dec!(0)), Some(dec!(100000))), None);
/// assert_eq!(compute_lvr(Some(dec!(500000)), None), None);
/// ```
pub fn compute_lvr(
    target_price: Option<Decimal>,
    deposit: Option<Decimal>,
) -> Option<Decimal> {
    let price = target_price.filter(|price| *price > Decimal::ZERO)?;
    let deposit = deposit?;

    let loan = max(price - deposit, Decimal::ZERO);
    let percent = round_half_up(loan * Decimal::ONE_HUNDRED / price, 1);
    let lvr = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    debug!(price = %price, deposit = %deposit, lvr = %lvr, "Computed LVR");
    Some(lvr)
}

/// True when the LVR is defined and above the LMI threshold.
pub fn lmi_likely(lvr: Option<Decimal>) -> bool {
    lvr.is_some_and(|lvr| lvr > lmi_threshold())
}
