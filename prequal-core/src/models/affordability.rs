use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::LvrBand;

/// Borrower figures fed into the serviceability model.
///
/// Absent values are treated as zero by the calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityInput {
    /// Gross annual income before tax.
    pub gross_annual_income: Option<Decimal>,

    /// Repayments on other debts (cards, car loans, HECS, ...) per month.
    pub other_monthly_debt: Option<Decimal>,
}

impl AffordabilityInput {
    pub fn new(
        gross_annual_income: Decimal,
        other_monthly_debt: Decimal,
    ) -> Self {
        Self {
            gross_annual_income: Some(gross_annual_income),
            other_monthly_debt: Some(other_monthly_debt),
        }
    }
}

/// Output of the serviceability model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    /// Monthly repayment the borrower can commit to housing, floored at zero.
    pub max_monthly_repayment: Decimal,

    /// Largest loan that repayment services at the stressed rate.
    pub loan_ceiling: Decimal,

    /// Purchase price reachable with an 80% LVR loan.
    pub price_ceiling_80: Decimal,

    /// Purchase price reachable with a 95% LVR loan.
    pub price_ceiling_95: Decimal,
}

impl AffordabilityResult {
    /// Derives both price ceilings from a loan ceiling.
    pub fn from_loan_ceiling(
        max_monthly_repayment: Decimal,
        loan_ceiling: Decimal,
    ) -> Self {
        Self {
            max_monthly_repayment,
            loan_ceiling,
            price_ceiling_80: loan_ceiling / LvrBand::Eighty.ratio(),
            price_ceiling_95: loan_ceiling / LvrBand::NinetyFive.ratio(),
        }
    }
}

/// Deposit position at a chosen LVR band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositGap {
    pub band: LvrBand,

    /// Price ceiling at the chosen band.
    pub target_price: Decimal,

    /// Deposit needed to buy at `target_price` with this band
    /// (stamp duty and fees not included).
    pub required_deposit: Decimal,

    pub available_deposit: Decimal,

    /// Price the available deposit falls short of, i.e.
    /// `target_price - available_deposit / (1 - band)`, floored at zero.
    pub gap: Decimal,

    /// `required_deposit - available_deposit`, floored at zero.
    pub deposit_shortfall: Decimal,
}

impl DepositGap {
    /// True when the available deposit covers the band's requirement.
    pub fn is_sufficient(&self) -> bool {
        self.gap.is_zero()
    }
}
