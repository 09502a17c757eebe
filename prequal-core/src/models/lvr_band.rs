use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AffordabilityResult, SelectionParseError};

/// Loan-to-value band the buyer is planning around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LvrBand {
    /// 80% LVR; lenders mortgage insurance is usually not required.
    #[default]
    Eighty,
    /// 95% LVR; LMI applies, typically available to first home buyers.
    NinetyFive,
}

impl LvrBand {
    pub fn all() -> &'static [LvrBand] {
        &[LvrBand::Eighty, LvrBand::NinetyFive]
    }

    /// Loan share of the purchase price.
    pub fn ratio(&self) -> Decimal {
        match self {
            Self::Eighty => Decimal::new(80, 2),
            Self::NinetyFive => Decimal::new(95, 2),
        }
    }

    /// Deposit share of the purchase price, `1 - ratio`.
    pub fn deposit_ratio(&self) -> Decimal {
        Decimal::ONE - self.ratio()
    }

    pub fn price_ceiling(
        &self,
        result: &AffordabilityResult,
    ) -> Decimal {
        match self {
            Self::Eighty => result.price_ceiling_80,
            Self::NinetyFive => result.price_ceiling_95,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Eighty => "80% (no LMI)",
            Self::NinetyFive => "95% (incl. LMI, first home buyers)",
        }
    }
}

impl fmt::Display for LvrBand {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LvrBand {
    type Err = SelectionParseError;

    /// Accepts `80`, `80%`, `0.8`, `0.80` and the 95% equivalents.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%') {
            "80" | "0.8" | "0.80" => Ok(Self::Eighty),
            "95" | "0.95" => Ok(Self::NinetyFive),
            _ => Err(SelectionParseError::new("LVR band", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn deposit_ratio_complements_loan_ratio() {
        assert_eq!(LvrBand::Eighty.deposit_ratio(), dec!(0.20));
        assert_eq!(LvrBand::NinetyFive.deposit_ratio(), dec!(0.05));
    }

    #[test]
    fn parses_percent_and_fraction_forms() {
        assert_eq!("80".parse::<LvrBand>(), Ok(LvrBand::Eighty));
        assert_eq!("80%".parse::<LvrBand>(), Ok(LvrBand::Eighty));
        assert_eq!("0.8".parse::<LvrBand>(), Ok(LvrBand::Eighty));
        assert_eq!(" 95 ".parse::<LvrBand>(), Ok(LvrBand::NinetyFive));
        assert_eq!("0.95".parse::<LvrBand>(), Ok(LvrBand::NinetyFive));
    }

    #[test]
    fn rejects_unknown_band() {
        assert!("90".parse::<LvrBand>().is_err());
    }

    #[test]
    fn price_ceiling_selects_matching_band() {
        let result = AffordabilityResult::from_loan_ceiling(dec!(3000), dec!(400000));

        assert_eq!(LvrBand::Eighty.price_ceiling(&result), dec!(500000));
        assert_eq!(
            LvrBand::NinetyFive.price_ceiling(&result),
            dec!(400000) / dec!(0.95)
        );
    }
}
