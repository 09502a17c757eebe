use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported when an [`AffordabilityConfig`] holds values outside
/// their valid range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AffordabilityConfigError {
    /// The nominal annual rate must be strictly positive.
    #[error("annual rate must be positive, got {0}")]
    InvalidAnnualRate(Decimal),

    /// The serviceability buffer cannot be negative.
    #[error("stress buffer must be non-negative, got {0}")]
    InvalidStressBuffer(Decimal),

    /// A loan term of zero years has no repayment periods.
    #[error("loan term must be at least one year, got {0}")]
    InvalidTerm(u32),

    /// The housing-expense ratio must lie in (0, 1].
    #[error("housing expense ratio must be between 0 and 1, got {0}")]
    InvalidHousingExpenseRatio(Decimal),

    /// The first home owner grant cannot be negative.
    #[error("first home grant must be non-negative, got {0}")]
    InvalidFirstHomeGrant(Decimal),
}

/// Lending assumptions used by the serviceability model.
///
/// All rates are annual fractions. The calculator converts them to a monthly
/// rate only after the stress buffer has been added, so
/// `monthly_test_rate = (annual_rate + stress_buffer) / 12`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::AffordabilityConfig;
///
/// let config = AffordabilityConfig::default();
///
/// assert_eq!(config.annual_rate, dec!(0.068));
/// assert_eq!(config.stress_buffer, dec!(0.03));
/// assert_eq!(config.term_years, 30);
/// assert_eq!(config.housing_expense_ratio, dec!(0.30));
/// assert_eq!(config.term_months(), 360);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffordabilityConfig {
    /// Nominal annual interest rate, e.g. `0.068` for 6.8%.
    pub annual_rate: Decimal,

    /// Serviceability buffer added to the nominal rate before testing.
    ///
    /// Lenders currently assess at three percentage points above the
    /// product rate.
    pub stress_buffer: Decimal,

    /// Loan term in whole years.
    pub term_years: u32,

    /// Share of gross monthly income that may go to housing repayments.
    pub housing_expense_ratio: Decimal,

    /// First home owner grant for new homes in Victoria.
    pub first_home_grant: Decimal,
}

impl Default for AffordabilityConfig {
    fn default() -> Self {
        Self {
            annual_rate: Decimal::new(68, 3),
            stress_buffer: Decimal::new(3, 2),
            term_years: 30,
            housing_expense_ratio: Decimal::new(30, 2),
            first_home_grant: Decimal::new(10_000, 0),
        }
    }
}

impl AffordabilityConfig {
    /// Annual rate used for the serviceability test (rate plus buffer).
    pub fn test_rate(&self) -> Decimal {
        self.annual_rate + self.stress_buffer
    }

    /// Monthly rate derived from [`test_rate`](Self::test_rate).
    pub fn monthly_test_rate(&self) -> Decimal {
        self.test_rate() / Decimal::from(12)
    }

    /// Number of monthly repayments over the loan term.
    pub fn term_months(&self) -> u64 {
        u64::from(self.term_years) * 12
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`AffordabilityConfigError`] if:
    /// - `annual_rate` is not positive
    /// - `stress_buffer` is negative
    /// - `term_years` is zero
    /// - `housing_expense_ratio` is not in (0, 1]
    /// - `first_home_grant` is negative
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use prequal_core::{AffordabilityConfig, AffordabilityConfigError};
    ///
    /// let config = AffordabilityConfig {
    ///     housing_expense_ratio: dec!(1.2),
    ///     ..AffordabilityConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(AffordabilityConfigError::InvalidHousingExpenseRatio(dec!(1.2)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), AffordabilityConfigError> {
        if self.annual_rate <= Decimal::ZERO {
            return Err(AffordabilityConfigError::InvalidAnnualRate(
                self.annual_rate,
            ));
        }
        if self.stress_buffer < Decimal::ZERO {
            return Err(AffordabilityConfigError::InvalidStressBuffer(
                self.stress_buffer,
            ));
        }
        if self.term_years == 0 {
            return Err(AffordabilityConfigError::InvalidTerm(self.term_years));
        }
        if self.housing_expense_ratio <= Decimal::ZERO || self.housing_expense_ratio > Decimal::ONE
        {
            return Err(AffordabilityConfigError::InvalidHousingExpenseRatio(
                self.housing_expense_ratio,
            ));
        }
        if self.first_home_grant < Decimal::ZERO {
            return Err(AffordabilityConfigError::InvalidFirstHomeGrant(
                self.first_home_grant,
            ));
        }
        Ok(())
    }
}
