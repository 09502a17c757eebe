use rust_decimal::Decimal;

use crate::calculations::compute_lvr;
use crate::{
    CashBuffer, CommuteTolerance, Horizon, Purpose, ResidencyStatus, SchoolPriority, VisaSubtype,
};

/// The buyer's current selections and budget figures.
///
/// This is a plain value: every derived figure (LVR, summary, guard) is
/// recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyerProfile {
    pub purpose: Option<Purpose>,
    pub horizon: Option<Horizon>,
    pub school_priority: SchoolPriority,

    /// Named school, only reported when the school priority is high.
    pub school_name: Option<String>,

    pub commute: CommuteTolerance,

    /// Deposit the buyer can put down.
    pub deposit: Option<Decimal>,

    /// Monthly repayment the buyer is comfortable with.
    pub monthly_budget: Option<Decimal>,

    pub cash_buffer: CashBuffer,
    residency: Option<ResidencyStatus>,
    visa_subtype: Option<VisaSubtype>,
    pub target_price: Option<Decimal>,
}

impl Default for BuyerProfile {
    fn default() -> Self {
        Self {
            purpose: None,
            horizon: Some(Horizon::default()),
            school_priority: SchoolPriority::default(),
            school_name: None,
            commute: CommuteTolerance::default(),
            deposit: None,
            monthly_budget: None,
            cash_buffer: CashBuffer::default(),
            residency: None,
            visa_subtype: None,
            target_price: None,
        }
    }
}

impl BuyerProfile {
    pub fn residency(&self) -> Option<ResidencyStatus> {
        self.residency
    }

    pub fn visa_subtype(&self) -> Option<VisaSubtype> {
        self.visa_subtype
    }

    /// Sets the residency status. Any status other than a temporary visa
    /// clears a previously chosen visa subtype.
    pub fn with_residency(
        mut self,
        residency: Option<ResidencyStatus>,
    ) -> Self {
        if residency != Some(ResidencyStatus::TemporaryVisa) {
            self.visa_subtype = None;
        }
        self.residency = residency;
        self
    }

    /// Sets the visa subtype. Ignored unless the status is a temporary visa.
    pub fn with_visa_subtype(
        mut self,
        subtype: Option<VisaSubtype>,
    ) -> Self {
        if self.residency == Some(ResidencyStatus::TemporaryVisa) {
            self.visa_subtype = subtype;
        }
        self
    }

    /// School name with surrounding whitespace removed, if one was given.
    pub fn named_school(&self) -> Option<&str> {
        self.school_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// Live LVR estimate from the target price and deposit.
    pub fn lvr(&self) -> Option<Decimal> {
        compute_lvr(self.target_price, self.deposit)
    }
}
