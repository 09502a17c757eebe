mod affordability;
mod config;
mod lvr_band;
mod profile;
mod selections;

pub use affordability::{AffordabilityInput, AffordabilityResult, DepositGap};
pub use config::{AffordabilityConfig, AffordabilityConfigError};
pub use lvr_band::LvrBand;
pub use profile::BuyerProfile;
pub use selections::{
    CashBuffer, CommuteTolerance, Horizon, Purpose, ResidencyStatus, SchoolPriority,
    SelectionParseError, VisaSubtype,
};
