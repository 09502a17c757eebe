//! Buyer-preference selections.
//!
//! Every selection is a closed set of options. Each option has a stable
//! `key` (accepted on the command line and in config files) and a display
//! `label` used in the summary text. Parsing accepts either form,
//! case-insensitively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when text does not name any option of a selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognised {field} '{value}'")]
pub struct SelectionParseError {
    field: &'static str,
    value: String,
}

impl SelectionParseError {
    pub fn new(
        field: &'static str,
        value: &str,
    ) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

macro_rules! selection {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            pub fn key(&self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(
                &self,
                f: &mut fmt::Formatter<'_>,
            ) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = SelectionParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::all()
                    .iter()
                    .find(|option| {
                        option.key().eq_ignore_ascii_case(wanted)
                            || option.label().eq_ignore_ascii_case(wanted)
                    })
                    .copied()
                    .ok_or_else(|| SelectionParseError::new($field, s))
            }
        }
    };
}

selection! {
    /// What the property is for.
    Purpose, "purpose" {
        OwnerOccupier => ("owner-occupier", "Owner-occupier"),
        Investment => ("investment", "Investment"),
        OccupyThenInvest => ("occupy-then-invest", "Owner-occupy 3 years, then invest"),
        InvestThenOccupy => ("invest-then-occupy", "Invest 3 years, then owner-occupy"),
    }
}

selection! {
    /// Expected holding period.
    #[derive(Default)]
    Horizon, "holding period" {
        UnderTwoYears => ("under-2", "<2 years"),
        #[default]
        TwoToFiveYears => ("2-5", "2-5 years"),
        FiveToTenYears => ("5-10", "5-10 years"),
        OverTenYears => ("over-10", ">10 years"),
    }
}

selection! {
    /// How much weight the school catchment carries.
    #[derive(Default)]
    SchoolPriority, "school priority" {
        High => ("high", "High"),
        #[default]
        Medium => ("medium", "Medium"),
        Low => ("low", "Low"),
    }
}

selection! {
    /// Acceptable one-way commute.
    #[derive(Default)]
    CommuteTolerance, "commute tolerance" {
        UnderTwenty => ("under-20", "<20 min"),
        #[default]
        TwentyToForty => ("20-40", "20-40 min"),
        FortyToSixty => ("40-60", "40-60 min"),
        Flexible => ("flexible", "Remote/flexible"),
    }
}

selection! {
    /// Buyer's residency status.
    ResidencyStatus, "residency status" {
        Citizen => ("citizen", "Citizen"),
        PermanentResident => ("pr", "Permanent resident"),
        /// Requires a [`VisaSubtype`] before the summary can be exported.
        TemporaryVisa => ("temporary-visa", "Temporary visa"),
        ForeignBuyer => ("foreign", "Foreign buyer"),
    }
}

selection! {
    /// Kind of temporary visa held.
    VisaSubtype, "visa subtype" {
        Work => ("work", "Work visa"),
        TemporaryResident => ("tr", "TR"),
    }
}

selection! {
    /// Months of living costs held back as a cash-flow safety net.
    #[derive(Default)]
    CashBuffer, "cash buffer" {
        Six => ("6", "6 months"),
        Nine => ("9", "9 months"),
        #[default]
        Twelve => ("12", "12 months"),
        Eighteen => ("18", "18 months"),
    }
}

impl CashBuffer {
    pub fn months(&self) -> u32 {
        match self {
            Self::Six => 6,
            Self::Nine => 9,
            Self::Twelve => 12,
            Self::Eighteen => 18,
        }
    }
}
