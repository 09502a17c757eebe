use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use prequal_core::{
    BuyerProfile, CashBuffer, CommuteTolerance, Horizon, LvrBand, Purpose, ResidencyStatus,
    SchoolPriority, VisaSubtype,
};
use tracing::warn;

use crate::utils::parse_field;

/// Home-loan pre-qualification estimator.
///
/// Estimates borrowing capacity under a serviceability stress test, the
/// LVR of a planned purchase, and builds a summary of buyer preferences to
/// share with a broker. Figures are indicative only.
#[derive(Parser, Debug)]
#[command(name = "prequal", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./prequal.toml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `prequal_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Borrowing capacity, price ceilings and deposit gap.
    Estimate(EstimateArgs),

    /// Borrowing capacity for every scenario in a CSV file.
    Batch {
        /// CSV file with a `label` column and optional
        /// `gross_annual_income`, `other_monthly_debt`, `band`, `deposit`.
        #[arg(short, long)]
        file: PathBuf,
    },

    /// LVR and LMI hint for a target price and deposit.
    Lvr {
        /// Target purchase price.
        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        /// Deposit available.
        #[arg(long, allow_hyphen_values = true)]
        deposit: Option<String>,
    },

    /// Summary of buyer selections, optionally copied or saved.
    Summary(SummaryArgs),

    /// Pre-approval document checklist progress.
    Checklist {
        /// Completed items as 1-based positions, e.g. `1,3`.
        #[arg(long, default_value = "")]
        done: String,
    },

    /// Key terms (LVR, LMI, serviceability, FHOG) and next steps.
    Glossary,

    /// Run the built-in calculator self-tests.
    SelfTest,
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Gross annual income.
    #[arg(long)]
    pub income: Option<String>,

    /// Other debt repayments per month.
    #[arg(long)]
    pub debts: Option<String>,

    /// LVR band to plan around: 80 or 95.
    #[arg(long, default_value = "80")]
    pub band: LvrBand,

    /// Deposit available.
    #[arg(long, allow_hyphen_values = true)]
    pub deposit: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[arg(long)]
    pub purpose: Option<Purpose>,

    /// Holding period: under-2, 2-5, 5-10, over-10.
    #[arg(long, default_value = "2-5")]
    pub horizon: Horizon,

    /// School catchment priority: high, medium, low.
    #[arg(long, default_value = "medium")]
    pub school: SchoolPriority,

    /// Preferred school, reported when the school priority is high.
    #[arg(long)]
    pub school_name: Option<String>,

    /// Commute tolerance: under-20, 20-40, 40-60, flexible.
    #[arg(long, default_value = "20-40")]
    pub commute: CommuteTolerance,

    /// Deposit available.
    #[arg(long, allow_hyphen_values = true)]
    pub deposit: Option<String>,

    /// Comfortable monthly repayment.
    #[arg(long)]
    pub monthly: Option<String>,

    /// Cash buffer in months: 6, 9, 12, 18.
    #[arg(long, default_value = "12")]
    pub buffer: CashBuffer,

    /// Residency status: citizen, pr, temporary-visa, foreign.
    #[arg(long)]
    pub status: Option<ResidencyStatus>,

    /// Temporary visa type: work, tr.
    #[arg(long)]
    pub visa: Option<VisaSubtype>,

    /// Target purchase price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Copy the summary to the system clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Also write the summary to this file.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl SummaryArgs {
    /// Builds the buyer profile from the flags. Unparseable numbers are
    /// treated as absent.
    pub fn to_profile(&self) -> BuyerProfile {
        if self.visa.is_some() && self.status != Some(ResidencyStatus::TemporaryVisa) {
            warn!("--visa only applies with --status temporary-visa; ignored");
        }

        let mut profile = BuyerProfile::default()
            .with_residency(self.status)
            .with_visa_subtype(self.visa);
        profile.purpose = self.purpose;
        profile.horizon = Some(self.horizon);
        profile.school_priority = self.school;
        profile.school_name = self.school_name.clone();
        profile.commute = self.commute;
        profile.deposit = parse_field(self.deposit.as_deref());
        profile.monthly_budget = parse_field(self.monthly.as_deref());
        profile.cash_buffer = self.buffer;
        profile.target_price = parse_field(self.price.as_deref());
        profile
    }
}
