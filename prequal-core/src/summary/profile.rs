use rust_decimal::Decimal;

use crate::calculations::common::{format_percent, format_whole_dollars};
use crate::calculations::lmi_likely;
use crate::summary::SummaryBuilder;
use crate::{BuyerProfile, ResidencyStatus, SchoolPriority};

/// Builds the summary text for a buyer profile.
///
/// Facts appear in a fixed order: purpose, holding period, school priority,
/// commute tolerance, deposit, monthly budget, cash buffer, residency,
/// target price and the estimated LVR.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use prequal_core::{BuyerProfile, Purpose, summary::build_profile_summary};
///
/// let mut profile = BuyerProfile::default();
/// profile.purpose = Some(Purpose::OwnerOccupier);
/// profile.deposit = Some(dec!(160000));
///
/// let summary = build_profile_summary(&profile);
///
/// assert!(summary.starts_with("Purpose: Owner-occupier\nHolding period: 2-5 years\n"));
/// assert!(summary.contains("Available deposit: $160,000"));
/// ```
pub fn build_profile_summary(profile: &BuyerProfile) -> String {
    let lvr = profile.lvr();

    SummaryBuilder::new()
        .line_opt(profile.purpose, |purpose| format!("Purpose: {purpose}"))
        .line_opt(profile.horizon, |horizon| format!("Holding period: {horizon}"))
        .line(school_line(profile))
        .line(format!("Commute tolerance: {}", profile.commute))
        .line_opt(profile.deposit, |deposit| {
            format!("Available deposit: ${}", format_whole_dollars(deposit))
        })
        .line_opt(profile.monthly_budget, |budget| {
            format!(
                "Monthly repayment capacity: approx ${}/month",
                format_whole_dollars(budget)
            )
        })
        .line(format!("Cash buffer: {}", profile.cash_buffer))
        .line_opt(profile.residency(), |status| residency_line(profile, status))
        .line_opt(profile.target_price, |price| {
            format!("Target price: approx ${}", format_whole_dollars(price))
        })
        .line_opt(lvr, |lvr| lvr_line(lvr, lmi_likely(Some(lvr))))
        .build()
}

fn school_line(profile: &BuyerProfile) -> String {
    match profile.school_priority {
        SchoolPriority::High => match profile.named_school() {
            Some(name) => format!("School priority: High (school: {name})"),
            None => "School priority: High (please name a school)".to_string(),
        },
        other => format!("School priority: {other}"),
    }
}

fn residency_line(
    profile: &BuyerProfile,
    status: ResidencyStatus,
) -> String {
    if status != ResidencyStatus::TemporaryVisa {
        return format!("Residency: {status}");
    }
    match profile.visa_subtype() {
        Some(subtype) => format!("Residency: {status} ({subtype})"),
        None => format!("Residency: {status} (note: work visa or TR)"),
    }
}

fn lvr_line(
    lvr: Decimal,
    lmi: bool,
) -> String {
    let note = if lmi {
        "(>80%, LMI likely)"
    } else {
        "(<=80%, LMI usually not required)"
    };
    format!("Estimated LVR: approx {}% {note}", format_percent(lvr))
}
