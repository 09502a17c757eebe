//! Plain-language terms and next steps shown alongside the estimates.
//!
//! Figures quoted in the definitions (stress buffer, grant amount) come from
//! the active [`AffordabilityConfig`], so the text never disagrees with the
//! numbers the calculators used.

use std::fmt;

use rust_decimal::Decimal;

use crate::AffordabilityConfig;
use crate::calculations::common::format_whole_dollars;
use crate::calculations::lvr::lmi_threshold;

/// One glossary term and its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryEntry {
    pub term: &'static str,
    pub definition: String,
}

impl fmt::Display for GlossaryEntry {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.term, self.definition)
    }
}

/// Glossary entries in display order: LVR, LMI, serviceability, FHOG.
///
/// # Examples
///
/// ```
/// use prequal_core::AffordabilityConfig;
/// use prequal_core::glossary::glossary;
///
/// let entries = glossary(&AffordabilityConfig::default());
///
/// assert_eq!(entries.len(), 4);
/// assert!(entries[3].definition.contains("$10,000"));
/// ```
pub fn glossary(config: &AffordabilityConfig) -> Vec<GlossaryEntry> {
    let threshold = lmi_threshold();
    let buffer = (config.stress_buffer * Decimal::ONE_HUNDRED).normalize();

    vec![
        GlossaryEntry {
            term: "LVR (Loan-to-Value Ratio)",
            definition: format!(
                "loan amount / property value x 100%, using the lower of the bank \
                 valuation and the contract price. The common threshold is {threshold}%."
            ),
        },
        GlossaryEntry {
            term: "LMI (Lenders Mortgage Insurance)",
            definition: format!(
                "usually required when the LVR is above {threshold}%, typically at \
                 90-95%. It protects the lender; the premium can be paid upfront or \
                 added to the loan."
            ),
        },
        GlossaryEntry {
            term: "Serviceability",
            definition: format!(
                "banks stress-test repayments at the loan rate plus a {buffer}% buffer. \
                 Your income must cover principal, interest and existing debts."
            ),
        },
        GlossaryEntry {
            term: "FHOG and stamp duty",
            definition: format!(
                "eligible new homes in Victoria receive a First Home Owner Grant of \
                 ${}. First home buyers who will live in the property can get a stamp \
                 duty exemption or concession below the price thresholds; check the \
                 latest State Revenue Office guidance.",
                format_whole_dollars(config.first_home_grant)
            ),
        },
    ]
}

/// Suggested actions once the summary is ready, in order.
pub fn next_steps() -> &'static [&'static str] {
    &[
        "Share the summary with a mortgage broker and confirm pre-approval, \
         rate and whether LMI applies.",
        "Narrow down 2-3 suburbs by school, commute and budget, then build a \
         top-10 inspection list.",
        "Review the Section 32 vendor statement and the government due \
         diligence checklist before signing.",
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn entries_follow_display_order() {
        let terms: Vec<&str> = glossary(&AffordabilityConfig::default())
            .iter()
            .map(|entry| entry.term)
            .collect();

        assert_eq!(
            terms,
            vec![
                "LVR (Loan-to-Value Ratio)",
                "LMI (Lenders Mortgage Insurance)",
                "Serviceability",
                "FHOG and stamp duty",
            ]
        );
    }

    #[test]
    fn lvr_and_lmi_quote_the_threshold() {
        let entries = glossary(&AffordabilityConfig::default());

        assert!(entries[0].definition.ends_with("The common threshold is 80%."));
        assert!(entries[1].definition.starts_with("usually required when the LVR is above 80%"));
    }

    #[test]
    fn figures_follow_configuration() {
        let config = AffordabilityConfig {
            stress_buffer: dec!(0.025),
            first_home_grant: dec!(12500),
            ..AffordabilityConfig::default()
        };

        let entries = glossary(&config);

        assert!(entries[2].definition.contains("plus a 2.5% buffer"));
        assert!(entries[3].definition.contains("Grant of $12,500."));
    }

    #[test]
    fn default_buffer_is_quoted_as_whole_percent() {
        let entries = glossary(&AffordabilityConfig::default());

        assert!(entries[2].definition.contains("plus a 3% buffer"));
    }

    #[test]
    fn entry_display_joins_term_and_definition() {
        let entry = GlossaryEntry {
            term: "LVR",
            definition: "loan / value".to_string(),
        };

        assert_eq!(entry.to_string(), "LVR: loan / value");
    }

    #[test]
    fn three_next_steps() {
        let steps = next_steps();

        assert_eq!(steps.len(), 3);
        assert!(steps[2].contains("Section 32"));
    }
}
