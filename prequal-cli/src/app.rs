//! Command handlers.
//!
//! Each command renders plain text to the supplied writer so the handlers
//! can be driven from tests without spawning the binary.

use std::io::Write;

use anyhow::{Context, Result};
use prequal_core::calculations::common::{format_percent, format_whole_dollars};
use prequal_core::checklist::DocumentChecklist;
use prequal_core::glossary::{GlossaryEntry, glossary, next_steps};
use prequal_core::self_test::{SelfTestReport, run_self_tests};
use prequal_core::summary::{
    ClipboardSink, CopyOutcome, SummaryBuilder, build_profile_summary, copy_summary,
};
use prequal_core::{
    AffordabilityConfig, AffordabilityInput, BuyerProfile, LvrBand, compute_affordability,
    compute_deposit_gap, compute_lvr, lmi_likely,
};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::cli::{Commands, EstimateArgs, SummaryArgs};
use crate::clipboard::{CommandClipboard, FileSink};
use crate::config::AppConfig;
use crate::scenarios::{self, Scenario};
use crate::utils::{parse_checklist_indices, parse_field};

/// Shown instead of an empty summary.
pub const SUMMARY_PLACEHOLDER: &str = "Nothing selected yet.";

/// Shown when the LVR cannot be computed.
pub const LVR_PLACEHOLDER: &str = "Estimated LVR: enter a target price and deposit";

/// Runs one command, writing its output to `out`.
///
/// Returns `Ok(false)` when the command completed but did not succeed: a
/// failing self-test, or a summary copy that was refused or failed.
pub fn run(
    command: &Commands,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Commands::Estimate(args) => {
            let text = estimate(args, &config.affordability);
            writeln!(out, "{text}")?;
            Ok(true)
        }
        Commands::Batch { file } => {
            let scenarios = scenarios::load_from_file(file)?;
            debug!(count = scenarios.len(), "loaded scenarios");
            writeln!(out, "{}", render_batch(&scenarios, &config.affordability))?;
            Ok(true)
        }
        Commands::Lvr { price, deposit } => {
            let text = render_lvr(parse_field(price.as_deref()), parse_field(deposit.as_deref()));
            writeln!(out, "{text}")?;
            Ok(true)
        }
        Commands::Summary(args) => summary(args, config, out),
        Commands::Checklist { done } => {
            let checklist = checklist_with_done(done)?;
            writeln!(out, "{}", render_checklist(&checklist))?;
            Ok(true)
        }
        Commands::Glossary => {
            let text = render_glossary(&glossary(&config.affordability), next_steps());
            writeln!(out, "{text}")?;
            Ok(true)
        }
        Commands::SelfTest => {
            let report = run_self_tests();
            writeln!(out, "{}", render_self_tests(&report))?;
            Ok(report.all_passed())
        }
    }
}

fn estimate(
    args: &EstimateArgs,
    config: &AffordabilityConfig,
) -> String {
    let input = AffordabilityInput {
        gross_annual_income: parse_field(args.income.as_deref()),
        other_monthly_debt: parse_field(args.debts.as_deref()),
    };
    render_estimate(&input, config, args.band, parse_field(args.deposit.as_deref()))
}

/// Affordability report for one borrower.
///
/// An absent deposit is treated as zero for the deposit gap.
pub fn render_estimate(
    input: &AffordabilityInput,
    config: &AffordabilityConfig,
    band: LvrBand,
    deposit: Option<Decimal>,
) -> String {
    let result = compute_affordability(input, config);
    let gap = compute_deposit_gap(&result, band, deposit.unwrap_or(Decimal::ZERO));

    SummaryBuilder::new()
        .line(format!(
            "Assessment rate: {}% p.a. over {} years",
            format_percent(config.test_rate() * Decimal::ONE_HUNDRED),
            config.term_years
        ))
        .line(format!(
            "Max monthly repayment: ${}",
            format_whole_dollars(result.max_monthly_repayment)
        ))
        .line(format!(
            "Loan ceiling (estimate): ${}",
            format_whole_dollars(result.loan_ceiling)
        ))
        .line(format!(
            "Price ceiling at 80% LVR: ${}",
            format_whole_dollars(result.price_ceiling_80)
        ))
        .line(format!(
            "Price ceiling at 95% LVR: ${}",
            format_whole_dollars(result.price_ceiling_95)
        ))
        .line(format!("LVR band: {band}"))
        .line(format!(
            "Required deposit (excl. stamp duty and fees): ${}",
            format_whole_dollars(gap.required_deposit)
        ))
        .line_if(gap.is_sufficient(), || {
            "Deposit gap: none, your deposit covers this price".to_string()
        })
        .line_if(!gap.is_sufficient(), || {
            format!(
                "Deposit gap: ${} below target (short ${} of deposit)",
                format_whole_dollars(gap.gap),
                format_whole_dollars(gap.deposit_shortfall)
            )
        })
        .line(format!(
            "First Home Owner Grant (VIC, new homes): up to ${}",
            format_whole_dollars(config.first_home_grant)
        ))
        .line("Indicative only. LMI, stamp duty and bank policy change the reachable price.")
        .build()
}

fn band_short(band: LvrBand) -> &'static str {
    match band {
        LvrBand::Eighty => "80%",
        LvrBand::NinetyFive => "95%",
    }
}

/// One table row per scenario. The gap column shows `-` when the row has
/// no deposit.
pub fn render_batch(
    scenarios: &[Scenario],
    config: &AffordabilityConfig,
) -> String {
    let header = format!(
        "{:<20} {:>12} {:>12} {:>12} {:>5} {:>12}",
        "label", "loan", "price@80%", "price@95%", "band", "gap"
    );
    let rows = scenarios.iter().map(|scenario| {
        let result = compute_affordability(&scenario.input, config);
        let gap = match scenario.deposit {
            None => "-".to_string(),
            Some(deposit) => {
                let gap = compute_deposit_gap(&result, scenario.band, deposit);
                if gap.is_sufficient() {
                    "none".to_string()
                } else {
                    format_whole_dollars(gap.gap)
                }
            }
        };
        format!(
            "{:<20} {:>12} {:>12} {:>12} {:>5} {:>12}",
            scenario.label,
            format_whole_dollars(result.loan_ceiling),
            format_whole_dollars(result.price_ceiling_80),
            format_whole_dollars(result.price_ceiling_95),
            band_short(scenario.band),
            gap
        )
    });

    std::iter::once(header).chain(rows).collect::<Vec<_>>().join("\n")
}

/// LVR line with the LMI hint, or [`LVR_PLACEHOLDER`] when undefined.
pub fn render_lvr(
    price: Option<Decimal>,
    deposit: Option<Decimal>,
) -> String {
    let Some(lvr) = compute_lvr(price, deposit) else {
        return LVR_PLACEHOLDER.to_string();
    };
    let hint = if lmi_likely(Some(lvr)) {
        "above 80%, LMI likely"
    } else {
        "80% or below, LMI usually not required"
    };
    format!("Estimated LVR: {}% ({hint})", format_percent(lvr))
}

fn summary(
    args: &SummaryArgs,
    config: &AppConfig,
    out: &mut impl Write,
) -> Result<bool> {
    let profile = args.to_profile();
    let text = build_profile_summary(&profile);
    if text.is_empty() {
        writeln!(out, "{SUMMARY_PLACEHOLDER}")?;
    } else {
        writeln!(out, "{text}")?;
    }

    let mut success = true;
    if args.copy {
        let mut clipboard = CommandClipboard::new(&config.clipboard);
        success &= export(&profile, &mut clipboard, "clipboard", out)?;
    }
    if let Some(path) = &args.out {
        let mut file = FileSink::new(path);
        let destination = path.display().to_string();
        success &= export(&profile, &mut file, &destination, out)?;
    }
    Ok(success)
}

/// Sends the summary to `sink` and reports the outcome. A refused or
/// failed copy is reported to the user rather than returned as an error.
pub fn export(
    profile: &BuyerProfile,
    sink: &mut dyn ClipboardSink,
    destination: &str,
    out: &mut impl Write,
) -> Result<bool> {
    match copy_summary(profile, sink) {
        Ok(CopyOutcome::Copied { .. }) => {
            writeln!(out, "Summary copied to {destination}.")?;
            Ok(true)
        }
        Ok(CopyOutcome::Blocked(reason)) => {
            writeln!(out, "Copy refused: {reason}.")?;
            Ok(false)
        }
        Err(err) => {
            warn!(%err, destination, "summary export failed");
            writeln!(
                out,
                "Could not copy the summary ({err}). Select the text above and copy it manually."
            )?;
            Ok(false)
        }
    }
}

fn checklist_with_done(done: &str) -> Result<DocumentChecklist> {
    let checklist = DocumentChecklist::default();
    let mut indices =
        parse_checklist_indices(done, checklist.len()).context("invalid --done list")?;
    indices.sort_unstable();
    indices.dedup();
    Ok(indices
        .into_iter()
        .fold(checklist, |checklist, index| checklist.toggle(index)))
}

/// Numbered checklist with a progress line.
pub fn render_checklist(checklist: &DocumentChecklist) -> String {
    let mut builder = SummaryBuilder::new();
    for (position, item) in checklist.items().iter().enumerate() {
        let mark = if item.done { "x" } else { " " };
        builder = builder.line(format!("[{mark}] {}. {}", position + 1, item.label));
    }
    builder.line(checklist.progress_label()).build()
}

/// Glossary entries, a blank line, then the numbered next steps.
pub fn render_glossary(
    entries: &[GlossaryEntry],
    steps: &[&str],
) -> String {
    let mut builder = entries
        .iter()
        .fold(SummaryBuilder::new(), |builder, entry| builder.line(entry.to_string()))
        .line("")
        .line("Next steps:");
    for (position, step) in steps.iter().enumerate() {
        builder = builder.line(format!("{}. {step}", position + 1));
    }
    builder.build()
}

/// One line per case, then a totals line.
pub fn render_self_tests(report: &SelfTestReport) -> String {
    report
        .cases()
        .iter()
        .map(ToString::to_string)
        .chain(std::iter::once(format!(
            "{} passed, {} failed",
            report.passed(),
            report.failed()
        )))
        .collect::<Vec<_>>()
        .join("\n")
}
