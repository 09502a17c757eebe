use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use crate::summary::build_profile_summary;
use crate::{BuyerProfile, ResidencyStatus, VisaSubtype};

/// Errors raised by a [`ClipboardSink`] while writing the summary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The clipboard program or device could not be used.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// Writing the text failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for an exported summary, normally the system clipboard.
pub trait ClipboardSink {
    fn write_text(
        &mut self,
        text: &str,
    ) -> Result<(), ExportError>;
}

/// Why a copy request was refused before reaching the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A temporary visa is selected but its subtype is not.
    VisaSubtypeRequired,
}

impl fmt::Display for BlockReason {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::VisaSubtypeRequired => {
                f.write_str("select a temporary visa type (work visa or TR) first")
            }
        }
    }
}

/// Result of a copy request that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The summary was written to the sink.
    Copied { summary: String },
    /// The request was refused; the sink was not touched.
    Blocked(BlockReason),
}

/// True when the residency status is a temporary visa and no subtype has
/// been chosen.
pub fn visa_subtype_required(
    status: Option<ResidencyStatus>,
    subtype: Option<VisaSubtype>,
) -> bool {
    status == Some(ResidencyStatus::TemporaryVisa) && subtype.is_none()
}

/// Copies the profile summary to `sink`.
///
/// The visa-subtype guard is checked first; when it holds nothing is
/// written and [`CopyOutcome::Blocked`] is returned. The profile is only
/// read, so a failed write leaves it exactly as it was.
///
/// # Errors
///
/// Returns [`ExportError`] when the sink fails.
pub fn copy_summary<S>(
    profile: &BuyerProfile,
    sink: &mut S,
) -> Result<CopyOutcome, ExportError>
where
    S: ClipboardSink + ?Sized,
{
    if visa_subtype_required(profile.residency(), profile.visa_subtype()) {
        warn!("Copy refused: temporary visa selected without a subtype");
        return Ok(CopyOutcome::Blocked(BlockReason::VisaSubtypeRequired));
    }

    let summary = build_profile_summary(profile);
    sink.write_text(&summary)?;
    info!(lines = summary.lines().count(), "Summary copied");

    Ok(CopyOutcome::Copied { summary })
}
