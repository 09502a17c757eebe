//! Plain-text summary of the buyer's selections.
//!
//! A summary is an ordered list of present facts, one per line, joined with
//! a single `\n` and no trailing separator. Optional facts are left out
//! entirely rather than emitted as empty lines.

mod export;
mod profile;

pub use export::{
    BlockReason, ClipboardSink, CopyOutcome, ExportError, copy_summary, visa_subtype_required,
};
pub use profile::build_profile_summary;

/// Joins summary lines with a single newline.
///
/// # Examples
///
/// ```
/// use prequal_core::summary::assemble_summary;
///
/// assert_eq!(assemble_summary(Vec::<String>::new()), "");
/// assert_eq!(assemble_summary(["Only"]), "Only");
/// assert_eq!(assemble_summary(["A", "B"]), "A\nB");
/// ```
pub fn assemble_summary<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary = String::new();
    for (i, line) in lines.into_iter().enumerate() {
        if i > 0 {
            summary.push('\n');
        }
        summary.push_str(line.as_ref());
    }
    summary
}

/// Collects summary lines, skipping facts whose source is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryBuilder {
    lines: Vec<String>,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a line unconditionally.
    pub fn line(
        mut self,
        text: impl Into<String>,
    ) -> Self {
        self.lines.push(text.into());
        self
    }

    /// Adds a line only when `condition` holds. The text is not built
    /// otherwise.
    pub fn line_if<F>(
        self,
        condition: bool,
        text: F,
    ) -> Self
    where
        F: FnOnce() -> String,
    {
        if condition { self.line(text()) } else { self }
    }

    /// Adds a line formatted from `value` when it is present.
    pub fn line_opt<T, F>(
        self,
        value: Option<T>,
        format: F,
    ) -> Self
    where
        F: FnOnce(T) -> String,
    {
        match value {
            Some(value) => self.line(format(value)),
            None => self,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn build(&self) -> String {
        assemble_summary(&self.lines)
    }
}
