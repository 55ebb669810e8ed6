//! Per-symbol report assembly.

pub(crate) mod dividends;
pub(crate) mod panels;
pub(crate) mod price;
pub(crate) mod quote_table;

use qu_core::QuError;
use thiserror::Error;

use crate::style::{Styled, Tone};

/// Why a symbol produced no report, or a shortened one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The input does not look like a ticker.
    #[error("{0} is not a valid ticker symbol")]
    InvalidSymbol(String),
    /// The provider could not produce a profile.
    #[error("ticker {0} does not exist")]
    NotFound(String),
    /// The profile came back nearly empty.
    #[error("{0} is missing data, possibly delisted")]
    Delisted(String),
    /// No price from the profile or either history fallback.
    #[error("no price available for {0}")]
    NoPrice(String),
    /// No previous close from the profile or fast info.
    #[error("no previous close for {0}")]
    NoPreviousClose(String),
    /// Volume missing or zero; the report stops after the header.
    #[error("no volume for {0}")]
    NoVolume(String),
    /// Average volume missing or zero; the report stops after the header.
    #[error("zero average volume for {0}")]
    NoAverageVolume(String),
}

impl SkipReason {
    /// The line printed for this reason, or `None` when the skip is silent.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        let styled = match self {
            Self::InvalidSymbol(s) => Styled::new(
                format!("Ticker {s} is not a valid ticker symbol... Shamefull!"),
                Tone::Warn,
            ),
            Self::NotFound(s) => Styled::new(format!("NOTE: Ticker {s} does not exist!"), Tone::BadBold),
            Self::Delisted(s) => Styled::new(
                format!("NOTE: {s} missing data! Possibly delisted!!"),
                Tone::BadBold,
            ),
            Self::NoAverageVolume(s) => Styled::plain(format!("Zero Average Volume: skipping:  {s}")),
            Self::NoPrice(_) | Self::NoPreviousClose(_) | Self::NoVolume(_) => return None,
        };
        Some(styled.to_string())
    }
}

/// Rendered output for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Upper-cased symbol.
    pub symbol: String,
    /// Output lines, without trailing newlines.
    pub lines: Vec<String>,
    /// Set when rendering stopped early; its notice follows the lines.
    pub cut_short: Option<SkipReason>,
}

impl Report {
    pub(crate) fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            lines: Vec::new(),
            cut_short: None,
        }
    }

    pub(crate) fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append a multi-line block line by line.
    pub(crate) fn push_block(&mut self, block: &str) {
        self.lines.extend(block.lines().map(str::to_string));
    }

    pub(crate) fn cut(mut self, reason: SkipReason) -> Self {
        self.cut_short = Some(reason);
        self
    }
}

/// Result of processing one symbol.
#[derive(Debug)]
pub enum Outcome {
    /// A full or shortened report.
    Rendered(Report),
    /// Nothing rendered.
    Skipped(SkipReason),
    /// No price history at all; the run stops.
    Fatal(QuError),
}
