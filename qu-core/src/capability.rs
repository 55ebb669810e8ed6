use core::fmt;

/// Capability labels used in errors and logs.
///
/// Each label maps one-to-one to a connector role trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Capability {
    /// Profile/summary map for a symbol.
    Info,
    /// Daily OHLC history with dividend events.
    History,
    /// Dividend-only series.
    Dividends,
    /// Options expiration dates.
    OptionsExpirations,
    /// Fast-info fallback values.
    FastInfo,
}

impl Capability {
    /// Label shown in `Unsupported` errors and log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::History => "history",
            Self::Dividends => "dividends",
            Self::OptionsExpirations => "options-expirations",
            Self::FastInfo => "fast-info",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
