use core::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::QuError;

/// Allowed ticker syntax: optional leading `^` (indices), word characters,
/// and at most one internal hyphen (`BRK-B`, `BTC-USD`).
static TICKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\^?\w+(?:-\w+)?$").expect("ticker pattern compiles"));

/// A syntactically valid ticker symbol, upper-cased for display and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Validate `raw` against the ticker pattern.
    ///
    /// # Errors
    /// Returns `QuError::InvalidArg` when the input does not look like a ticker.
    pub fn new(raw: &str) -> Result<Self, QuError> {
        if is_valid_ticker(raw) {
            Ok(Self(raw.to_uppercase()))
        } else {
            Err(QuError::InvalidArg(format!("invalid ticker symbol: {raw}")))
        }
    }

    /// Borrow the symbol as `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Returns true when `raw` matches the accepted ticker syntax.
#[must_use]
pub fn is_valid_ticker(raw: &str) -> bool {
    TICKER_RE.is_match(raw)
}
