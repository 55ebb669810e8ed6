//! Deterministic fixture connector for qu tests.
//!
//! Fixture symbols:
//! - `AAPL`: complete equity profile, options, quarterly dividends.
//! - `KO`: equity without dividend rate/yield, sixteen dividends, no bid/ask.
//! - `SPY`: fund with NAV; price and previous close come from fallbacks.
//! - `NOVOL`, `NOAVG`: `AAPL` without volume / average volume.
//! - `NOPRICE`: no price in the profile or the history metadata.
//! - `NOPREV`: no previous close anywhere.
//! - `CRASH`: no price; the max history fails and the one-month history is empty.
//! - `DUD`: degenerate two-key profile.
//! - `FAIL`: every call fails with a connector error.
//!
//! Any other symbol is reported as not found.
#![recursion_limit = "256"]

use async_trait::async_trait;
use qu_core::connector::{
    DividendsProvider, FastInfoProvider, HistoryProvider, InfoProvider, OptionsExpirationsProvider,
    QuConnector,
};
use qu_core::{Dividend, FastInfo, HistoryResponse, QuError, Range, RawInfo, Symbol};

mod fixtures;

/// Mock connector for CI-safe tests. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name reported through [`QuConnector::name`].
    pub const NAME: &'static str = "qu-mock";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: String) -> QuError {
        QuError::not_found(what)
    }

    fn maybe_fail(symbol: &Symbol, capability: &'static str) -> Result<(), QuError> {
        if symbol.as_str() == "FAIL" {
            return Err(QuError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

impl QuConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        Some(self as &dyn InfoProvider)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        Some(self as &dyn DividendsProvider)
    }

    fn as_options_expirations_provider(&self) -> Option<&dyn OptionsExpirationsProvider> {
        Some(self as &dyn OptionsExpirationsProvider)
    }

    fn as_fast_info_provider(&self) -> Option<&dyn FastInfoProvider> {
        Some(self as &dyn FastInfoProvider)
    }
}

#[async_trait]
impl InfoProvider for MockConnector {
    async fn info(&self, symbol: &Symbol) -> Result<RawInfo, QuError> {
        Self::maybe_fail(symbol, "info")?;
        fixtures::info::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(format!("profile for {symbol}")))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, symbol: &Symbol, range: Range) -> Result<HistoryResponse, QuError> {
        Self::maybe_fail(symbol, "history")?;
        if symbol.as_str() == "CRASH" && range == Range::Max {
            return Err(QuError::connector(Self::NAME, "server error 500: history for CRASH"));
        }
        fixtures::history::by_symbol(symbol.as_str())
            .ok_or_else(|| Self::not_found(format!("history for {symbol}")))
    }
}

#[async_trait]
impl DividendsProvider for MockConnector {
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, QuError> {
        Self::maybe_fail(symbol, "dividends")?;
        Ok(fixtures::history::dividends_by_symbol(symbol.as_str()))
    }
}

#[async_trait]
impl OptionsExpirationsProvider for MockConnector {
    async fn options_expirations(&self, symbol: &Symbol) -> Result<Vec<i64>, QuError> {
        Self::maybe_fail(symbol, "options-expirations")?;
        Ok(fixtures::options::expirations_by_symbol(symbol.as_str()))
    }
}

#[async_trait]
impl FastInfoProvider for MockConnector {
    async fn fast_info(&self, symbol: &Symbol) -> Result<FastInfo, QuError> {
        Self::maybe_fail(symbol, "fast-info")?;
        Ok(fixtures::history::fast_info_by_symbol(symbol.as_str()))
    }
}
