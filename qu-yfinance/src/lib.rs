//! qu-yfinance
//!
//! Connector that implements `QuConnector` on top of `yfinance-rs`. Daily
//! history, dividends, quotes and option expirations go through `YfClient`;
//! the profile map comes from a direct quoteSummary request because
//! yfinance-rs has no model for most of its fields.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;
mod builder;
mod config;
mod convert;
mod wire;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfHistory, YfOptions, YfQuotes, YfSummary};
use async_trait::async_trait;
use qu_core::{
    Dividend, FastInfo, HistoryMeta, HistoryResponse, QuError, Range, RawInfo, Symbol,
    connector::{
        DividendsProvider, FastInfoProvider, HistoryProvider, InfoProvider, OptionsExpirationsProvider,
        QuConnector,
    },
};
use tracing::debug;
use yfinance_rs as yf;

pub use builder::YfConnectorBuilder;
pub use config::{DEFAULT_BASE_URL, DEFAULT_COOKIE_URL, DEFAULT_USER_AGENT, YfConfig};

/// Public connector type. Production users construct it with
/// [`YfConnector::builder`] or [`YfConnector::new_default`].
pub struct YfConnector {
    history: Arc<dyn YfHistory>,
    quotes: Arc<dyn YfQuotes>,
    options: Arc<dyn YfOptions>,
    summary: Arc<dyn YfSummary>,
}

impl YfConnector {
    /// Stable connector name.
    pub const NAME: &'static str = "qu-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("delisted")
    }

    fn normalize_error(e: QuError, what: &str) -> QuError {
        match e {
            QuError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    QuError::not_found(what.to_string())
                } else {
                    QuError::connector(Self::NAME, msg)
                }
            }
            QuError::Other(msg) => QuError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Builder seeded with [`YfConfig::default`].
    #[must_use]
    pub fn builder() -> YfConnectorBuilder {
        YfConnectorBuilder::default()
    }

    /// Build with defaults overridden from the environment.
    ///
    /// # Errors
    /// Returns an error if the environment holds an invalid setting or the
    /// HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, QuError> {
        Self::builder().with_config(YfConfig::from_env()?).build()
    }

    pub(crate) fn from_real(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared) as Arc<dyn YfHistory>,
            quotes: Arc::clone(&shared) as Arc<dyn YfQuotes>,
            options: Arc::clone(&shared) as Arc<dyn YfOptions>,
            summary: shared,
        }
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            quotes: adapter.clone_arc_quotes(),
            options: adapter.clone_arc_options(),
            summary: adapter.clone_arc_summary(),
        }
    }

    async fn daily(&self, symbol: &Symbol, range: Range) -> Result<yf::HistoryResponse, QuError> {
        let what = format!("history for {symbol}");
        self.history
            .fetch_full(symbol.as_str(), convert::daily_request(range))
            .await
            .map_err(|e| Self::normalize_error(e, &what))
    }

    async fn quote(&self, symbol: &Symbol) -> Result<yf::core::Quote, QuError> {
        let what = format!("quote for {symbol}");
        self.quotes
            .fetch(&[symbol.to_string()])
            .await
            .map_err(|e| Self::normalize_error(e, &what))?
            .into_iter()
            .next()
            .ok_or_else(|| QuError::not_found(what))
    }

    /// Price and previous close from the quote endpoint; `None` when it fails.
    async fn quote_meta(&self, symbol: &Symbol) -> Option<HistoryMeta> {
        self.quote(symbol)
            .await
            .and_then(|q| convert::quote_meta(&q))
            .inspect_err(|e| debug!(%symbol, error = %e, "quote unavailable"))
            .ok()
    }
}

impl QuConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
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
impl InfoProvider for YfConnector {
    async fn info(&self, symbol: &Symbol) -> Result<RawInfo, QuError> {
        let what = format!("profile for {symbol}");
        let mut raw = self
            .summary
            .quote_summary(symbol.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &what))?;

        // A delisted symbol must stay degenerate for the caller to detect it.
        if raw.is_degenerate() || raw.get("trailingPegRatio").is_some() {
            return Ok(raw);
        }
        match self.summary.trailing_peg(symbol.as_str()).await {
            Ok(Some(peg)) => raw.insert("trailingPegRatio", peg.into()),
            Ok(None) => {}
            Err(e) => debug!(%symbol, error = %e, "trailing peg unavailable"),
        }
        Ok(raw)
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    async fn history(&self, symbol: &Symbol, range: Range) -> Result<HistoryResponse, QuError> {
        let raw = self.daily(symbol, range).await?;
        let candles = convert::candles(&raw.candles)?;
        let dividends = convert::dividends(&raw.actions)?;
        Ok(HistoryResponse {
            candles,
            dividends,
            meta: self.quote_meta(symbol).await,
        })
    }
}

#[async_trait]
impl DividendsProvider for YfConnector {
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, QuError> {
        let raw = self.daily(symbol, Range::Max).await?;
        convert::dividends(&raw.actions)
    }
}

#[async_trait]
impl OptionsExpirationsProvider for YfConnector {
    async fn options_expirations(&self, symbol: &Symbol) -> Result<Vec<i64>, QuError> {
        let what = format!("options expirations for {symbol}");
        self.options
            .expirations(symbol.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &what))
    }
}

#[async_trait]
impl FastInfoProvider for YfConnector {
    async fn fast_info(&self, symbol: &Symbol) -> Result<FastInfo, QuError> {
        let raw = self.daily(symbol, Range::D5).await?;
        let candles = convert::candles(&raw.candles)?;

        let mut bars = candles.iter().rev();
        let last = bars.next();
        let previous_close = match bars.next() {
            Some(prior) => Some(prior.close),
            None => self.quote_meta(symbol).await.and_then(|m| m.previous_close),
        };
        Ok(FastInfo {
            open: last.map(|c| c.open),
            previous_close,
        })
    }
}
