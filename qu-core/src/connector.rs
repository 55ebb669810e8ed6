use async_trait::async_trait;

use crate::{Dividend, FastInfo, HistoryResponse, QuError, Range, RawInfo, Symbol};

/// Focused role trait for connectors that provide the profile/summary map.
#[async_trait]
pub trait InfoProvider: Send + Sync {
    /// Fetch the raw profile map for `symbol`.
    async fn info(&self, symbol: &Symbol) -> Result<RawInfo, QuError>;
}

/// Focused role trait for connectors that provide daily history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch daily candles and dividend events over `range`.
    async fn history(&self, symbol: &Symbol, range: Range) -> Result<HistoryResponse, QuError>;
}

/// Focused role trait for connectors that provide a dividend-only series.
#[async_trait]
pub trait DividendsProvider: Send + Sync {
    /// Fetch every known dividend for `symbol`, oldest first.
    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, QuError>;
}

/// Focused role trait for connectors that list option expirations.
#[async_trait]
pub trait OptionsExpirationsProvider: Send + Sync {
    /// Fetch available option expiration dates (unix seconds).
    async fn options_expirations(&self, symbol: &Symbol) -> Result<Vec<i64>, QuError>;
}

/// Focused role trait for connectors that provide fast-info fallbacks.
#[async_trait]
pub trait FastInfoProvider: Send + Sync {
    /// Fetch fallback open/last/previous-close values.
    async fn fast_info(&self, symbol: &Symbol) -> Result<FastInfo, QuError>;
}

/// A data connector. Capabilities are discovered through the `as_*_provider`
/// accessors; the defaults advertise nothing.
pub trait QuConnector: Send + Sync {
    /// Stable connector name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Human-readable vendor name.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Profile/summary capability.
    fn as_info_provider(&self) -> Option<&dyn InfoProvider> {
        None
    }

    /// Daily history capability.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// Dividend-only series capability.
    fn as_dividends_provider(&self) -> Option<&dyn DividendsProvider> {
        None
    }

    /// Options expirations capability.
    fn as_options_expirations_provider(&self) -> Option<&dyn OptionsExpirationsProvider> {
        None
    }

    /// Fast-info capability.
    fn as_fast_info_provider(&self) -> Option<&dyn FastInfoProvider> {
        None
    }
}
