//! History, dividend, and fast-info types returned by connectors.

use chrono::{DateTime, Utc};

/// Lookback window for a daily history request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Range {
    /// Last 5 trading days.
    D5,
    /// Last month.
    M1,
    /// Full available history.
    Max,
}

impl Range {
    /// Provider-facing range token (`5d`, `1mo`, `max`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::Max => "max",
        }
    }
}

/// One daily OHLC bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    /// Bar timestamp.
    pub ts: DateTime<Utc>,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
}

/// A single cash dividend event.
#[derive(Debug, Clone, PartialEq)]
pub struct Dividend {
    /// Ex-dividend timestamp.
    pub ts: DateTime<Utc>,
    /// Amount per share in the listing currency.
    pub amount: f64,
}

/// Metadata attached to a history response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryMeta {
    /// Last regular-session price reported alongside the series.
    pub regular_market_price: Option<f64>,
    /// Previous close reported alongside the series.
    pub previous_close: Option<f64>,
}

/// Daily history with dividend events, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryResponse {
    /// Daily candles.
    pub candles: Vec<Candle>,
    /// Dividend events within the requested window.
    pub dividends: Vec<Dividend>,
    /// Series metadata, if the provider sent any.
    pub meta: Option<HistoryMeta>,
}

impl HistoryResponse {
    /// Close of the most recent candle.
    #[must_use]
    pub fn last_close(&self) -> Option<f64> {
        self.candles.last().map(|c| c.close)
    }

    /// True when at least one non-zero dividend was paid in the window.
    #[must_use]
    pub fn has_dividends(&self) -> bool {
        self.dividends.iter().any(|d| d.amount != 0.0)
    }
}

/// Cheap fallback values used when the profile map lacks them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FastInfo {
    /// Today's open.
    pub open: Option<f64>,
    /// Previous session close.
    pub previous_close: Option<f64>,
}
