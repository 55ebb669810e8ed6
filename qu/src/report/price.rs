//! Price discovery and the header lines.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use qu_core::{HistoryResponse, QuError, Range, Symbol, TickerInfo};
use tracing::{debug, warn};

use crate::Qu;
use crate::format::{py_float, round_to, signed};
use crate::style::{color_bias, color_trigger};

fn nonzero(v: f64) -> bool {
    v != 0.0
}

/// Price found (or not), plus the max-range history if it was fetched.
pub(crate) struct PriceLookup {
    pub current: Option<f64>,
    pub max_history: Option<HistoryResponse>,
}

/// Walk the price fallbacks: profile, max-history metadata, then one month
/// of closes when the max history fails.
///
/// # Errors
/// Returns the fatal error when the one-month fallback fails or is empty.
pub(crate) async fn discover(qu: &Qu, symbol: &Symbol, info: &TickerInfo) -> Result<PriceLookup, QuError> {
    if let Some(p) = info.current_price.filter(|p| nonzero(*p)) {
        return Ok(PriceLookup {
            current: Some(p),
            max_history: None,
        });
    }

    match qu.history(symbol, Range::Max).await {
        Ok(history) => {
            let current = history
                .meta
                .as_ref()
                .and_then(|m| m.regular_market_price)
                .filter(|p| nonzero(*p));
            debug!(%symbol, ?current, "price from history metadata");
            Ok(PriceLookup {
                current,
                max_history: Some(history),
            })
        }
        Err(e) => {
            warn!(%symbol, error = %e, "max history unavailable, trying one month");
            let month = qu.history(symbol, Range::M1).await?;
            let close = month
                .last_close()
                .ok_or_else(|| QuError::Data(format!("no price history for {symbol}")))?;
            Ok(PriceLookup {
                current: Some(close).filter(|p| nonzero(*p)),
                max_history: None,
            })
        }
    }
}

/// Rounded price and the change against the previous close.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Change {
    pub current: f64,
    pub change: f64,
    pub change_pct: f64,
}

impl Change {
    pub fn new(price: f64, previous: f64) -> Self {
        let current = round_to(price, 5);
        Self {
            current,
            change: round_to(current - previous, 4),
            change_pct: round_to(100.0 * (current - previous) / previous, 2),
        }
    }
}

/// `SYM: name (country:exchange) || price: change : pct`, the time and the
/// sector line.
pub(crate) fn header_lines(
    symbol: &Symbol,
    info: &TickerInfo,
    change: Change,
    now: DateTime<Utc>,
    tz: Tz,
) -> [String; 3] {
    let or_none = |v: &Option<String>| v.clone().unwrap_or_else(|| "None".to_string());
    let change_text = signed(change.change);
    let pct_text = format!("{}%", signed(change.change_pct));
    let title = format!(
        "{symbol}: {} ({}:{}) || {}: {} : {}",
        or_none(&info.short_name),
        or_none(&info.country),
        or_none(&info.exchange),
        color_trigger(py_float(change.current), change.change),
        color_bias(change_text),
        color_bias(pct_text),
    );
    let time = format!(
        "Time: {}",
        now.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z")
    );
    let sector = format!(
        "Sector/Industry: {}/{}",
        or_none(&info.sector),
        or_none(&info.industry)
    );
    [title, time, sector]
}
