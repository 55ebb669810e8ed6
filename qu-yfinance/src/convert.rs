//! Mapping from yfinance-rs (paft) values into `qu_core` types.

use paft::market::action::Action;
use paft::market::requests::history::{Interval, Range as YfRange};
use paft::money::Money;
use qu_core::{Candle, Dividend, HistoryMeta, QuError, Range};
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

pub(crate) const fn range(r: Range) -> YfRange {
    match r {
        Range::D5 => YfRange::D5,
        Range::M1 => YfRange::M1,
        Range::Max => YfRange::Max,
    }
}

/// Daily bars over `r`, split-adjusted, with dividend actions attached.
pub(crate) fn daily_request(r: Range) -> yf::core::services::HistoryRequest {
    yf::core::services::HistoryRequest {
        range: Some(range(r)),
        period: None,
        interval: Interval::D1,
        include_prepost: false,
        include_actions: true,
        auto_adjust: true,
        keepna: false,
    }
}

pub(crate) fn amount(m: &Money) -> Result<f64, QuError> {
    m.amount()
        .to_f64()
        .ok_or_else(|| QuError::Data(format!("amount out of range: {}", m.amount())))
}

pub(crate) fn candles(raw: &[yf::Candle]) -> Result<Vec<Candle>, QuError> {
    raw.iter()
        .map(|c| {
            Ok(Candle {
                ts: c.ts,
                open: amount(&c.open)?,
                high: amount(&c.high)?,
                low: amount(&c.low)?,
                close: amount(&c.close)?,
            })
        })
        .collect()
}

/// Dividend actions, oldest first. Splits and capital gains are dropped.
pub(crate) fn dividends(actions: &[Action]) -> Result<Vec<Dividend>, QuError> {
    let mut out = actions
        .iter()
        .filter_map(|a| match a {
            Action::Dividend { ts, amount: m } => Some(amount(m).map(|amount| Dividend { ts: *ts, amount })),
            _ => None,
        })
        .collect::<Result<Vec<_>, _>>()?;
    out.sort_by_key(|d| d.ts);
    Ok(out)
}

/// Series metadata taken from a quote snapshot.
pub(crate) fn quote_meta(q: &yf::core::Quote) -> Result<HistoryMeta, QuError> {
    Ok(HistoryMeta {
        regular_market_price: q.price.as_ref().map(amount).transpose()?,
        previous_close: q.previous_close.as_ref().map(amount).transpose()?,
    })
}
