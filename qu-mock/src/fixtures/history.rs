use chrono::{DateTime, Months, TimeZone, Utc};
use qu_core::{Candle, Dividend, FastInfo, HistoryMeta, HistoryResponse};

/// Regular-session open (09:30 New York, summer time) on the given day.
fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 13, 30, 0)
        .single()
        .unwrap_or_default()
}

/// One week of daily bars ending 2024-06-14, moving from `start` to `end`.
fn week(start: f64, end: f64) -> Vec<Candle> {
    let step = (end - start) / 4.0;
    (0..5u32)
        .map(|i| {
            let close = start + step * f64::from(i);
            let open = close - step / 2.0;
            Candle {
                ts: day(2024, 6, 10 + i),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
            }
        })
        .collect()
}

fn quarterly(first: DateTime<Utc>, amounts: &[f64]) -> Vec<Dividend> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, amount)| Dividend {
            ts: first + Months::new(3 * i as u32),
            amount: *amount,
        })
        .collect()
}

fn meta(price: Option<f64>, previous: Option<f64>) -> Option<HistoryMeta> {
    Some(HistoryMeta {
        regular_market_price: price,
        previous_close: previous,
    })
}

/// Every dividend on record for a fixture symbol, oldest first.
pub fn dividends_by_symbol(s: &str) -> Vec<Dividend> {
    match s {
        "AAPL" | "NOVOL" | "NOAVG" => quarterly(day(2023, 8, 11), &[0.24, 0.24, 0.24, 0.25]),
        "KO" => quarterly(
            day(2020, 9, 14),
            &[
                0.41, 0.41, 0.42, 0.42, 0.42, 0.42, 0.44, 0.44, 0.44, 0.44, 0.46, 0.46, 0.46, 0.46,
                0.485, 0.485,
            ],
        ),
        "SPY" => quarterly(day(2023, 9, 14), &[1.58, 1.91, 1.59, 1.76]),
        _ => vec![],
    }
}

/// Daily history for a fixture symbol. `None` means the symbol is unknown.
pub fn by_symbol(s: &str) -> Option<HistoryResponse> {
    let (candles, meta) = match s {
        "AAPL" | "NOVOL" | "NOAVG" => (week(185.0, 189.5), meta(Some(189.5), Some(187.0))),
        "KO" => (week(60.0, 61.2), meta(Some(61.2), Some(61.5))),
        "SPY" => (week(535.0, 542.0), meta(Some(542.0), Some(540.0))),
        "NOPRICE" => (vec![], meta(None, None)),
        "NOPREV" => (week(12.0, 12.5), meta(Some(12.5), None)),
        "CRASH" | "DUD" => (vec![], None),
        _ => return None,
    };
    Some(HistoryResponse {
        candles,
        dividends: dividends_by_symbol(s),
        meta,
    })
}

/// Fast-info fallbacks for a fixture symbol.
pub fn fast_info_by_symbol(s: &str) -> FastInfo {
    match s {
        "AAPL" | "NOVOL" | "NOAVG" => FastInfo {
            open: Some(188.0),
            previous_close: Some(187.0),
        },
        "SPY" => FastInfo {
            open: Some(541.0),
            previous_close: Some(540.0),
        },
        _ => FastInfo::default(),
    }
}
