//! Dividend history table and the calculated rate/yield lines.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use qu_core::Dividend;

use crate::format::{py_float, round_to};
use crate::layout::outline_with_header;

/// Sum of dividends paid in the 365 days up to `now`.
///
/// Only this window feeds the calculated rate; older dividends are ignored.
pub(crate) fn trailing_year_sum(divs: &[Dividend], now: DateTime<Utc>) -> f64 {
    let since = now - Duration::days(365);
    divs.iter()
        .filter(|d| d.ts > since && d.ts <= now)
        .map(|d| d.amount)
        .sum()
}

/// `Calculated Dividend Rate/Yield` lines; empty when the rate rounds to zero.
pub(crate) fn calculated_lines(divs: &[Dividend], current: f64, now: DateTime<Utc>) -> Vec<String> {
    let rate = round_to(trailing_year_sum(divs, now), 2);
    if rate == 0.0 || current == 0.0 {
        return vec![];
    }
    let pct = round_to(rate / current * 100.0, 2);
    vec![
        format!("Calculated Dividend Rate: {}", py_float(rate)),
        format!("Calculated Dividend Yield: {}%", py_float(pct)),
    ]
}

/// The last `rows` dividends under a `Date | Dividends` header.
pub(crate) fn table(divs: &[Dividend], rows: usize, tz: Tz) -> Option<String> {
    let start = divs.len().saturating_sub(rows);
    let body: Vec<Vec<String>> = divs[start..]
        .iter()
        .map(|d| {
            vec![
                d.ts.with_timezone(&tz).format("%Y-%m-%d").to_string(),
                py_float(d.amount),
            ]
        })
        .collect();
    outline_with_header(&["Date", "Dividends"], &body)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn div(y: i32, m: u32, d: u32, amount: f64) -> Dividend {
        Dividend {
            ts: Utc.with_ymd_and_hms(y, m, d, 13, 30, 0).unwrap(),
            amount,
        }
    }

    #[test]
    fn trailing_window_excludes_older_and_future_payments() {
        let now = Utc.with_ymd_and_hms(2024, 6, 14, 20, 0, 0).unwrap();
        let divs = [
            div(2023, 6, 14, 9.0),
            div(2023, 9, 14, 0.46),
            div(2024, 3, 14, 0.485),
            div(2024, 9, 14, 9.0),
        ];
        assert!((trailing_year_sum(&divs, now) - 0.945).abs() < 1e-9);
    }

    #[test]
    fn zero_rate_prints_nothing() {
        let now = Utc.with_ymd_and_hms(2024, 6, 14, 20, 0, 0).unwrap();
        assert!(calculated_lines(&[div(2010, 1, 4, 1.0)], 50.0, now).is_empty());
    }

    #[test]
    fn table_keeps_most_recent_rows() {
        let divs: Vec<Dividend> = (1..=5).map(|m| div(2024, m, 10, f64::from(m))).collect();
        let t = table(&divs, 3, chrono_tz::US::Eastern).unwrap();
        assert!(!t.contains("2024-02-10"));
        assert!(t.contains("2024-03-10"));
        assert!(t.contains("2024-05-10"));
        assert_eq!(t.lines().count(), 3 + 4);
    }
}
