use qu_core::RawInfo;
use serde_json::{Value, json};

fn from_json(v: Value) -> RawInfo {
    match v {
        Value::Object(map) => RawInfo::from(map),
        _ => RawInfo::new(),
    }
}

fn aapl() -> Value {
    json!({
        "shortName": "Apple Inc.",
        "country": "United States",
        "exchange": "NMS",
        "sector": "Technology",
        "industry": "Consumer Electronics",
        "quoteType": "EQUITY",
        "currentPrice": 189.5,
        "regularMarketPreviousClose": 187.0,
        "open": 188.0,
        "dayHigh": 190.25,
        "dayLow": 186.9,
        "bid": 189.4,
        "ask": 189.6,
        "bidSize": 300,
        "askSize": 200,
        "volume": 51_234_567,
        "averageVolume": 60_000_000,
        "sharesOutstanding": 15_460_000_000_u64,
        "floatShares": 15_440_000_000_u64,
        "heldPercentInstitutions": 0.6123,
        "heldPercentInsiders": 0.0007,
        "beta": 1.29,
        "numberOfAnalystOpinions": 38,
        "recommendationKey": "buy",
        "targetLowPrice": 164.0,
        "targetHighPrice": 250.0,
        "targetMeanPrice": 204.31,
        "targetMedianPrice": 200.0,
        "quickRatio": 0.94,
        "currentRatio": 1.07,
        "trailingPegRatio": 2.1,
        "pegRatio": 2.4,
        "shortRatio": 1.3,
        "bookValue": 4.79,
        "trailingEps": 6.13,
        "forwardEps": 6.59,
        "dividendRate": 0.96,
        "trailingAnnualDividendYield": 0.0051,
        "debtToEquity": 145.0,
        "financialCurrency": "USD",
        "totalCash": 62_000_000_000_u64,
        "totalDebt": 108_000_000_000_u64
    })
}

fn ko() -> Value {
    json!({
        "shortName": "Coca-Cola Company (The)",
        "country": "United States",
        "exchange": "NYQ",
        "sector": "Consumer Defensive",
        "industry": "Beverages - Non-Alcoholic",
        "quoteType": "EQUITY",
        "currentPrice": 61.2,
        "regularMarketPreviousClose": 61.5,
        "open": 61.4,
        "dayHigh": 61.7,
        "dayLow": 60.95,
        "bid": 0.0,
        "ask": 0.0,
        "volume": 9_000_000,
        "averageVolume": 12_000_000,
        "sharesOutstanding": 4_310_000_000_u64,
        "floatShares": 4_300_000_000_u64,
        "heldPercentInstitutions": 0.65,
        "heldPercentInsiders": 0.0068,
        "beta": 0.59,
        "numberOfAnalystOpinions": 3,
        "recommendationKey": "hold",
        "targetLowPrice": 60.0,
        "targetHighPrice": 72.0,
        "quickRatio": 0.85,
        "currentRatio": 1.13,
        "shortRatio": 2.4,
        "bookValue": 6.0,
        "trailingEps": -0.5,
        "debtToEquity": 1.62,
        "financialCurrency": "USD",
        "totalCash": 13_000_000_000_u64
    })
}

fn spy() -> Value {
    json!({
        "shortName": "SPDR S&P 500",
        "exchange": "PCX",
        "quoteType": "ETF",
        "open": 541.0,
        "dayHigh": 544.1,
        "dayLow": 540.2,
        "volume": 40_000_000,
        "averageVolume": 50_000_000,
        "beta": 1.0,
        "navPrice": 542.37,
        "trailingAnnualDividendYield": 0.0123
    })
}

/// Full equity profile without `volume`, used to cut the report short.
fn novol() -> Value {
    let mut v = aapl();
    if let Some(m) = v.as_object_mut() {
        m.remove("volume");
        m.insert("shortName".into(), json!("No Volume Corp"));
    }
    v
}

fn noavg() -> Value {
    let mut v = aapl();
    if let Some(m) = v.as_object_mut() {
        m.remove("averageVolume");
        m.insert("shortName".into(), json!("No Average Corp"));
    }
    v
}

/// No price anywhere: the profile lacks `currentPrice` and the history metadata lacks a price.
fn noprice() -> Value {
    json!({
        "shortName": "Priceless Holdings",
        "exchange": "NMS",
        "quoteType": "EQUITY",
        "regularMarketPreviousClose": 10.0
    })
}

fn noprev() -> Value {
    json!({
        "shortName": "Orphan Close Inc.",
        "exchange": "NMS",
        "quoteType": "EQUITY",
        "currentPrice": 12.5
    })
}

fn crash() -> Value {
    json!({
        "shortName": "Crash Test Ltd",
        "exchange": "NMS",
        "quoteType": "EQUITY",
        "regularMarketPreviousClose": 3.0
    })
}

/// Profile map for a fixture symbol. `None` means the symbol is unknown.
pub fn by_symbol(s: &str) -> Option<RawInfo> {
    let v = match s {
        "AAPL" => aapl(),
        "KO" => ko(),
        "SPY" => spy(),
        "NOVOL" => novol(),
        "NOAVG" => noavg(),
        "NOPRICE" => noprice(),
        "NOPREV" => noprev(),
        "CRASH" => crash(),
        "DUD" => json!({"trailingPegRatio": null, "symbol": "DUD"}),
        _ => return None,
    };
    Some(from_json(v))
}
