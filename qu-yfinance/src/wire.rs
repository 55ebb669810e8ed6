//! quoteSummary and fundamentals-timeseries payloads.
//!
//! yfinance-rs has no typed model for the ratio, holder and analyst fields
//! the report reads, so these two endpoints are decoded here.

use qu_core::{QuError, RawInfo};
use serde::Deserialize;
use serde_json::{Map, Value};

/// quoteSummary modules merged into the profile map, in override order.
pub(crate) const SUMMARY_MODULES: &[&str] = &[
    "assetProfile",
    "quoteType",
    "price",
    "summaryDetail",
    "defaultKeyStatistics",
    "financialData",
];

#[derive(Debug, Deserialize)]
struct WireError {
    code: Option<String>,
    description: Option<String>,
}

impl WireError {
    fn into_error(self, what: &str) -> QuError {
        let code = self.code.unwrap_or_default();
        if code.eq_ignore_ascii_case("not found") {
            QuError::not_found(what.to_string())
        } else {
            QuError::Data(format!(
                "{what}: {code} {}",
                self.description.unwrap_or_default()
            ))
        }
    }
}

/* ---------------- quoteSummary ---------------- */

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryBody,
}

#[derive(Debug, Deserialize)]
struct SummaryBody {
    result: Option<Vec<Map<String, Value>>>,
    error: Option<WireError>,
}

/// Collapse `{raw, fmt}` wrappers to their raw value; drop nulls, empty
/// objects and display-only objects.
fn unwrap_field(v: Value) -> Option<Value> {
    match v {
        Value::Null => None,
        Value::Object(mut m) => m.remove("raw").filter(|r| !r.is_null()),
        other => Some(other),
    }
}

/// Flatten the requested quoteSummary modules into one profile map.
pub(crate) fn parse_quote_summary(body: &str, what: &str) -> Result<RawInfo, QuError> {
    let env: SummaryEnvelope = serde_json::from_str(body)?;
    if let Some(err) = env.quote_summary.error {
        return Err(err.into_error(what));
    }
    let mut modules = env
        .quote_summary
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| QuError::not_found(what.to_string()))?;

    let mut raw = RawInfo::new();
    for name in SUMMARY_MODULES {
        if let Some(Value::Object(fields)) = modules.remove(*name) {
            for (key, value) in fields {
                if let Some(v) = unwrap_field(value) {
                    raw.insert(key, v);
                }
            }
        }
    }
    Ok(raw)
}

/// Latest `trailingPegRatio` from a fundamentals-timeseries payload.
pub(crate) fn parse_trailing_peg(body: &str) -> Option<f64> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.pointer("/timeseries/result")?
        .as_array()?
        .iter()
        .filter_map(|r| r.get("trailingPegRatio")?.as_array())
        .flat_map(|points| points.iter().rev())
        .find_map(|p| p.pointer("/reportedValue/raw")?.as_f64())
}
