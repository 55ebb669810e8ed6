//! Provider profile map and its typed projection.
//!
//! Providers hand back a loosely typed string-keyed map. [`TickerInfo::from_raw`]
//! is the only place that looks keys up; everything downstream works on
//! explicit `Option` fields.

use serde_json::{Map, Value};

/// Untyped profile map as returned by a provider (`currentPrice`, `beta`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInfo(Map<String, Value>);

impl RawInfo {
    /// Empty map.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Insert or replace a key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    /// Look up a raw value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of keys present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A profile with two or fewer keys carries no usable data; Yahoo answers
    /// this way for delisted or unknown symbols.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.0.len() <= 2
    }

    fn number(&self, key: &str) -> Option<f64> {
        let v = match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        v.is_finite().then_some(v)
    }

    fn count(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(|f| f as u64)),
            _ => None,
        }
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for RawInfo {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for RawInfo {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Typed view of the profile fields the report consumes.
///
/// Every field is optional; defaults are applied where the value is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct TickerInfo {
    pub current_price: Option<f64>,
    /// `regularMarketPreviousClose`.
    pub previous_close: Option<f64>,
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,
    /// Rendered as "N/A" when absent.
    pub shares_outstanding: Option<f64>,
    /// Rendered as "N/A" when absent.
    pub float_shares: Option<f64>,
    /// Fraction in `[0, 1]`.
    pub held_percent_institutions: Option<f64>,
    /// Fraction in `[0, 1]`.
    pub held_percent_insiders: Option<f64>,
    pub beta: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub short_name: Option<String>,
    /// Rendered as "None" when absent.
    pub country: Option<String>,
    pub exchange: Option<String>,
    /// Treated as 0 when absent.
    pub number_of_analyst_opinions: Option<u64>,
    /// Treated as "-" when absent.
    pub recommendation_key: Option<String>,
    pub target_low_price: Option<f64>,
    pub target_high_price: Option<f64>,
    pub target_mean_price: Option<f64>,
    pub target_median_price: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub current_ratio: Option<f64>,
    pub trailing_peg_ratio: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub short_ratio: Option<f64>,
    pub book_value: Option<f64>,
    pub nav_price: Option<f64>,
    pub trailing_eps: Option<f64>,
    pub forward_eps: Option<f64>,
    pub dividend_rate: Option<f64>,
    /// Fraction, not percent.
    pub trailing_annual_dividend_yield: Option<f64>,
    pub debt_to_equity: Option<f64>,
    /// ISO code of the reporting currency.
    pub financial_currency: Option<String>,
    pub total_cash: Option<f64>,
    pub total_debt: Option<f64>,
}

impl TickerInfo {
    /// Project the raw provider map onto typed fields.
    #[must_use]
    pub fn from_raw(raw: &RawInfo) -> Self {
        Self {
            current_price: raw.number("currentPrice"),
            previous_close: raw.number("regularMarketPreviousClose"),
            open: raw.number("open"),
            day_high: raw.number("dayHigh"),
            day_low: raw.number("dayLow"),
            bid: raw.number("bid"),
            ask: raw.number("ask"),
            bid_size: raw.count("bidSize"),
            ask_size: raw.count("askSize"),
            volume: raw.count("volume"),
            average_volume: raw.count("averageVolume"),
            shares_outstanding: raw.number("sharesOutstanding"),
            float_shares: raw.number("floatShares"),
            held_percent_institutions: raw.number("heldPercentInstitutions"),
            held_percent_insiders: raw.number("heldPercentInsiders"),
            beta: raw.number("beta"),
            sector: raw.text("sector"),
            industry: raw.text("industry"),
            short_name: raw.text("shortName"),
            country: raw.text("country"),
            exchange: raw.text("exchange"),
            number_of_analyst_opinions: raw.count("numberOfAnalystOpinions"),
            recommendation_key: raw.text("recommendationKey"),
            target_low_price: raw.number("targetLowPrice"),
            target_high_price: raw.number("targetHighPrice"),
            target_mean_price: raw.number("targetMeanPrice"),
            target_median_price: raw.number("targetMedianPrice"),
            quick_ratio: raw.number("quickRatio"),
            current_ratio: raw.number("currentRatio"),
            trailing_peg_ratio: raw.number("trailingPegRatio"),
            peg_ratio: raw.number("pegRatio"),
            short_ratio: raw.number("shortRatio"),
            book_value: raw.number("bookValue"),
            nav_price: raw.number("navPrice"),
            trailing_eps: raw.number("trailingEps"),
            forward_eps: raw.number("forwardEps"),
            dividend_rate: raw.number("dividendRate"),
            trailing_annual_dividend_yield: raw.number("trailingAnnualDividendYield"),
            debt_to_equity: raw.number("debtToEquity"),
            financial_currency: raw.text("financialCurrency"),
            total_cash: raw.number("totalCash"),
            total_debt: raw.number("totalDebt"),
        }
    }

    /// Analyst opinion summary.
    #[must_use]
    pub fn analysts(&self) -> AnalystSummary {
        let key = self
            .recommendation_key
            .as_deref()
            .unwrap_or("-")
            .trim()
            .to_lowercase();
        AnalystSummary {
            analysts: self.number_of_analyst_opinions.unwrap_or(0),
            recommendation: Recommendation::from_key(&key),
            recommendation_key: key,
            target_low: self.target_low_price,
            target_high: self.target_high_price,
            target_mean: self.target_mean_price,
            target_median: self.target_median_price,
        }
    }

    /// Liquidity and valuation ratios.
    #[must_use]
    pub fn ratios(&self) -> Ratios {
        Ratios {
            quick_ratio: self.quick_ratio,
            current_ratio: self.current_ratio,
            trailing_peg_ratio: self.trailing_peg_ratio,
            peg_ratio: self.peg_ratio,
            short_ratio: self.short_ratio,
            book_value: self.book_value,
            nav_price: self.nav_price,
        }
    }

    /// Earnings, dividend and balance-sheet headline figures.
    #[must_use]
    pub fn earnings(&self) -> Earnings {
        Earnings {
            trailing_eps: self.trailing_eps,
            forward_eps: self.forward_eps,
            dividend_rate: self.dividend_rate,
            dividend_yield: self.trailing_annual_dividend_yield,
            debt_to_equity: self.debt_to_equity,
            financial_currency: self.financial_currency.clone(),
            total_cash: self.total_cash,
            total_debt: self.total_debt,
        }
    }
}

/// Consensus analyst recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    /// `buy`, `strong_buy`.
    Buy,
    /// `hold`.
    Hold,
    /// `sell`, `strong_sell`.
    Sell,
    /// `underperform`.
    Underperform,
    /// Anything else, including a missing key.
    Unknown,
}

impl Recommendation {
    /// Bucket a provider recommendation key by substring.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let key = key.to_lowercase();
        if key.contains("buy") {
            Self::Buy
        } else if key.contains("hold") {
            Self::Hold
        } else if key.contains("sell") {
            Self::Sell
        } else if key.contains("underperform") {
            Self::Underperform
        } else {
            Self::Unknown
        }
    }
}

/// Analyst coverage for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalystSummary {
    /// Number of analyst opinions (0 when absent).
    pub analysts: u64,
    /// Lower-cased recommendation key (`-` when absent).
    pub recommendation_key: String,
    /// Bucketed recommendation.
    pub recommendation: Recommendation,
    /// Lowest price target.
    pub target_low: Option<f64>,
    /// Highest price target.
    pub target_high: Option<f64>,
    /// Mean price target.
    pub target_mean: Option<f64>,
    /// Median price target.
    pub target_median: Option<f64>,
}

/// Liquidity and valuation ratios.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Ratios {
    pub quick_ratio: Option<f64>,
    pub current_ratio: Option<f64>,
    pub trailing_peg_ratio: Option<f64>,
    pub peg_ratio: Option<f64>,
    pub short_ratio: Option<f64>,
    pub book_value: Option<f64>,
    pub nav_price: Option<f64>,
}

/// Earnings and balance-sheet headline figures.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Earnings {
    pub trailing_eps: Option<f64>,
    pub forward_eps: Option<f64>,
    pub dividend_rate: Option<f64>,
    /// Trailing annual yield as a fraction.
    pub dividend_yield: Option<f64>,
    pub debt_to_equity: Option<f64>,
    pub financial_currency: Option<String>,
    pub total_cash: Option<f64>,
    pub total_debt: Option<f64>,
}

/// Quote-table figures for one symbol, after price discovery.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct Quote {
    pub previous_close: f64,
    pub open: Option<f64>,
    pub day_high: Option<f64>,
    pub day_low: Option<f64>,
    pub bid: Option<f64>,
    pub ask: Option<f64>,
    pub bid_size: Option<u64>,
    pub ask_size: Option<u64>,
    pub shares_outstanding: Option<f64>,
    pub float_shares: Option<f64>,
    pub held_percent_institutions: Option<f64>,
    pub held_percent_insiders: Option<f64>,
    pub beta: Option<f64>,
    /// Number of listed option expirations.
    pub options_count: usize,
}

impl Quote {
    /// Build from the typed profile plus the resolved previous close.
    #[must_use]
    pub fn new(info: &TickerInfo, previous_close: f64, options_count: usize) -> Self {
        Self {
            previous_close,
            open: info.open,
            day_high: info.day_high,
            day_low: info.day_low,
            bid: info.bid,
            ask: info.ask,
            bid_size: info.bid_size,
            ask_size: info.ask_size,
            shares_outstanding: info.shares_outstanding,
            float_shares: info.float_shares,
            held_percent_institutions: info.held_percent_institutions,
            held_percent_insiders: info.held_percent_insiders,
            beta: info.beta,
            options_count,
        }
    }
}
