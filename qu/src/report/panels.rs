//! Analyst, ratio and earnings panels shown side by side.

use qu_core::{AnalystSummary, Earnings, Ratios, Recommendation};

use crate::format::{currency_symbol, int_to_human, percent, py_float, round_to};
use crate::layout::outline;
use crate::style::{
    DescThresholds, PLACEHOLDER, QuadThresholds, Styled, Tone, color_bias, quadcolor_bias_low,
    quadcolor_trigger, tricolor_bias_high, tricolor_bias_low,
};

type Rows = Vec<Vec<String>>;

fn truthy(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0)
}

fn row(label: &str, value: impl ToString) -> Vec<String> {
    vec![label.to_string(), value.to_string()]
}

fn or_placeholder(v: Option<f64>) -> String {
    v.map_or_else(|| PLACEHOLDER.to_string(), py_float)
}

fn recommendation(a: &AnalystSummary) -> Styled {
    let text = a.recommendation_key.to_uppercase();
    match a.recommendation {
        Recommendation::Buy => Styled::new(text, Tone::GoodBold),
        Recommendation::Hold => Styled::new(text, Tone::Warn),
        Recommendation::Sell | Recommendation::Underperform => Styled::new(text, Tone::BadBold),
        Recommendation::Unknown => Styled::plain(text),
    }
}

/// Analyst count, recommendation and price targets.
pub(crate) fn analysts(a: &AnalystSummary, current: f64) -> Option<String> {
    let mut rows: Rows = vec![
        row("Num Analysts: ", tricolor_bias_high(a.analysts as f64, 4.0)),
        row("Recommendation:", recommendation(a)),
        row("TargetLow:", or_placeholder(a.target_low)),
        row("TargetHigh:", or_placeholder(a.target_high)),
    ];
    for (label, target) in [("TargetMean:", a.target_mean), ("TargetMedian:", a.target_median)] {
        if let Some(t) = truthy(target) {
            rows.push(row(
                label,
                quadcolor_trigger(Some(t), Some(t / current), QuadThresholds::TARGET),
            ));
        }
    }
    outline(&rows)
}

/// PEG values are coloured by their inverse, since lower is better.
fn peg(value: f64) -> Styled {
    quadcolor_trigger(Some(value), Some(1.0 / value), QuadThresholds::PEG)
}

/// Liquidity, PEG, short interest and book/NAV figures.
pub(crate) fn ratios(r: &Ratios, current: f64) -> Option<String> {
    let mut rows: Rows = vec![
        row("QuickRatio:", quadcolor_trigger(r.quick_ratio, None, QuadThresholds::default())),
        row("CurrentRatio:", quadcolor_trigger(r.current_ratio, None, QuadThresholds::default())),
        row(
            "TrailingPEG:",
            truthy(r.trailing_peg_ratio).map_or_else(Styled::placeholder, peg),
        ),
    ];
    if let Some(p) = truthy(r.peg_ratio) {
        rows.push(row("PEG Ratio:", peg(p)));
    }
    if let Some(s) = truthy(r.short_ratio) {
        rows.push(row("Short Ratio:", tricolor_bias_low(s, 4.0)));
    }
    rows.push(row(
        "Price/Book:",
        truthy(r.book_value).map_or_else(Styled::placeholder, |b| {
            tricolor_bias_low(round_to(current / b, 2), 4.0)
        }),
    ));
    if let Some(nav) = truthy(r.nav_price) {
        rows.push(row("NAV:", py_float(nav)));
    }
    outline(&rows)
}

/// Earnings panel plus the dividend yield it showed, if any.
pub(crate) struct EarningsPanel {
    pub table: Option<String>,
    pub dividend_yield: Option<f64>,
}

/// EPS, dividend rate/yield, leverage, cash and debt.
///
/// The yield falls back to `dividend_rate / current` only when the provider
/// sent no yield at all.
pub(crate) fn earnings(e: &Earnings, current: f64) -> EarningsPanel {
    let eps = |v: Option<f64>| truthy(v).map_or_else(Styled::placeholder, |x| color_bias(py_float(x)));
    let mut rows: Rows = vec![
        row("TrailingEps:", eps(e.trailing_eps)),
        row("ForwardEps:", eps(e.forward_eps)),
    ];

    let rate = truthy(e.dividend_rate);
    if let Some(r) = rate {
        rows.push(row("DivRate:", py_float(r)));
    }
    let dividend_yield = match e.dividend_yield {
        None => rate.map(|r| r / current),
        given => given,
    }
    .filter(|y| *y != 0.0);
    if let Some(y) = dividend_yield {
        rows.push(row("Yield:", percent(y)));
    }

    if let Some(d) = truthy(e.debt_to_equity) {
        rows.push(row(
            "DbtEqRatio:",
            quadcolor_bias_low(
                Some(d),
                DescThresholds {
                    warn: 5.0,
                    ..DescThresholds::default()
                },
            ),
        ));
    }

    let code = e.financial_currency.as_deref().unwrap_or_default();
    let cur = currency_symbol(code).unwrap_or(code);
    if let Some(cash) = truthy(e.total_cash) {
        rows.push(row(&format!("Cash: {cur}"), int_to_human(Some(cash))));
    }
    if let Some(debt) = truthy(e.total_debt) {
        rows.push(row(&format!("Debt: {cur}"), int_to_human(Some(debt))));
    }

    EarningsPanel {
        table: outline(&rows),
        dividend_yield,
    }
}
