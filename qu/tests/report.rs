mod helpers;

use std::sync::Arc;

use helpers::{has_line, mock_qu, qu_with, rendered, skipped};
use qu::{Outcome, Qu, SkipReason};
use qu_core::QuConnector;
use qu_mock::MockConnector;

#[tokio::test]
async fn full_equity_report() {
    let qu = mock_qu();
    let r = rendered(qu.report("aapl").await);

    assert_eq!(r.symbol, "AAPL");
    assert!(r.cut_short.is_none());
    assert_eq!(
        r.lines[0],
        "AAPL: Apple Inc. (United States:NMS) || 189.5: +2.5 : +1.34%"
    );
    assert_eq!(r.lines[1], "Time: 2024-06-14 16:00:00 EDT");
    assert_eq!(r.lines[2], "Sector/Industry: Technology/Consumer Electronics");

    // quote table
    assert!(has_line(&r, &["AveVol: 60000000", "Volume: 51234567", "VolPct: 85.39%", "Outstanding: 15.5B"]));
    assert!(has_line(&r, &["Open:", "188.00", "PrevClose: 187.0", "Float Share: 15.4B"]));
    assert!(has_line(&r, &["High:", "190.25", "186.90", "Diff:", "3.35", "Insider Pct:  0.1%"]));
    assert!(has_line(&r, &["Bid:", "189.40", "Ask:", "189.6", "Spread:   0.20", "Institu Pct: 61.2%"]));
    assert!(has_line(&r, &["BidSize:     300", "AskSize:     200", "Beta:     1.29", "Options:"]));

    // panels
    assert!(has_line(&r, &["Num Analysts:", "38", "QuickRatio:", "0.94", "TrailingEps:", "6.13"]));
    assert!(has_line(&r, &["Recommendation:", "BUY"]));
    assert!(has_line(&r, &["TargetMean:", "204.31"]));
    assert!(has_line(&r, &["TrailingPEG:", "2.1"]));
    assert!(has_line(&r, &["PEG Ratio:", "2.4"]));
    assert!(has_line(&r, &["Price/Book:", "39.56"]));
    assert!(has_line(&r, &["DivRate:", "0.96"]));
    assert!(has_line(&r, &["Yield:", "0.51%"]));
    assert!(has_line(&r, &["Cash: $", "62.0B"]));
    assert!(has_line(&r, &["Debt: $", "108.0B"]));

    // a reported yield suppresses the calculated lines
    assert!(!has_line(&r, &["Calculated Dividend"]));
    assert!(has_line(&r, &["Date", "Dividends"]));
    assert!(has_line(&r, &["2023-08-11", "0.24"]));
    assert!(has_line(&r, &["2024-05-11", "0.25"]));
}

#[tokio::test]
async fn missing_yield_prints_calculated_rate() {
    let qu = mock_qu();
    let r = rendered(qu.report("KO").await);

    assert_eq!(
        r.lines[0],
        "KO: Coca-Cola Company (The) (United States:NYQ) || 61.2: -0.3 : -0.49%"
    );
    let rate = r
        .lines
        .iter()
        .position(|l| l == "Calculated Dividend Rate: 1.89")
        .expect("rate line");
    assert_eq!(r.lines[rate + 1], "Calculated Dividend Yield: 3.09%");
    assert!(!has_line(&r, &["DivRate:"]));

    // no bid/ask: placeholders, institutions still shown
    assert!(has_line(&r, &["| - ", "Institu Pct: 65.0%"]));
    assert!(has_line(&r, &["Recommendation:", "HOLD"]));
    assert!(has_line(&r, &["TrailingEps:", "-0.5"]));
    assert!(has_line(&r, &["ForwardEps:", "| - "]));
    // no trailing PEG: the label keeps its colon and shows a placeholder
    assert!(has_line(&r, &["TrailingPEG:", "| - "]));

    // the table lists the twelve most recent of sixteen payments
    assert!(has_line(&r, &["2024-06-14", "0.485"]));
    assert!(has_line(&r, &["2021-09-14", "0.42"]));
    assert!(!has_line(&r, &["2021-06-14"]));
}

#[tokio::test]
async fn fund_uses_history_price_and_fast_previous_close() {
    let qu = mock_qu();
    let r = rendered(qu.report("SPY").await);

    assert_eq!(r.lines[0], "SPY: SPDR S&P 500 (None:PCX) || 542.0: +2.0 : +0.37%");
    assert_eq!(r.lines[2], "Sector/Industry: None/None");
    assert!(has_line(&r, &["PrevClose: 540.0"]));
    assert!(has_line(&r, &["NAV:", "542.37"]));
    assert!(has_line(&r, &["Yield:", "1.23%"]));
    assert!(has_line(&r, &["Options:", "30"]));
    assert!(!has_line(&r, &["Calculated Dividend"]));
    assert!(has_line(&r, &["2024-06-14", "1.76"]));
}

#[tokio::test]
async fn invalid_symbol_is_skipped_without_lookup() {
    let qu = mock_qu();
    let reason = skipped(qu.report("ZZINVALID!").await);
    assert_eq!(reason, SkipReason::InvalidSymbol("ZZINVALID!".into()));
    assert_eq!(
        reason.notice().as_deref(),
        Some("Ticker ZZINVALID! is not a valid ticker symbol... Shamefull!")
    );
}

#[tokio::test]
async fn profile_failures_mean_not_found() {
    let qu = mock_qu();
    for sym in ["FAIL", "NOSUCH"] {
        let reason = skipped(qu.report(sym).await);
        assert_eq!(reason, SkipReason::NotFound(sym.into()));
        assert_eq!(
            reason.notice(),
            Some(format!("NOTE: Ticker {sym} does not exist!"))
        );
    }
}

#[tokio::test]
async fn degenerate_profile_is_delisted() {
    let qu = mock_qu();
    let reason = skipped(qu.report("dud").await);
    assert_eq!(reason, SkipReason::Delisted("DUD".into()));
    assert_eq!(
        reason.notice().as_deref(),
        Some("NOTE: DUD missing data! Possibly delisted!!")
    );
}

#[tokio::test]
async fn missing_price_and_previous_close_skip_silently() {
    let qu = mock_qu();
    let reason = skipped(qu.report("NOPRICE").await);
    assert_eq!(reason, SkipReason::NoPrice("NOPRICE".into()));
    assert!(reason.notice().is_none());

    let reason = skipped(qu.report("NOPREV").await);
    assert_eq!(reason, SkipReason::NoPreviousClose("NOPREV".into()));
    assert!(reason.notice().is_none());
}

#[tokio::test]
async fn zero_volume_stops_after_header() {
    let qu = mock_qu();
    let r = rendered(qu.report("NOVOL").await);
    assert_eq!(r.lines.len(), 3);
    assert_eq!(r.cut_short, Some(SkipReason::NoVolume("NOVOL".into())));
    assert!(r.cut_short.as_ref().and_then(SkipReason::notice).is_none());
}

#[tokio::test]
async fn zero_average_volume_stops_after_header_with_notice() {
    let qu = mock_qu();
    let r = rendered(qu.report("NOAVG").await);
    assert_eq!(r.lines.len(), 3);
    assert!(r.lines[0].starts_with("NOAVG: No Average Corp"));
    assert_eq!(
        r.cut_short.as_ref().and_then(SkipReason::notice).as_deref(),
        Some("Zero Average Volume: skipping:  NOAVG")
    );
}

#[tokio::test]
async fn empty_one_month_history_is_fatal() {
    let qu = mock_qu();
    match qu.report("CRASH").await {
        Outcome::Fatal(e) => assert!(e.to_string().contains("CRASH")),
        other => panic!("expected fatal, got {other:?}"),
    }
}

/// Connector that advertises no capabilities at all.
struct Inert;

impl QuConnector for Inert {
    fn name(&self) -> &'static str {
        "inert"
    }
}

#[tokio::test]
async fn connectors_without_the_capability_are_passed_over() {
    let qu = qu_with(vec![Arc::new(Inert), Arc::new(MockConnector::new())]);
    let r = rendered(qu.report("AAPL").await);
    assert!(r.lines[0].starts_with("AAPL: Apple Inc."));
}

#[tokio::test]
async fn no_profile_provider_is_not_found() {
    let qu = qu_with(vec![Arc::new(Inert)]);
    assert_eq!(
        skipped(qu.report("AAPL").await),
        SkipReason::NotFound("AAPL".into())
    );
}

#[test]
fn builder_requires_a_connector() {
    let err = Qu::builder().build().err().expect("no connectors");
    assert!(matches!(err, qu_core::QuError::InvalidArg(_)));
}

#[test]
fn builder_overrides_presentation_settings() {
    let qu = Qu::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .dividend_rows(4)
        .separator_width(40)
        .timezone(chrono_tz::UTC)
        .build()
        .unwrap();
    assert_eq!(qu.config().dividend_rows, 4);
    assert_eq!(qu.config().separator_width, 40);
    assert_eq!(qu.config().timezone, chrono_tz::UTC);
}

#[tokio::test]
async fn dividend_rows_limit_the_table() {
    helpers::no_colour();
    let qu = Qu::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .clock(helpers::fixed_now)
        .dividend_rows(2)
        .build()
        .unwrap();
    let r = rendered(qu.report("KO").await);
    assert!(has_line(&r, &["2024-06-14", "0.485"]));
    assert!(has_line(&r, &["2024-03-14", "0.485"]));
    assert!(!has_line(&r, &["2023-12-14"]));
}
