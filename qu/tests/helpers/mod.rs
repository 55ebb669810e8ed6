// Shared fixtures for the qu integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use qu::{Outcome, Qu, Report, RunSummary, SkipReason};
use qu_core::QuConnector;
use qu_mock::MockConnector;

/// 2024-06-14 16:00 in New York, after the close.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 14, 20, 0, 0).unwrap()
}

/// Disable ANSI colour so rendered text can be compared directly.
pub fn no_colour() {
    colored::control::set_override(false);
}

/// A `Qu` over the fixture connector with a fixed clock.
pub fn mock_qu() -> Qu {
    no_colour();
    Qu::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .clock(fixed_now)
        .build()
        .expect("mock qu builds")
}

/// A `Qu` over custom connectors with a fixed clock.
pub fn qu_with(connectors: Vec<Arc<dyn QuConnector>>) -> Qu {
    no_colour();
    let mut b = Qu::builder().clock(fixed_now);
    for c in connectors {
        b = b.with_connector(c);
    }
    b.build().expect("qu builds")
}

pub fn rendered(outcome: Outcome) -> Report {
    match outcome {
        Outcome::Rendered(r) => r,
        other => panic!("expected a rendered report, got {other:?}"),
    }
}

pub fn skipped(outcome: Outcome) -> SkipReason {
    match outcome {
        Outcome::Skipped(r) => r,
        other => panic!("expected a skip, got {other:?}"),
    }
}

/// Run `symbols` and return the summary with everything written to stdout.
pub async fn run_to_string(qu: &Qu, symbols: &[&str]) -> (RunSummary, String) {
    let symbols: Vec<String> = symbols.iter().map(|s| (*s).to_string()).collect();
    let mut out = Vec::new();
    let summary = qu.run(&symbols, &mut out).await.expect("write to vec");
    (summary, String::from_utf8(out).expect("utf-8 output"))
}

/// True when some line contains every fragment.
pub fn has_line(report: &Report, fragments: &[&str]) -> bool {
    report
        .lines
        .iter()
        .any(|l| fragments.iter().all(|f| l.contains(f)))
}
