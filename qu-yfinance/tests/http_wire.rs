use std::time::Duration;

use httpmock::prelude::*;
use qu_core::{QuConnector, QuError, Symbol, TickerInfo};
use qu_yfinance::YfConnector;

const SUMMARY: &str = r#"{"quoteSummary":{"result":[{
    "price":{"shortName":"Apple Inc.","exchange":"NMS","regularMarketPreviousClose":{"raw":187.0,"fmt":"187.00"}},
    "assetProfile":{"sector":"Technology","industry":"Consumer Electronics","country":"United States"},
    "summaryDetail":{"volume":{"raw":51234567,"fmt":"51.23M"},"averageVolume":{"raw":60000000,"fmt":"60M"}},
    "financialData":{"currentPrice":{"raw":189.5,"fmt":"189.50"},"recommendationKey":"buy"}
}],"error":null}}"#;

fn connector(server: &MockServer) -> YfConnector {
    YfConnector::builder()
        .base_url(server.base_url())
        .cookie_url(server.url("/cookie"))
        .timeout(Duration::from_secs(5))
        .build()
        .expect("connector builds")
}

#[tokio::test]
async fn profile_request_carries_modules_and_crumb() {
    let server = MockServer::start_async().await;
    let cookie = server
        .mock_async(|when, then| {
            when.method(GET).path("/cookie");
            then.status(404).header("set-cookie", "A3=d=abc; Path=/");
        })
        .await;
    let crumb = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/test/getcrumb");
            then.status(200).body("crumb123");
        })
        .await;
    let summary = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v10/finance/quoteSummary/AAPL")
                .query_param("crumb", "crumb123")
                .query_param_exists("modules");
            then.status(200)
                .header("content-type", "application/json")
                .body(SUMMARY);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/ws/fundamentals-timeseries/v1/finance/timeseries/AAPL");
            then.status(200).body(
                r#"{"timeseries":{"result":[{"trailingPegRatio":[{"reportedValue":{"raw":2.9}}]}]}}"#,
            );
        })
        .await;

    let yf = connector(&server);
    let sym = Symbol::new("AAPL").unwrap();
    let provider = yf.as_info_provider().unwrap();
    let raw = provider.info(&sym).await.unwrap();
    // Second call reuses the cached crumb.
    provider.info(&sym).await.unwrap();

    cookie.assert_async().await;
    crumb.assert_async().await;
    summary.assert_hits_async(2).await;

    let info = TickerInfo::from_raw(&raw);
    assert_eq!(info.current_price, Some(189.5));
    assert_eq!(info.previous_close, Some(187.0));
    assert_eq!(info.volume, Some(51_234_567));
    assert_eq!(info.sector.as_deref(), Some("Technology"));
    assert_eq!(info.trailing_peg_ratio, Some(2.9));
}

#[tokio::test]
async fn profile_statuses_map_to_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/NOPE");
            then.status(404).body(r#"{"finance":{"error":{"code":"Not Found"}}}"#);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/BUSY");
            then.status(429).body("Too Many Requests");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/DOWN");
            then.status(503).body("unavailable");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/JUNK");
            then.status(200).body("<html>");
        })
        .await;

    let yf = YfConnector::builder()
        .base_url(server.base_url())
        .use_crumb(false)
        .build()
        .unwrap();
    let info = yf.as_info_provider().unwrap();
    let call = |s: &'static str| {
        let sym = Symbol::new(s).unwrap();
        async move { info.info(&sym).await.unwrap_err() }
    };

    assert!(matches!(call("NOPE").await, QuError::NotFound { .. }));
    match call("BUSY").await {
        QuError::Connector { msg, .. } => assert!(msg.starts_with("rate limit"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
    match call("DOWN").await {
        QuError::Connector { msg, .. } => assert!(msg.starts_with("server error 503"), "{msg}"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(call("JUNK").await, QuError::Data(_)));
}
