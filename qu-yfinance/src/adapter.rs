use std::sync::Arc;

use async_trait::async_trait;
use qu_core::{QuError, RawInfo};
use reqwest::StatusCode;
use tokio::sync::OnceCell;
use tracing::debug;
use yf::core::HistoryService;
use yfinance_rs as yf;

use crate::config::YfConfig;
use crate::wire;

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch candles and corporate actions for `symbol`.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, QuError>;
}

/// Quote snapshot abstraction; supplies the live price and previous close.
#[async_trait]
pub trait YfQuotes: Send + Sync {
    /// Fetch quotes for `symbols`.
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, QuError>;
}

/// Options abstraction; only the expiration list is needed.
#[async_trait]
pub trait YfOptions: Send + Sync {
    /// Fetch available option expiration dates.
    async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, QuError>;
}

/// Raw quoteSummary abstraction for the profile fields yfinance-rs does not model.
#[async_trait]
pub trait YfSummary: Send + Sync {
    /// Fetch and flatten the profile modules for `symbol`.
    async fn quote_summary(&self, symbol: &str) -> Result<RawInfo, QuError>;

    /// Latest trailing PEG ratio, if Yahoo publishes one. Default: none.
    async fn trailing_peg(&self, _symbol: &str) -> Result<Option<f64>, QuError> {
        Ok(None)
    }
}

/// Real adapter backed by a `YfClient` plus the `reqwest::Client` it wraps.
///
/// Both share one cookie store. The crumb for the direct quoteSummary calls
/// is fetched at most once and shared between clones.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
    http: reqwest::Client,
    cfg: Arc<YfConfig>,
    crumb: Arc<OnceCell<Option<String>>>,
}

impl RealAdapter {
    /// Wrap an existing `YfClient` and the cookie-enabled client used for
    /// quoteSummary requests.
    #[must_use]
    pub fn new(client: yf::YfClient, http: reqwest::Client, cfg: YfConfig) -> Self {
        Self {
            client,
            http,
            cfg: Arc::new(cfg),
            crumb: Arc::new(OnceCell::new()),
        }
    }

    /// Build a `YfClient` on top of `http`.
    ///
    /// # Errors
    /// Returns a connector error if the client rejects the configuration.
    pub fn with_http(http: reqwest::Client, cfg: YfConfig) -> Result<Self, QuError> {
        let client = yf::YfClient::builder()
            .custom_client(http.clone())
            .user_agent(cfg.user_agent.as_str())
            .build()
            .map_err(|e| map_yf_err(&e, "client setup"))?;
        Ok(Self::new(client, http, cfg))
    }

    /// Build a cookie-enabled client from `cfg`.
    ///
    /// # Errors
    /// Returns a connector error if either client cannot be constructed.
    pub fn from_config(cfg: YfConfig) -> Result<Self, QuError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(cfg.user_agent.clone())
            .timeout(cfg.timeout)
            .build()
            .map_err(|e| QuError::connector(crate::YfConnector::NAME, e.to_string()))?;
        Self::with_http(http, cfg)
    }

    async fn crumb(&self) -> Option<String> {
        if !self.cfg.use_crumb {
            return None;
        }
        self.crumb
            .get_or_init(|| async { self.fetch_crumb().await })
            .await
            .clone()
    }

    async fn fetch_crumb(&self) -> Option<String> {
        // The cookie host answers 404 but still sets the session cookie.
        if let Err(e) = self.http.get(&self.cfg.cookie_url).send().await {
            debug!(error = %e, "cookie priming failed");
        }
        let resp = self
            .http
            .get(self.cfg.url("/v1/test/getcrumb"))
            .send()
            .await
            .ok()?;
        if !resp.status().is_success() {
            debug!(status = %resp.status(), "crumb request rejected");
            return None;
        }
        let text = resp.text().await.ok()?;
        let crumb = text.trim();
        (!crumb.is_empty() && !crumb.contains('<')).then(|| crumb.to_string())
    }

    async fn get_text(
        &self,
        path: &str,
        query: &[(&str, String)],
        context: &str,
    ) -> Result<String, QuError> {
        let url = self.cfg.url(path);
        debug!(%url, "yahoo request");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| map_http_err(&e, context))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(map_status(status, context));
        }
        resp.text().await.map_err(|e| map_http_err(&e, context))
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> QuError {
    match e {
        yf::YfError::NotFound { .. } => QuError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            QuError::connector(crate::YfConnector::NAME, format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => QuError::connector(
            crate::YfConnector::NAME,
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            QuError::connector(crate::YfConnector::NAME, format!("status {status}: {context}"))
        }
        other => QuError::connector(crate::YfConnector::NAME, other.to_string()),
    }
}

fn encode_symbol(symbol: &str) -> String {
    symbol.replace('^', "%5E")
}

fn map_status(status: StatusCode, context: &str) -> QuError {
    match status.as_u16() {
        404 => QuError::not_found(context.to_string()),
        429 => QuError::connector(crate::YfConnector::NAME, format!("rate limit: {context}")),
        s if s >= 500 => QuError::connector(
            crate::YfConnector::NAME,
            format!("server error {s}: {context}"),
        ),
        s => QuError::connector(crate::YfConnector::NAME, format!("status {s}: {context}")),
    }
}

fn map_http_err(e: &reqwest::Error, context: &str) -> QuError {
    if let Some(status) = e.status() {
        map_status(status, context)
    } else if e.is_timeout() {
        QuError::connector(crate::YfConnector::NAME, format!("timeout: {context}"))
    } else if e.is_decode() {
        QuError::Data(format!("{context}: {e}"))
    } else {
        QuError::connector(crate::YfConnector::NAME, format!("{context}: {e}"))
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, QuError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfQuotes for RealAdapter {
    async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, QuError> {
        yf::quote::quotes(&self.client, symbols.iter().cloned())
            .await
            .map_err(|e| map_yf_err(&e, "quotes"))
    }
}

#[async_trait]
impl YfOptions for RealAdapter {
    async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, QuError> {
        let t = yf::ticker::Ticker::new(&self.client, symbol.to_string());
        t.options()
            .await
            .map_err(|e| map_yf_err(&e, &format!("options expirations for {symbol}")))
    }
}

#[async_trait]
impl YfSummary for RealAdapter {
    async fn quote_summary(&self, symbol: &str) -> Result<RawInfo, QuError> {
        let context = format!("profile for {symbol}");
        let mut query = vec![("modules", wire::SUMMARY_MODULES.join(","))];
        if let Some(crumb) = self.crumb().await {
            query.push(("crumb", crumb));
        }
        let body = self
            .get_text(
                &format!("/v10/finance/quoteSummary/{}", encode_symbol(symbol)),
                &query,
                &context,
            )
            .await?;
        wire::parse_quote_summary(&body, &context)
    }

    async fn trailing_peg(&self, symbol: &str) -> Result<Option<f64>, QuError> {
        let context = format!("trailing peg for {symbol}");
        let body = self
            .get_text(
                &format!(
                    "/ws/fundamentals-timeseries/v1/finance/timeseries/{}",
                    encode_symbol(symbol)
                ),
                &[("type", "trailingPegRatio".to_string())],
                &context,
            )
            .await?;
        Ok(wire::parse_trailing_peg(&body))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, yf::core::services::HistoryRequest) -> Result<yf::HistoryResponse, QuError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, QuError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, QuError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfQuotes {
    /// Build a `YfQuotes` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfQuotes>
    where
        F: Send + Sync + 'static + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, QuError>,
    {
        struct FnQuotes<F>(F);
        #[async_trait]
        impl<F> YfQuotes for FnQuotes<F>
        where
            F: Send + Sync + 'static + Fn(Vec<String>) -> Result<Vec<yf::core::Quote>, QuError>,
        {
            async fn fetch(&self, symbols: &[String]) -> Result<Vec<yf::core::Quote>, QuError> {
                (self.0)(symbols.to_vec())
            }
        }
        Arc::new(FnQuotes(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfOptions {
    /// Build a `YfOptions` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfOptions>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<Vec<i64>, QuError>,
    {
        struct FnOptions<F>(F);
        #[async_trait]
        impl<F> YfOptions for FnOptions<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<Vec<i64>, QuError>,
        {
            async fn expirations(&self, symbol: &str) -> Result<Vec<i64>, QuError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnOptions(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfSummary {
    /// Build a `YfSummary` from a profile closure and a trailing-PEG closure (tests only).
    pub fn from_fns<FS, FP>(fsummary: FS, fpeg: FP) -> Arc<dyn YfSummary>
    where
        FS: Send + Sync + 'static + Fn(String) -> Result<RawInfo, QuError>,
        FP: Send + Sync + 'static + Fn(String) -> Result<Option<f64>, QuError>,
    {
        struct FnSummary<FS, FP> {
            summary: FS,
            peg: FP,
        }
        #[async_trait]
        impl<FS, FP> YfSummary for FnSummary<FS, FP>
        where
            FS: Send + Sync + 'static + Fn(String) -> Result<RawInfo, QuError>,
            FP: Send + Sync + 'static + Fn(String) -> Result<Option<f64>, QuError>,
        {
            async fn quote_summary(&self, symbol: &str) -> Result<RawInfo, QuError> {
                (self.summary)(symbol.to_string())
            }
            async fn trailing_peg(&self, symbol: &str) -> Result<Option<f64>, QuError> {
                (self.peg)(symbol.to_string())
            }
        }
        Arc::new(FnSummary {
            summary: fsummary,
            peg: fpeg,
        })
    }

    /// Build a `YfSummary` from a profile closure only (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfSummary>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<RawInfo, QuError>,
    {
        Self::from_fns(f, |_| Ok(None))
    }
}

/// Hands out shared adapter handles for [`crate::YfConnector::from_adapter`].
///
/// Each method defaults to an adapter that reports the capability as
/// unsupported, so test doubles only override what they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(QuError::unsupported(qu_core::Capability::History)))
    }
    /// Clone as `Arc<dyn YfQuotes>`.
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        <dyn YfQuotes>::from_fn(|_| Err(QuError::unsupported(qu_core::Capability::FastInfo)))
    }
    /// Clone as `Arc<dyn YfOptions>`.
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        <dyn YfOptions>::from_fn(|_| {
            Err(QuError::unsupported(qu_core::Capability::OptionsExpirations))
        })
    }
    /// Clone as `Arc<dyn YfSummary>`.
    fn clone_arc_summary(&self) -> Arc<dyn YfSummary> {
        <dyn YfSummary>::from_fn(|_| Err(QuError::unsupported(qu_core::Capability::Info)))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_quotes(&self) -> Arc<dyn YfQuotes> {
        Arc::new(self.clone()) as Arc<dyn YfQuotes>
    }
    fn clone_arc_options(&self) -> Arc<dyn YfOptions> {
        Arc::new(self.clone()) as Arc<dyn YfOptions>
    }
    fn clone_arc_summary(&self) -> Arc<dyn YfSummary> {
        Arc::new(self.clone()) as Arc<dyn YfSummary>
    }
}
