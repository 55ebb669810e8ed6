use std::time::Duration;

use qu_core::QuError;

use crate::YfConnector;
use crate::adapter::RealAdapter;
use crate::config::YfConfig;

/// Builder for a production [`YfConnector`].
#[derive(Debug, Default)]
pub struct YfConnectorBuilder {
    cfg: YfConfig,
    http: Option<reqwest::Client>,
}

impl YfConnectorBuilder {
    /// Start from an explicit configuration.
    #[must_use]
    pub fn with_config(mut self, cfg: YfConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Override the API host (tests point this at a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.base_url = url.into();
        self
    }

    /// Override the cookie priming host.
    #[must_use]
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cfg.cookie_url = url.into();
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.cfg.user_agent = ua.into();
        self
    }

    /// Override the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.cfg.timeout = timeout;
        self
    }

    /// Enable or disable the cookie/crumb handshake.
    #[must_use]
    pub const fn use_crumb(mut self, yes: bool) -> Self {
        self.cfg.use_crumb = yes;
        self
    }

    /// Use a caller-provided client instead of building one.
    ///
    /// It backs both the `YfClient` and the quoteSummary requests, so it
    /// should enable a cookie store. The timeout of this builder is not
    /// applied to it.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Finish building.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the `YfClient` cannot be constructed.
    pub fn build(self) -> Result<YfConnector, QuError> {
        let adapter = match self.http {
            Some(http) => RealAdapter::with_http(http, self.cfg)?,
            None => RealAdapter::from_config(self.cfg)?,
        };
        Ok(YfConnector::from_real(&adapter))
    }
}
