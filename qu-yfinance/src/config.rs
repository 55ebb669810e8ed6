use std::time::Duration;

use qu_core::QuError;

/// Default Yahoo Finance API host.
pub const DEFAULT_BASE_URL: &str = "https://query2.finance.yahoo.com";
/// Host hit once to obtain the session cookie before the crumb request.
pub const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
/// Browser-like user agent; Yahoo rejects obvious non-browser agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

const ENV_TIMEOUT: &str = "QU_HTTP_TIMEOUT_SECS";
const ENV_USER_AGENT: &str = "QU_USER_AGENT";

/// HTTP settings for [`crate::YfConnector`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YfConfig {
    /// API host, without a trailing slash.
    pub base_url: String,
    /// Cookie priming host.
    pub cookie_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether to prime a cookie and attach a crumb to profile requests.
    pub use_crumb: bool,
}

impl Default for YfConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cookie_url: DEFAULT_COOKIE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            use_crumb: true,
        }
    }
}

impl YfConfig {
    /// Defaults overridden by `QU_HTTP_TIMEOUT_SECS` and `QU_USER_AGENT`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the timeout is not a positive integer.
    pub fn from_env() -> Result<Self, QuError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading values through `lookup`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(raw) = lookup(ENV_TIMEOUT) {
            let secs: u64 = raw
                .trim()
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    QuError::InvalidArg(format!("{ENV_TIMEOUT} must be a positive integer, got {raw:?}"))
                })?;
            cfg.timeout = Duration::from_secs(secs);
        }
        if let Some(ua) = lookup(ENV_USER_AGENT).filter(|ua| !ua.trim().is_empty()) {
            cfg.user_agent = ua;
        }
        Ok(cfg)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}
