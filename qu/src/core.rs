use std::io::{self, Write};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use qu_core::{
    Capability, Dividend, FastInfo, HistoryResponse, QuConnector, QuError, Quote, Range, RawInfo,
    Symbol, TickerInfo,
};
use tracing::{debug, error, warn};

use crate::config::QuConfig;
use crate::layout::side_by_side;
use crate::report::price::{self, Change};
use crate::report::{Outcome, Report, SkipReason, dividends, panels, quote_table};

/// Source of the current time; swapped out in tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Renders quote snapshots for symbols using the registered connectors.
pub struct Qu {
    connectors: Vec<Arc<dyn QuConnector>>,
    cfg: QuConfig,
    clock: Clock,
}

/// Builder for [`Qu`].
pub struct QuBuilder {
    connectors: Vec<Arc<dyn QuConnector>>,
    cfg: QuConfig,
    clock: Option<Clock>,
}

impl Default for QuBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuBuilder {
    /// Empty builder with [`QuConfig::default`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: QuConfig::default(),
            clock: None,
        }
    }

    /// Register a connector. For each capability the first registered
    /// connector that offers it is used.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn QuConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Replace the whole presentation config.
    #[must_use]
    pub fn config(mut self, cfg: QuConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Number of dividends listed.
    #[must_use]
    pub const fn dividend_rows(mut self, rows: usize) -> Self {
        self.cfg.dividend_rows = rows;
        self
    }

    /// Zone for the time line and dividend dates.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Width of the rule between symbols.
    #[must_use]
    pub const fn separator_width(mut self, width: usize) -> Self {
        self.cfg.separator_width = width;
        self
    }

    /// Use a fixed or custom clock instead of the system time.
    #[must_use]
    pub fn clock<F>(mut self, f: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(f));
        self
    }

    /// Build the driver.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered.
    pub fn build(self) -> Result<Qu, QuError> {
        if self.connectors.is_empty() {
            return Err(QuError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Qu {
            connectors: self.connectors,
            cfg: self.cfg,
            clock: self.clock.unwrap_or_else(|| Arc::new(Utc::now)),
        })
    }
}

/// Totals for one [`Qu::run`].
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Symbols that produced a report (full or cut short).
    pub rendered: usize,
    /// Symbols skipped before rendering.
    pub skipped: usize,
    /// Set when the run stopped at a fatal price lookup.
    pub aborted: Option<QuError>,
}

impl RunSummary {
    /// Process exit status: 1 after a fatal abort, otherwise 0.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        if self.aborted.is_some() { 1 } else { 0 }
    }
}

fn missing(capability: Capability) -> QuError {
    QuError::unsupported(capability)
}

impl Qu {
    /// Start building a new `Qu`.
    #[must_use]
    pub fn builder() -> QuBuilder {
        QuBuilder::new()
    }

    /// Active presentation config.
    #[must_use]
    pub const fn config(&self) -> &QuConfig {
        &self.cfg
    }

    pub(crate) async fn info(&self, symbol: &Symbol) -> Result<RawInfo, QuError> {
        let p = self
            .connectors
            .iter()
            .find_map(|c| c.as_info_provider())
            .ok_or_else(|| missing(Capability::Info))?;
        debug!(%symbol, "fetching profile");
        p.info(symbol).await
    }

    pub(crate) async fn history(
        &self,
        symbol: &Symbol,
        range: Range,
    ) -> Result<HistoryResponse, QuError> {
        let p = self
            .connectors
            .iter()
            .find_map(|c| c.as_history_provider())
            .ok_or_else(|| missing(Capability::History))?;
        debug!(%symbol, range = range.as_str(), "fetching history");
        p.history(symbol, range).await
    }

    async fn dividends(&self, symbol: &Symbol) -> Result<Vec<Dividend>, QuError> {
        let p = self
            .connectors
            .iter()
            .find_map(|c| c.as_dividends_provider())
            .ok_or_else(|| missing(Capability::Dividends))?;
        p.dividends(symbol).await
    }

    async fn options_count(&self, symbol: &Symbol) -> usize {
        let Some(p) = self
            .connectors
            .iter()
            .find_map(|c| c.as_options_expirations_provider())
        else {
            return 0;
        };
        match p.options_expirations(symbol).await {
            Ok(exps) => exps.len(),
            Err(e) => {
                debug!(%symbol, error = %e, "no option expirations");
                0
            }
        }
    }

    async fn fast_info(&self, symbol: &Symbol) -> FastInfo {
        let Some(p) = self.connectors.iter().find_map(|c| c.as_fast_info_provider()) else {
            return FastInfo::default();
        };
        p.fast_info(symbol).await.unwrap_or_else(|e| {
            debug!(%symbol, error = %e, "fast info unavailable");
            FastInfo::default()
        })
    }

    /// Build the report for one raw command-line symbol.
    pub async fn report(&self, raw: &str) -> Outcome {
        let Ok(symbol) = Symbol::new(raw) else {
            return Outcome::Skipped(SkipReason::InvalidSymbol(raw.to_string()));
        };
        let name = symbol.to_string();

        let raw_info = match self.info(&symbol).await {
            Ok(r) => r,
            Err(e) => {
                warn!(%symbol, error = %e, "profile lookup failed");
                return Outcome::Skipped(SkipReason::NotFound(name));
            }
        };
        if raw_info.is_degenerate() {
            return Outcome::Skipped(SkipReason::Delisted(name));
        }
        let info = TickerInfo::from_raw(&raw_info);

        let lookup = match price::discover(self, &symbol, &info).await {
            Ok(l) => l,
            Err(e) => return Outcome::Fatal(e),
        };
        let Some(current) = lookup.current else {
            debug!(%symbol, "no price, skipping");
            return Outcome::Skipped(SkipReason::NoPrice(name));
        };

        let mut fast: Option<FastInfo> = None;
        let previous = match info.previous_close.filter(|p| *p != 0.0) {
            Some(p) => Some(p),
            None => {
                let fi = self.fast_info(&symbol).await;
                let p = fi.previous_close.filter(|p| *p != 0.0);
                fast = Some(fi);
                p
            }
        };
        let Some(previous) = previous else {
            debug!(%symbol, "no previous close, skipping");
            return Outcome::Skipped(SkipReason::NoPreviousClose(name));
        };

        let change = Change::new(current, previous);
        let now = (self.clock)();
        let mut report = Report::new(name.clone());
        for line in price::header_lines(&symbol, &info, change, now, self.cfg.timezone) {
            report.push(line);
        }

        let Some(volume) = info.volume.filter(|v| *v != 0) else {
            return Outcome::Rendered(report.cut(SkipReason::NoVolume(name)));
        };
        let Some(average_volume) = info.average_volume.filter(|v| *v != 0) else {
            return Outcome::Rendered(report.cut(SkipReason::NoAverageVolume(name)));
        };

        let options_count = self.options_count(&symbol).await;
        let mut quote = Quote::new(&info, previous, options_count);
        if quote.open.filter(|o| *o != 0.0).is_none() {
            let fi = match fast.take() {
                Some(fi) => fi,
                None => self.fast_info(&symbol).await,
            };
            quote.open = fi.open.filter(|o| *o != 0.0);
        }
        if let Some(table) = quote_table::render(&quote, volume, average_volume) {
            report.push_block(&table);
        }

        let earnings = panels::earnings(&info.earnings(), change.current);
        let composed = side_by_side(&[
            panels::analysts(&info.analysts(), change.current),
            panels::ratios(&info.ratios(), change.current),
            earnings.table,
        ]);
        if !composed.is_empty() {
            report.push_block(&composed);
        }

        let max_history = match lookup.max_history {
            Some(h) => Some(h),
            None => self
                .history(&symbol, Range::Max)
                .await
                .inspect_err(|e| debug!(%symbol, error = %e, "max history unavailable"))
                .ok(),
        };
        if !max_history.as_ref().is_some_and(HistoryResponse::has_dividends) {
            return Outcome::Rendered(report);
        }

        let divs = self.dividends(&symbol).await.unwrap_or_else(|e| {
            warn!(%symbol, error = %e, "dividend lookup failed");
            vec![]
        });
        if earnings.dividend_yield.is_none() {
            for line in dividends::calculated_lines(&divs, change.current, now) {
                report.push(line);
            }
        }
        if let Some(table) = dividends::table(&divs, self.cfg.dividend_rows, self.cfg.timezone) {
            report.push_block(&table);
        }
        Outcome::Rendered(report)
    }

    /// Render every symbol in order to `out`.
    ///
    /// With more than one symbol, a rule precedes every rendered block after
    /// the first. Stops at the first fatal outcome.
    ///
    /// # Errors
    /// Returns any error from writing to `out`.
    pub async fn run<W: Write>(&self, symbols: &[String], out: &mut W) -> io::Result<RunSummary> {
        let multi = symbols.len() > 1;
        let mut summary = RunSummary::default();

        for raw in symbols {
            match self.report(raw).await {
                Outcome::Rendered(report) => {
                    if multi && summary.rendered > 0 {
                        writeln!(out, "{}", "=".repeat(self.cfg.separator_width))?;
                    }
                    for line in &report.lines {
                        writeln!(out, "{line}")?;
                    }
                    if let Some(notice) = report.cut_short.as_ref().and_then(SkipReason::notice) {
                        writeln!(out, "{notice}")?;
                    }
                    summary.rendered += 1;
                }
                Outcome::Skipped(reason) => {
                    if let Some(notice) = reason.notice() {
                        writeln!(out, "{notice}")?;
                    }
                    summary.skipped += 1;
                }
                Outcome::Fatal(e) => {
                    error!(symbol = %raw, error = %e, "no price history, aborting");
                    summary.aborted = Some(e);
                    break;
                }
            }
        }
        out.flush()?;
        Ok(summary)
    }
}
