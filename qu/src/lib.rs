//! qu renders a terminal snapshot for one or more ticker symbols.
//!
//! Overview
//! - Routes each lookup to the first registered connector that implements the
//!   matching `qu_core` role (profile, history, dividends, options, fast info).
//! - Walks the price fallbacks: profile price, max-history metadata, then the
//!   last close of a one-month history.
//! - Builds a header, a quote table, three fundamentals panels laid out side by
//!   side, and a dividend table when the symbol pays dividends.
//!
//! Key behaviors
//! - Per-symbol failures are reported and the run continues; only a symbol with
//!   no price history at all aborts the run.
//! - Missing metrics render as `-` placeholders instead of failing the report.
//! - Colour follows `colored`'s global switch, so tests can turn it off.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use qu::Qu;
//! use qu_yfinance::YfConnector;
//!
//! let qu = Qu::builder()
//!     .with_connector(Arc::new(YfConnector::new_default()?))
//!     .build()?;
//! let summary = qu.run(&["AAPL".into(), "KO".into()], &mut std::io::stdout()).await?;
//! ```
#![warn(missing_docs)]

mod config;
mod core;
/// Number and currency formatting helpers.
pub mod format;
/// Outline tables and side-by-side composition.
pub mod layout;
/// Per-symbol report assembly and outcomes.
pub mod report;
/// Metric classifiers and styled cells.
pub mod style;

pub use config::QuConfig;
pub use core::{Clock, Qu, QuBuilder, RunSummary};
pub use report::{Outcome, Report, SkipReason};
