//! qu-core
//!
//! Core types and traits shared across the qu workspace.
//!
//! - `connector`: the `QuConnector` trait and its capability role traits.
//! - `info`: the untyped provider profile map and its typed projection.
//! - `history`: daily candles, dividends and fast-info fallbacks.
//! - `symbol`: ticker syntax validation.
//!
//! Connectors are async (Tokio); callers await them one at a time.
#![warn(missing_docs)]

mod capability;
/// Connector capability traits and the primary `QuConnector` interface.
pub mod connector;
mod error;
pub mod history;
pub mod info;
mod symbol;

pub use capability::Capability;
pub use connector::QuConnector;
pub use error::QuError;
pub use history::{Candle, Dividend, FastInfo, HistoryMeta, HistoryResponse, Range};
pub use info::{AnalystSummary, Earnings, Quote, Ratios, RawInfo, Recommendation, TickerInfo};
pub use symbol::{Symbol, is_valid_ticker};
