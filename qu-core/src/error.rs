use thiserror::Error;

use crate::Capability;

/// Unified error type for the qu workspace.
///
/// Connectors normalize transport and payload failures into these variants so
/// the report driver can decide between "placeholder", "skip this symbol" and
/// "abort the run" without looking at provider-specific errors.
#[derive(Debug, Error)]
pub enum QuError {
    /// No registered connector offers this role.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability that was requested.
        capability: Capability,
    },

    /// Issues with the returned payload (malformed JSON, missing sections, etc.).
    #[error("bad payload: {0}")]
    Data(String),

    /// Rejected input, such as a malformed ticker or an env setting.
    #[error("invalid input: {0}")]
    InvalidArg(String),

    /// The connector itself failed (transport, rate limit, server error).
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Name of the failing connector.
        connector: String,
        /// What went wrong, e.g. `server error 503`.
        msg: String,
    },

    /// A symbol or resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "profile for AAPL".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("{0}")]
    Other(String),
}

impl QuError {
    /// Helper: build an `Unsupported` error for a capability.
    #[must_use]
    pub const fn unsupported(capability: Capability) -> Self {
        Self::Unsupported { capability }
    }

    /// Connector failure tagged with the connector's name.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Missing resource, described like `history for KO`.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }
}

impl From<serde_json::Error> for QuError {
    fn from(err: serde_json::Error) -> Self {
        Self::Data(err.to_string())
    }
}
