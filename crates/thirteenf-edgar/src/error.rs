//! Error types for EDGAR retrieval and extraction.

use crate::rows::TableKind;
use thiserror::Error;

/// Result type for EDGAR operations.
pub type Result<T> = std::result::Result<T, EdgarError>;

/// Errors that can occur while fetching and extracting EDGAR pages.
#[derive(Debug, Error)]
pub enum EdgarError {
    /// Identifier contains something other than digits
    #[error("TickerError: ticker or CIK must contain digits only (got {0:?})")]
    InvalidIdentifier(String),

    /// Remote host answered with a non-200 status
    #[error("StatusError: status code {status} for {url}")]
    RemoteStatus {
        /// HTTP status code returned by the host
        status: u16,
        /// Requested URL
        url: String,
    },

    /// No response arrived within the configured timeout
    #[error("TimeoutError: no response from {url} within the timeout")]
    Timeout {
        /// Requested URL
        url: String,
    },

    /// Expected container element is absent from the page
    #[error("TickerError: {0}")]
    TableNotFound(String),

    /// A table row does not have the cell count its table kind requires
    #[error("MalformedRowError: {kind} row has {found} cells, expected {expected}")]
    MalformedRow {
        /// Table the row belongs to
        kind: TableKind,
        /// Cell count the table kind requires
        expected: usize,
        /// Cell count actually extracted
        found: usize,
    },

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A link or endpoint could not be turned into a URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A container locator could not be compiled into a selector
    #[error("Invalid selector {selector:?}: {reason}")]
    Selector {
        /// Selector source text
        selector: String,
        /// Parser message
        reason: String,
    },
}

impl EdgarError {
    /// Classify a transport error, splitting timeouts out from other failures.
    pub fn from_transport(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
