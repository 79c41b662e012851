//! Error types for the Pinoy Movies Hub scraper
//!
//! Only transport-level failures are represented here. Parsing never fails:
//! a missing element becomes an empty or absent field instead.
//! PinoyError implements Serialize so hosts can forward it as a plain string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for Pinoy Movies Hub scraper operations
#[derive(Error, Debug)]
pub enum PinoyError {
    /// HTTP request failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Server answered with a non-success status other than 404
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// A configured header value could not be used
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

/// Serialize PinoyError as its display string
impl Serialize for PinoyError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, PinoyError>;
