//! Error types for unit lookup, conversion and the currency service

use thiserror::Error;

/// Failure to produce a converted value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Name matched no alias, even after currency discovery
    #[error("Invalid unit {0}")]
    UnknownUnit(String),

    /// Units belong to different dimensions
    #[error("Can't convert from {from} to {to}")]
    DimensionMismatch { from: String, to: String },

    /// Rate lookup failed; details are logged, not surfaced
    #[error("currency conversion not available right now")]
    CurrencyServiceUnavailable,
}

/// Failure talking to the remote rate service
#[derive(Debug, Error)]
pub enum CurrencyServiceError {
    #[error("currency API key not configured")]
    MissingCredential,

    #[error("currency service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected currency service response: {0}")]
    UnexpectedResponse(String),
}
