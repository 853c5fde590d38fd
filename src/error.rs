use reqwest::StatusCode;
use thiserror::Error;

/// Why an upstream request produced no data.
///
/// Callers only ever see one fallback sentence per step; the variant is kept
/// for logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid JSON body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Tool arguments that fall outside the published input schema
#[derive(Debug, Error, PartialEq)]
pub enum ArgumentError {
    #[error("state must be exactly 2 characters, got {0}")]
    StateLength(usize),

    #[error("latitude must be between -90 and 90, got {0}")]
    Latitude(f64),

    #[error("longitude must be between -180 and 180, got {0}")]
    Longitude(f64),
}
