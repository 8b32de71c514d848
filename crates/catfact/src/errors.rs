use reqwest::StatusCode;
use thiserror::Error;

/// Returned when the upstream answered but no usable fact could be read.
pub const MISSING_FACT_FALLBACK: &str = "Cats are mysterious creatures!";

/// Returned for every other upstream failure.
pub const FETCH_FAILED_FALLBACK: &str = "Could not fetch a cat fact at this time.";

#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FactError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(StatusCode),

    #[error("Response body is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Response has no string field `{0}`")]
    MissingField(String),
}

impl FactError {
    /// The text served in place of a fact when this error occurs.
    pub fn fallback(&self) -> &'static str {
        match self {
            FactError::MissingField(_) => MISSING_FACT_FALLBACK,
            _ => FETCH_FAILED_FALLBACK,
        }
    }
}

pub type FactResult<T> = Result<T, FactError>;
