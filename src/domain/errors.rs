//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Exposure data fetch failed: {0}")]
    Fetch(String),

    #[error("No data: the exposure dataset contains no ports")]
    EmptyDataset,

    /// Logarithm/scale domain error: the value must be strictly positive.
    #[error("{what} must be positive, got {value}")]
    NonPositiveCount { what: &'static str, value: u64 },

    #[error("missing configuration key: {0}")]
    MissingConfig(String),

    #[error("Publish failed: {0}")]
    Publish(String),
}
