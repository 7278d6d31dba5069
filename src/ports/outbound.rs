//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, ExposureDataset};

/// Source of per-port exposure counts (e.g. the Shodan exposure-data feed).
#[async_trait::async_trait]
pub trait ExposureSource: Send + Sync {
    /// Fetch the dataset for `locale` (e.g. "US"). Entries keep the feed's order.
    async fn fetch(&self, locale: &str) -> Result<ExposureDataset, DomainError>;
}

/// Remote snippet store that holds the rendered report.
#[async_trait::async_trait]
pub trait SnippetPublisher: Send + Sync {
    /// Replace the published report with `content` under `title`.
    ///
    /// # Errors
    /// `MissingConfig` if credentials are absent, `Publish` if the store rejects the update.
    async fn publish(&self, title: &str, content: &str) -> Result<(), DomainError>;
}
