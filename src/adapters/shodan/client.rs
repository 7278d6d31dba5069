//! Fetches `<base>/exposure-data/<locale>.json` and maps it to an ExposureDataset.

use crate::domain::{DomainError, ExposureDataset, PortEntry};
use crate::ports::ExposureSource;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Public bucket hosting the per-locale exposure files.
pub const DEFAULT_DATA_URL: &str = "https://shodan.nyc3.digitaloceanspaces.com";

/// URL of the exposure file for `locale` under `base_url`.
pub fn build_url(base_url: &str, locale: &str) -> String {
    format!(
        "{}/exposure-data/{}.json",
        base_url.trim_end_matches('/'),
        locale
    )
}

/// Wire shape of the exposure file. Other top-level fields are ignored.
#[derive(Deserialize)]
struct ExposureResponse {
    ports: Vec<(String, u64)>,
}

/// HTTP client for the Shodan exposure-data feed.
pub struct ShodanExposureClient {
    client: Client,
    base_url: String,
}

impl ShodanExposureClient {
    /// Client against the public feed.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_DATA_URL)
    }

    /// Client against another host serving the same layout (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for ShodanExposureClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ExposureSource for ShodanExposureClient {
    async fn fetch(&self, locale: &str) -> Result<ExposureDataset, DomainError> {
        let url = build_url(&self.base_url, locale);
        debug!(url = %url, "requesting exposure data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            warn!(status = %status, url = %url, "exposure feed returned error");
            return Err(DomainError::Fetch(format!("{} returned {}", url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Fetch(format!("Failed to read body: {}", e)))?;
        let parsed: ExposureResponse = serde_json::from_str(&body)
            .map_err(|e| DomainError::Fetch(format!("Malformed exposure JSON: {}", e)))?;

        let ports: Vec<PortEntry> = parsed
            .ports
            .into_iter()
            .map(|(label, count)| PortEntry { label, count })
            .collect();

        info!(locale, ports = ports.len(), "fetched exposure data");
        Ok(ExposureDataset::new(locale, ports))
    }
}
