//! Gist publisher. Replaces the report file of an existing gist and refreshes `INFO.md`.
//!
//! Credentials are resolved on each publish through a ConfigProvider, so a
//! missing token or gist id surfaces at the publishing boundary.

use crate::domain::DomainError;
use crate::ports::{ConfigProvider, SnippetPublisher};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const ENV_VAR_GITHUB_TOKEN: &str = "GH_TOKEN";
pub const ENV_VAR_GIST_ID: &str = "GIST_ID";

/// Name of the attribution file kept next to the report.
pub const INFO_FILE: &str = "INFO.md";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Markdown body of `INFO.md`.
pub fn info_content() -> String {
    format!(
        "_🔗 [See the source code behind this gist here!]({})_",
        env!("CARGO_PKG_REPOSITORY")
    )
}

/// Picks the gist file that holds the report.
///
/// A file already named `title` wins; otherwise the first listed file other
/// than `INFO.md`; with no candidate, `title` becomes a new file.
pub fn select_target_file(existing: &[String], title: &str) -> String {
    if existing.iter().any(|name| name == title) {
        return title.to_string();
    }
    existing
        .iter()
        .find(|name| name.as_str() != INFO_FILE)
        .cloned()
        .unwrap_or_else(|| title.to_string())
}

/// `GET /gists/{id}` response; only the file listing is used.
#[derive(Deserialize)]
struct GistResponse {
    #[serde(default)]
    files: Map<String, Value>,
}

/// `PATCH /gists/{id}` request body.
#[derive(Serialize)]
struct GistUpdate<'a> {
    description: &'a str,
    files: BTreeMap<String, FileUpdate<'a>>,
}

#[derive(Serialize)]
struct FileUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    filename: Option<&'a str>,
    content: &'a str,
}

struct Credentials {
    token: String,
    gist_id: String,
}

/// GitHub gist publisher.
pub struct GistPublisher {
    client: Client,
    api_url: String,
    config: Arc<dyn ConfigProvider>,
}

impl GistPublisher {
    /// Publisher against api.github.com.
    pub fn new(config: Arc<dyn ConfigProvider>) -> Self {
        Self::with_api_url(DEFAULT_GITHUB_API_URL, config)
    }

    /// Publisher against another GitHub API root (GHES, tests).
    pub fn with_api_url(api_url: impl Into<String>, config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            config,
        }
    }

    fn credentials(&self) -> Result<Credentials, DomainError> {
        Ok(Credentials {
            token: self.config.require(ENV_VAR_GITHUB_TOKEN)?,
            gist_id: self.config.require(ENV_VAR_GIST_ID)?,
        })
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request
            .header("Authorization", format!("Bearer {}", token))
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", USER_AGENT)
    }

    async fn file_names(&self, creds: &Credentials) -> Result<Vec<String>, DomainError> {
        let url = format!("{}/gists/{}", self.api_url, creds.gist_id);
        debug!(url = %url, "reading gist");

        let res = self
            .authorized(self.client.get(&url), &creds.token)
            .send()
            .await
            .map_err(|e| DomainError::Publish(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(status = %status, gist_id = %creds.gist_id, "gist read rejected");
            return Err(DomainError::Publish(format!(
                "GitHub API error {}: {}",
                status, text
            )));
        }

        let gist: GistResponse = res
            .json()
            .await
            .map_err(|e| DomainError::Publish(format!("Failed to parse gist: {}", e)))?;
        Ok(gist.files.keys().cloned().collect())
    }
}

#[async_trait::async_trait]
impl SnippetPublisher for GistPublisher {
    async fn publish(&self, title: &str, content: &str) -> Result<(), DomainError> {
        let creds = self.credentials()?;

        let existing = self.file_names(&creds).await?;
        let target = select_target_file(&existing, title);
        debug!(target = %target, files = existing.len(), "selected gist file");

        let info = info_content();
        let mut files = BTreeMap::new();
        files.insert(
            target.clone(),
            FileUpdate {
                filename: Some(title),
                content,
            },
        );
        files.insert(
            INFO_FILE.to_string(),
            FileUpdate {
                filename: None,
                content: &info,
            },
        );
        let body = GistUpdate {
            description: title,
            files,
        };

        let url = format!("{}/gists/{}", self.api_url, creds.gist_id);
        let res = self
            .authorized(self.client.patch(&url), &creds.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Publish(format!("Request failed: {}", e)))?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_else(|_| "unknown".to_string());
            warn!(status = %status, gist_id = %creds.gist_id, "gist update rejected");
            return Err(DomainError::Publish(format!(
                "GitHub API error {}: {}",
                status, text
            )));
        }

        info!(gist_id = %creds.gist_id, file = %target, "gist updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::StaticConfigProvider;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_target_prefers_title() {
        let files = names(&["old.txt", "Shodan.io Port Usage - US"]);
        assert_eq!(
            select_target_file(&files, "Shodan.io Port Usage - US"),
            "Shodan.io Port Usage - US"
        );
    }

    #[test]
    fn test_select_target_first_non_info() {
        let files = names(&["INFO.md", "report.txt", "other.txt"]);
        assert_eq!(select_target_file(&files, "title"), "report.txt");
    }

    #[test]
    fn test_select_target_empty_gist() {
        assert_eq!(select_target_file(&[], "title"), "title");
        assert_eq!(select_target_file(&names(&["INFO.md"]), "title"), "title");
    }

    #[test]
    fn test_info_content_links_source() {
        let info = info_content();
        assert!(info.contains("See the source code behind this gist here!"));
        assert!(info.contains("](https://"));
    }

    #[tokio::test]
    async fn test_publish_without_token() {
        let publisher = GistPublisher::new(Arc::new(StaticConfigProvider::new()));
        let err = publisher.publish("my title", "my content").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingConfig(ref k) if k == ENV_VAR_GITHUB_TOKEN));
    }

    #[tokio::test]
    async fn test_publish_without_gist_id() {
        let config = StaticConfigProvider::new().with(ENV_VAR_GITHUB_TOKEN, "123");
        let publisher = GistPublisher::new(Arc::new(config));
        let err = publisher.publish("my title", "my content").await.unwrap_err();
        assert!(matches!(err, DomainError::MissingConfig(ref k) if k == ENV_VAR_GIST_ID));
    }
}
