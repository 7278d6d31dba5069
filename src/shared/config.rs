//! Application configuration. Locale and endpoint overrides.
//!
//! Credentials (GH_TOKEN, GIST_ID) are not part of this struct; they are read
//! through the ConfigProvider port when publishing.

use crate::adapters::gist::DEFAULT_GITHUB_API_URL;
use crate::adapters::shodan::DEFAULT_DATA_URL;
use serde::Deserialize;

/// Locale used when neither CLI nor environment names one.
pub const DEFAULT_LOCALE: &str = "US";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Locale code to report on. Read from SHODAN_BOX_LOCALE.
    #[serde(default)]
    pub locale: Option<String>,

    /// Base URL of the exposure-data bucket. Read from SHODAN_BOX_DATA_URL.
    #[serde(default)]
    pub data_url: Option<String>,

    /// GitHub API root. Read from SHODAN_BOX_GITHUB_API_URL.
    #[serde(default)]
    pub github_api_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("SHODAN_BOX_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("SHODAN_BOX"));
        c.build()?.try_deserialize()
    }

    /// Returns the locale. Defaults to "US".
    pub fn locale_or_default(&self) -> String {
        self.locale
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string())
    }

    /// Returns the exposure-data base URL. Defaults to the public Shodan bucket.
    pub fn data_url_or_default(&self) -> String {
        self.data_url
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
    }

    /// Returns the GitHub API root. Defaults to api.github.com.
    pub fn github_api_url_or_default(&self) -> String {
        self.github_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
    }
}
