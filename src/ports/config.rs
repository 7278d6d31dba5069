//! Configuration-provider port. Key/value lookup for credentials.
//!
//! The binary reads the process environment; tests substitute fixed values.

use crate::domain::DomainError;
use std::collections::HashMap;

/// Key/value configuration lookup.
pub trait ConfigProvider: Send + Sync {
    /// Value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Value for `key`, or `MissingConfig(key)`. Empty values count as missing.
    fn require(&self, key: &str) -> Result<String, DomainError> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| DomainError::MissingConfig(key.to_string()))
    }
}

/// Reads keys from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvConfigProvider;

impl ConfigProvider for EnvConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed in-memory values.
#[derive(Debug, Default, Clone)]
pub struct StaticConfigProvider {
    values: HashMap<String, String>,
}

impl StaticConfigProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_provider_require() {
        let cfg = StaticConfigProvider::new().with("GH_TOKEN", "abc");
        assert_eq!(cfg.require("GH_TOKEN").unwrap(), "abc");

        let err = cfg.require("GIST_ID").unwrap_err();
        assert!(matches!(err, DomainError::MissingConfig(ref k) if k == "GIST_ID"));
        assert_eq!(err.to_string(), "missing configuration key: GIST_ID");
    }

    #[test]
    fn test_empty_value_is_missing() {
        let cfg = StaticConfigProvider::new().with("GIST_ID", "");
        assert!(matches!(
            cfg.require("GIST_ID"),
            Err(DomainError::MissingConfig(_))
        ));
    }

    #[test]
    fn test_env_provider_unset_key() {
        let cfg = EnvConfigProvider;
        assert!(cfg.get("SHODAN_BOX_TEST_KEY_THAT_IS_NEVER_SET").is_none());
    }
}
