use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use eia_api::Configuration as ApiConfiguration;

use crate::error::{EiaError, Result};

/// Configuration for the EIA client
#[derive(Debug, Clone)]
pub struct EiaConfig {
    /// Low-level API client configuration
    pub api_config: Arc<ApiConfiguration>,
    /// Where to persist the route catalog between runs. `None` disables
    /// the cache; the bundled catalog always works without it.
    pub catalog_cache: Option<PathBuf>,
}

impl EiaConfig {
    /// Create a new configuration with the given API key
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_config: Arc::new(ApiConfiguration::new(api_key)),
            catalog_cache: None,
        }
    }

    /// Read configuration from the environment. `EIA_API_KEY` is required;
    /// a missing key is a startup failure, not a per-call one.
    /// `EIA_API_BASE_URL` optionally overrides the endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("EIA_API_KEY")
            .map_err(|_| EiaError::config_error("EIA_API_KEY environment variable not set"))?;
        if api_key.is_empty() {
            return Err(EiaError::config_error("EIA_API_KEY is empty"));
        }

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("EIA_API_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        Ok(config)
    }

    fn update_api<F: FnOnce(&mut ApiConfiguration)>(mut self, f: F) -> Self {
        let mut api_config = (*self.api_config).clone();
        f(&mut api_config);
        self.api_config = Arc::new(api_config);
        self
    }

    /// Override the API base URL (useful for testing against a mock)
    pub fn with_base_url<S: Into<String>>(self, base_url: S) -> Self {
        self.update_api(|api| api.base_path = base_url.into())
    }

    /// Set custom user agent
    pub fn with_user_agent<S: Into<String>>(self, user_agent: S) -> Self {
        self.update_api(|api| api.user_agent = Some(user_agent.into()))
    }

    /// Set the per-request page size limit
    pub fn with_max_page_length(self, max: u64) -> Self {
        self.update_api(|api| api.max_page_length = max.max(1))
    }

    /// Set the hard cap on rows assembled for a single query
    pub fn with_max_total_rows(self, max: u64) -> Self {
        self.update_api(|api| api.max_total_rows = max.max(1))
    }

    /// Set attempts per page before a retryable failure aborts the fetch
    pub fn with_max_attempts(self, attempts: u32) -> Self {
        self.update_api(|api| api.max_attempts = attempts.max(1))
    }

    /// Set the per-request timeout
    pub fn with_request_timeout(self, timeout: Duration) -> Self {
        self.update_api(|api| api.request_timeout = timeout)
    }

    /// Persist the route catalog at the given path between runs
    pub fn with_catalog_cache<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.catalog_cache = Some(path.into());
        self
    }

    /// The default catalog cache location under the platform cache dir,
    /// if one exists
    pub fn default_catalog_cache() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join("eia").join("catalog.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_updates_api_config() {
        let config = EiaConfig::new("key")
            .with_base_url("http://localhost:9999")
            .with_max_page_length(100)
            .with_max_total_rows(500)
            .with_max_attempts(5);

        assert_eq!(config.api_config.base_path, "http://localhost:9999");
        assert_eq!(config.api_config.max_page_length, 100);
        assert_eq!(config.api_config.max_total_rows, 500);
        assert_eq!(config.api_config.max_attempts, 5);
        assert_eq!(config.api_config.api_key, "key");
    }

    #[test]
    fn limits_never_drop_to_zero() {
        let config = EiaConfig::new("key")
            .with_max_page_length(0)
            .with_max_attempts(0);
        assert_eq!(config.api_config.max_page_length, 1);
        assert_eq!(config.api_config.max_attempts, 1);
    }
}
