//! Configuration for the Notion API client.

use crate::NotionError;
use std::time::Duration;

/// Environment variable holding the integration token.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

/// Base URL of the Notion REST API.
const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header.
const DEFAULT_NOTION_VERSION: &str = "2021-08-16";

/// Rows per query request; 100 is the API maximum.
const DEFAULT_PAGE_SIZE: u32 = 100;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for connecting to the Notion API.
///
/// # Example
///
/// ```rust
/// use expectations_notion::NotionConfig;
///
/// let config = NotionConfig::builder()
///     .api_key("secret_abc123")
///     .page_size(50)
///     .build()
///     .unwrap();
/// assert_eq!(config.page_size, 50);
/// ```
#[derive(Debug, Clone)]
pub struct NotionConfig {
    /// Integration token used as the bearer credential
    pub api_key: String,

    /// API base URL (overridable for tests)
    pub base_url: String,

    /// Value of the `Notion-Version` header
    pub notion_version: String,

    /// Rows requested per query call (1 to 100)
    pub page_size: u32,

    /// Per-request timeout
    pub timeout: Duration,
}

impl NotionConfig {
    /// Creates a configuration with default settings for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Creates a new builder for `NotionConfig`.
    pub fn builder() -> NotionConfigBuilder {
        NotionConfigBuilder::default()
    }

    /// Reads the integration token from `NOTION_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `NotionError::MissingApiKey` when the variable is unset and
    /// `NotionError::InvalidApiKey` when it does not look like a token.
    pub fn from_env() -> Result<Self, NotionError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| NotionError::MissingApiKey)?;
        let config = Self::new(api_key);
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), NotionError> {
        if self.api_key.is_empty() {
            return Err(NotionError::MissingApiKey);
        }

        // Integration tokens are issued with a "secret" prefix; catching a
        // wrong value here beats a confusing 401 later
        if !self.api_key.starts_with("secret") {
            return Err(NotionError::InvalidApiKey);
        }

        if self.page_size == 0 || self.page_size > 100 {
            return Err(NotionError::ConfigurationError(format!(
                "page_size must be between 1 and 100, got {}",
                self.page_size
            )));
        }

        Ok(())
    }
}

/// Builder for `NotionConfig`.
#[derive(Debug, Clone, Default)]
pub struct NotionConfigBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    notion_version: Option<String>,
    page_size: Option<u32>,
    timeout: Option<Duration>,
}

impl NotionConfigBuilder {
    /// Sets the integration token.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the `Notion-Version` header value.
    pub fn notion_version(mut self, version: impl Into<String>) -> Self {
        self.notion_version = Some(version.into());
        self
    }

    /// Sets the query page size (1 to 100).
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds and validates the configuration.
    pub fn build(self) -> Result<NotionConfig, NotionError> {
        let mut config = NotionConfig::new(self.api_key.unwrap_or_default());

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(version) = self.notion_version {
            config.notion_version = version;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
