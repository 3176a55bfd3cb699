//! Notion API integration for the Notion Expectations Engine.
//!
//! This crate connects the expectation engine to Notion databases: it
//! handles credentials, pages through the database query endpoint,
//! flattens typed page properties into a rectangular dataset, and runs
//! expectation suites against the result.
//!
//! # Example
//!
//! ```no_run
//! use expectations_core::RunContext;
//! use expectations_notion::{NotionConfig, NotionValidator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Reads NOTION_API_KEY from the environment
//! let validator = NotionValidator::new(NotionConfig::from_env()?)?;
//!
//! // Load a suite
//! // let suite = ...;
//!
//! // Validate a database against the suite
//! // let report = validator
//! //     .validate_database("https://www.notion.so/...?v=...", &suite, &RunContext::new())
//! //     .await?;
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod client;
mod config;
mod flatten;
mod id;
mod page;
mod schema;
mod validator;

pub use client::NotionClient;
pub use config::{NotionConfig, NotionConfigBuilder, API_KEY_ENV};
pub use flatten::{flatten_property, pages_to_dataset};
pub use id::ObjectId;
pub use page::{
    DateValue, FileRef, Page, PageProperty, PropertyValue, RelationRef, RichText, RollupValue,
    SelectOption,
};
pub use schema::{suite_from_database, Database, PropertySchema};
pub use validator::NotionValidator;

/// Error types specific to Notion operations.
#[derive(Error, Debug)]
pub enum NotionError {
    /// The API key environment variable is not set
    #[error("NOTION_API_KEY is not set")]
    MissingApiKey,

    /// The API key does not look like a Notion integration token
    #[error("Notion API key does not start with 'secret'")]
    InvalidApiKey,

    /// Invalid client configuration
    #[error("Invalid Notion configuration: {0}")]
    ConfigurationError(String),

    /// A database/page id or URL could not be parsed
    #[error("Invalid Notion id or URL: {0}")]
    InvalidId(String),

    /// The API answered with a non-success status
    #[error("Notion API error (HTTP {status}, {code}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Notion error code (e.g., "object_not_found", "unauthorized")
        code: String,
        /// Error message from the API
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Failed to decode Notion response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A URL could not be built or parsed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The database has no title-type column to act as its primary key
    #[error("Database '{0}' has no title-type column")]
    MissingTitleColumn(String),
}
