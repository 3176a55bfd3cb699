//! HTTP client for the Notion REST API.
//!
//! Requests carry the bearer token and the `Notion-Version` header; errors
//! are decoded from the API's error body and propagated as-is. There is no
//! retry or backoff layer: a failed call surfaces immediately.

use crate::page::Page;
use crate::schema::Database;
use crate::{NotionConfig, NotionError, ObjectId};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};
use url::Url;

/// Client for Notion's API, focused on databases.
///
/// # Example
///
/// ```no_run
/// use expectations_notion::{NotionClient, NotionConfig, ObjectId};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NotionClient::new(NotionConfig::from_env()?)?;
/// client.check_connection().await?;
///
/// let id = ObjectId::parse("0123456789abcdef0123456789abcdef")?;
/// let pages = client.query_database(&id).await?;
/// println!("{} rows", pages.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NotionClient {
    config: NotionConfig,
    http: reqwest::Client,
}

/// One batch of the paginated query endpoint.
#[derive(Debug, Deserialize)]
struct QueryBatch {
    results: Vec<Page>,
    has_more: bool,
    next_cursor: Option<String>,
}

impl NotionClient {
    /// Creates a client from a validated configuration.
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &NotionConfig {
        &self.config
    }

    /// Verifies the key can call the API at all with a cheap request.
    pub async fn check_connection(&self) -> Result<(), NotionError> {
        debug!("Checking Notion API connection");
        self.get_json("users").await.map(|_| ())
    }

    /// Retrieves a database object (schema and metadata, not rows).
    pub async fn get_database(&self, id: &ObjectId) -> Result<Database, NotionError> {
        debug!(database = %id, "Retrieving database schema");
        let body = self.get_json(&format!("databases/{id}")).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Retrieves a single page.
    pub async fn get_page(&self, id: &ObjectId) -> Result<Page, NotionError> {
        debug!(page = %id, "Retrieving page");
        let body = self.get_json(&format!("pages/{id}")).await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Queries all rows of a database.
    ///
    /// The endpoint returns at most `page_size` rows per call; follow-up
    /// calls carry the cursor from the previous response until `has_more`
    /// is false. Pagination is sequential by design.
    pub async fn query_database(&self, id: &ObjectId) -> Result<Vec<Page>, NotionError> {
        let path = format!("databases/{id}/query");
        let mut body = json!({ "page_size": self.config.page_size });
        let mut pages = Vec::new();

        loop {
            let response = self.post_json(&path, &body).await?;
            let batch: QueryBatch = serde_json::from_value(response)?;
            pages.extend(batch.results);

            match (batch.has_more, batch.next_cursor) {
                (true, Some(cursor)) => {
                    debug!(database = %id, fetched = pages.len(), "Following query cursor");
                    body["start_cursor"] = serde_json::Value::String(cursor);
                }
                _ => break,
            }
        }

        info!(database = %id, rows = pages.len(), "Queried all database rows");
        Ok(pages)
    }

    /// Sends a GET request and decodes the JSON response.
    async fn get_json(&self, path: &str) -> Result<serde_json::Value, NotionError> {
        let response = self
            .http
            .get(self.endpoint(path)?)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", &self.config.notion_version)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Sends a POST request with a JSON body and decodes the response.
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, NotionError> {
        let response = self
            .http
            .post(self.endpoint(path)?)
            .bearer_auth(&self.config.api_key)
            .header("Notion-Version", &self.config.notion_version)
            .json(body)
            .send()
            .await?;

        Self::decode(response).await
    }

    /// Joins a path onto the configured base URL.
    fn endpoint(&self, path: &str) -> Result<Url, NotionError> {
        let base = format!("{}/", self.config.base_url.trim_end_matches('/'));
        Ok(Url::parse(&base)?.join(path)?)
    }

    /// Turns a non-success response into the API's own error message.
    async fn decode(response: reqwest::Response) -> Result<serde_json::Value, NotionError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Error bodies look like {"object": "error", "status": 401,
        // "code": "unauthorized", "message": "..."}
        let body: serde_json::Value = response.json().await.unwrap_or_default();
        Err(NotionError::Api {
            status: status.as_u16(),
            code: body["code"].as_str().unwrap_or("unknown").to_string(),
            message: body["message"]
                .as_str()
                .unwrap_or("no error message in response")
                .to_string(),
        })
    }
}
