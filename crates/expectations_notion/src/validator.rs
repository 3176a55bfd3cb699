//! Running expectation suites against Notion databases.

use crate::flatten::pages_to_dataset;
use crate::schema::suite_from_database;
use crate::{NotionClient, NotionConfig, NotionError, ObjectId};
use expectations_core::{RunContext, Suite, SuiteReport};
use expectations_validator::ExpectationEngine;
use tracing::info;

/// Validator that fetches a Notion database and runs a suite against it.
///
/// This is the end-to-end path: resolve the database id, fetch the schema
/// for the data-asset name, page through all rows, flatten them, and hand
/// the dataset to the expectation engine.
///
/// # Example
///
/// ```no_run
/// use expectations_core::RunContext;
/// use expectations_notion::{NotionConfig, NotionValidator};
///
/// # async fn example(suite: expectations_core::Suite) -> Result<(), Box<dyn std::error::Error>> {
/// let validator = NotionValidator::new(NotionConfig::from_env()?)?;
/// let report = validator
///     .validate_database("0123456789abcdef0123456789abcdef", &suite, &RunContext::new())
///     .await?;
///
/// if report.passed {
///     println!("Validation passed!");
/// }
/// # Ok(())
/// # }
/// ```
pub struct NotionValidator {
    client: NotionClient,
}

impl NotionValidator {
    /// Creates a validator with the given configuration.
    pub fn new(config: NotionConfig) -> Result<Self, NotionError> {
        Ok(Self {
            client: NotionClient::new(config)?,
        })
    }

    /// The underlying API client.
    pub fn client(&self) -> &NotionClient {
        &self.client
    }

    /// Validates a database against a suite.
    ///
    /// # Arguments
    ///
    /// * `database` - Database id or full workspace URL
    /// * `suite` - The expectation suite to run
    /// * `ctx` - Run options and metadata
    pub async fn validate_database(
        &self,
        database: &str,
        suite: &Suite,
        ctx: &RunContext,
    ) -> Result<SuiteReport, NotionError> {
        let id = ObjectId::parse(database)?;
        info!(database = %id, suite = %suite.name, "Validating Notion database");

        let schema = self.client.get_database(&id).await?;
        let data_asset = schema
            .title_text()
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string());

        let pages = self.client.query_database(&id).await?;
        let dataset = pages_to_dataset(&pages);

        let mut engine = ExpectationEngine::new();
        let report = engine.run(suite, &dataset, &data_asset, ctx);

        info!(
            data_asset = %report.data_asset,
            passed = report.passed,
            failures = report.failure_count(),
            "Validation run finished"
        );

        Ok(report)
    }

    /// Generates a starter suite from a database's schema.
    ///
    /// Used by `init` to bootstrap a suite file the user then edits.
    pub async fn starter_suite(&self, database: &str, owner: &str) -> Result<Suite, NotionError> {
        let id = ObjectId::parse(database)?;
        let schema = self.client.get_database(&id).await?;
        suite_from_database(&schema, owner)
    }
}
