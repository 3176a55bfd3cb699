use anyhow::{Context, Result};
use expectations_core::{RunContext, Suite};
use expectations_docs::DataDocs;
use expectations_notion::{NotionConfig, NotionValidator, ObjectId};
use expectations_parser::{parse_file, SuiteStore};
use std::path::Path;
use tracing::info;

use crate::output;

#[allow(clippy::too_many_arguments)]
pub async fn execute(
    db: &str,
    suite_ref: &str,
    run_name: Option<&str>,
    suites_dir: &str,
    docs_dir: &str,
    sample_size: Option<usize>,
    format: &str,
) -> Result<()> {
    info!("Validating database: {}", db);
    info!("Suite: {}", suite_ref);
    if let Some(run_name) = run_name {
        info!("Run name: {}", run_name);
    }
    if let Some(size) = sample_size {
        info!("Sample size: {}", size);
    }

    // Resolve the suite before touching the network
    let suite = load_suite(suite_ref, suites_dir)?;

    output::print_info(&format!(
        "Suite loaded: {} v{} (owner: {}, {} expectation(s))",
        suite.name,
        suite.version,
        suite.owner,
        suite.expectations.len()
    ));

    suite
        .ensure_runnable()
        .with_context(|| format!("Suite '{}' is not runnable", suite.name))?;

    // Resolve the database reference before any network traffic
    let database = ObjectId::parse(db)
        .with_context(|| format!("Invalid database reference: {}", db))?;

    // Credentials come from the environment, never from arguments
    let config = NotionConfig::from_env().context(
        "Missing Notion credentials. Export the integration token:\n\
         \n\
         export NOTION_API_KEY=secret_...\n\
         \n\
         The token must have read access to the database being validated.",
    )?;
    let validator = NotionValidator::new(config)?;

    output::print_info("Checking Notion API connection...");
    validator
        .client()
        .check_connection()
        .await
        .context("Failed to reach the Notion API (check the token and network)")?;

    let mut ctx = RunContext::new();
    if let Some(run_name) = run_name {
        ctx = ctx.with_run_name(run_name);
    }
    if let Some(size) = sample_size {
        ctx = ctx.with_sample_size(size);
    }

    output::print_info("Querying Notion database...");
    let report = validator
        .validate_database(database.as_str(), &suite, &ctx)
        .await
        .context("Validation run failed")?;

    // Store the result and refresh the Data Docs site
    let docs = DataDocs::new(docs_dir);
    let index = docs
        .update(&report)
        .context("Failed to update Data Docs")?;
    output::print_info(&format!("Data Docs updated: {}", index.display()));

    output::print_suite_report(&report, format);

    if !report.passed {
        std::process::exit(1);
    }

    Ok(())
}

/// Resolves a suite reference: a path to a suite file, or the name of a
/// suite in the suites directory.
fn load_suite(suite_ref: &str, suites_dir: &str) -> Result<Suite> {
    let path = Path::new(suite_ref);

    if path.is_file() {
        return parse_file(path)
            .with_context(|| format!("Failed to parse suite file: {}", suite_ref));
    }

    SuiteStore::new(suites_dir)
        .load(suite_ref)
        .with_context(|| format!("Failed to load suite '{}' from {}", suite_ref, suites_dir))
}
