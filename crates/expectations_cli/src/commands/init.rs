use anyhow::{Context, Result};
use expectations_notion::{NotionConfig, NotionValidator};
use std::fs::File;
use std::io::Write;
use tracing::info;

use crate::output;

pub async fn execute(db: &str, output_path: Option<&str>, owner: &str) -> Result<()> {
    info!("Generating starter suite from database: {}", db);

    let config = NotionConfig::from_env().context(
        "Missing Notion credentials. Export the integration token:\n\
         \n\
         export NOTION_API_KEY=secret_...",
    )?;
    let validator = NotionValidator::new(config)?;

    output::print_info("Reading database schema from Notion...");
    let suite = validator
        .starter_suite(db, owner)
        .await
        .context("Failed to generate a starter suite from the database schema")?;

    output::print_success(&format!(
        "Generated suite '{}' with {} expectation(s)",
        suite.name,
        suite.expectations.len()
    ));

    // Serialize to YAML
    let yaml = serde_yaml_ng::to_string(&suite).context("Failed to serialize suite to YAML")?;

    // Output to file or stdout
    if let Some(path) = output_path {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path))?;
        file.write_all(yaml.as_bytes())
            .with_context(|| format!("Failed to write to file: {}", path))?;
        output::print_success(&format!("Suite written to: {}", path));
    } else {
        println!("{}", yaml);
    }

    Ok(())
}
