use anyhow::{Context, Result};
use expectations_docs::DataDocs;
use tracing::info;

use crate::output;

pub fn execute(docs_dir: &str) -> Result<()> {
    info!("Rebuilding Data Docs in: {}", docs_dir);

    let docs = DataDocs::new(docs_dir);
    let runs = docs
        .store()
        .load_all()
        .context("Failed to read stored validation results")?;

    let index = docs.rebuild().context("Failed to rebuild Data Docs")?;

    output::print_success(&format!(
        "Rebuilt Data Docs for {} run(s): {}",
        runs.len(),
        index.display()
    ));

    Ok(())
}
