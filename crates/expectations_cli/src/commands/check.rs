use anyhow::{bail, Context, Result};
use expectations_parser::parse_file;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(suite_path: &str) -> Result<()> {
    info!("Checking suite definition: {}", suite_path);

    let path = Path::new(suite_path);
    let suite = parse_file(path)
        .with_context(|| format!("Failed to parse suite file: {}", suite_path))?;

    output::print_info(&format!(
        "Suite loaded: {} v{} (owner: {})",
        suite.name, suite.version, suite.owner
    ));

    // Print suite summary
    println!("\nSuite Summary:");
    println!("  Name:         {}", suite.name);
    println!("  Version:      {}", suite.version);
    println!("  Owner:        {}", suite.owner);
    println!(
        "  Description:  {}",
        suite.description.as_deref().unwrap_or("N/A")
    );
    println!("  Expectations: {}", suite.expectations.len());

    let mut by_kind: BTreeMap<&str, usize> = BTreeMap::new();
    for expectation in &suite.expectations {
        *by_kind.entry(expectation.kind()).or_default() += 1;
    }
    for (kind, count) in by_kind {
        println!("    {:<22} {}", kind, count);
    }

    let defects = suite.lint();
    if !defects.is_empty() {
        let listing: Vec<String> = defects.iter().map(|d| format!("  - {d}")).collect();
        bail!("Suite definition has problems:\n{}", listing.join("\n"));
    }

    output::print_success("Suite definition is valid");

    Ok(())
}
