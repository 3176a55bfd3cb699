//! Example: Configuring the Notion client
//!
//! This example demonstrates how to configure the Notion API client
//! for use with the expectation engine.
//!
//! To run this example:
//! ```bash
//! cargo run --example client_config
//! ```

use expectations_notion::{NotionConfig, ObjectId};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Notion Client Configuration Example ===\n");

    // Create a configuration with explicit settings
    println!("Creating Notion configuration...");
    let config = NotionConfig::builder()
        .api_key("secret_replace_with_real_token")
        .page_size(50) // Rows per query request (max 100)
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("✓ Configuration created successfully!\n");
    println!("Configuration details:");
    println!("  Base URL: {}", config.base_url);
    println!("  API version: {}", config.notion_version);
    println!("  Page size: {}", config.page_size);

    // Database references can be ids or full workspace URLs
    let from_id = ObjectId::parse("0123456789abcdef0123456789abcdef")?;
    let from_url = ObjectId::parse(
        "https://www.notion.so/acme/Company-Directory-0123456789abcdef0123456789abcdef?v=aaaabbbbccccddddaaaabbbbccccdddd",
    )?;

    println!("\n✓ Database references parsed!");
    println!("  From id:  {from_id}");
    println!("  From URL: {from_url}");

    println!("\n=== Example completed successfully ===");
    println!("\nNext steps:");
    println!("  1. Export NOTION_API_KEY and use NotionConfig::from_env()");
    println!("  2. Create a NotionValidator and call validate_database()");
    println!("  3. See the integration tests for complete validation examples");

    Ok(())
}
