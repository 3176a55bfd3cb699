//! Database schema model and starter-suite generation.

use crate::page::RichText;
use crate::NotionError;
use expectations_core::{Expectation, Suite, SuiteBuilder};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// A database object from the retrieve-database endpoint.
///
/// Carries the schema (column names and types) and display metadata, not
/// the rows; rows come from the query endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    /// Database id (dashed form)
    pub id: String,

    /// Database title as rich text fragments
    #[serde(default)]
    pub title: Vec<RichText>,

    /// Column definitions keyed by column name
    pub properties: HashMap<String, PropertySchema>,
}

/// Schema of a single database column.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertySchema {
    /// Property id assigned by the API
    #[serde(default)]
    pub id: Option<String>,

    /// Column name
    pub name: String,

    /// Column type (e.g., "title", "number", "relation")
    #[serde(rename = "type")]
    pub kind: String,
}

impl Database {
    /// The database title as plain text.
    pub fn title_text(&self) -> Option<&str> {
        self.title.first().map(|fragment| fragment.plain_text.as_str())
    }

    /// The column acting as the database's primary key: the one of type
    /// `title`, which every database has exactly one of.
    pub fn primary_key(&self) -> Result<&str, NotionError> {
        self.properties
            .values()
            .find(|property| property.kind == "title")
            .map(|property| property.name.as_str())
            .ok_or_else(|| {
                NotionError::MissingTitleColumn(
                    self.title_text().unwrap_or(&self.id).to_string(),
                )
            })
    }

    /// Column names, sorted for stable output.
    pub fn column_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.properties.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Generates a starter expectation suite from a database schema.
///
/// The generated suite expects every column to exist, the title column to
/// always have a value, and the database to be non-empty. It is meant as a
/// baseline to edit, not a finished quality contract.
pub fn suite_from_database(database: &Database, owner: &str) -> Result<Suite, NotionError> {
    let title = database.title_text().unwrap_or(&database.id);
    let suite_name = slugify(title);
    let primary_key = database.primary_key()?;

    debug!(
        database = title,
        columns = database.properties.len(),
        "Generating starter suite from database schema"
    );

    let mut builder = SuiteBuilder::new(suite_name, owner)
        .description(format!("Starter expectation suite for database '{title}'"));

    for column in database.column_names() {
        builder = builder.column_exists(column);
    }

    builder = builder
        .values_not_null(primary_key)
        .expectation(Expectation::RowCountBetween {
            min: Some(1),
            max: None,
        });

    Ok(builder.build())
}

/// Lowercases and underscores a display title into a suite name.
fn slugify(title: &str) -> String {
    let slug: String = title
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    let collapsed = slug
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if collapsed.is_empty() {
        "suite".to_string()
    } else {
        collapsed
    }
}
