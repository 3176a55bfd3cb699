//! Builder pattern for creating expectation suites.
//!
//! This module provides an ergonomic builder for constructing suites
//! programmatically with a fluent API, used mainly by suite generation
//! (`init`) and tests.

use crate::{Expectation, Suite};

/// Builder for creating a `Suite`.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Expectation, SuiteBuilder};
///
/// let suite = SuiteBuilder::new("directory", "data-team")
///     .version("1.0.0")
///     .description("Company directory database")
///     .expectation(Expectation::ValuesNotNull {
///         column: "Name".to_string(),
///         mostly: None,
///     })
///     .build();
///
/// assert_eq!(suite.expectations.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SuiteBuilder {
    name: String,
    owner: String,
    version: Option<String>,
    description: Option<String>,
    expectations: Vec<Expectation>,
}

impl SuiteBuilder {
    /// Creates a new suite builder with required fields.
    ///
    /// # Arguments
    ///
    /// * `name` - Unique suite name
    /// * `owner` - Suite owner identifier
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            ..Default::default()
        }
    }

    /// Sets the suite version (default "1.0.0").
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the suite description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an expectation to the suite.
    pub fn expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Adds multiple expectations to the suite.
    pub fn expectations(mut self, expectations: Vec<Expectation>) -> Self {
        self.expectations.extend(expectations);
        self
    }

    /// Shorthand for a `ColumnExists` expectation.
    pub fn column_exists(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::ColumnExists {
            column: column.into(),
        })
    }

    /// Shorthand for a `ValuesNotNull` expectation without a threshold.
    pub fn values_not_null(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::ValuesNotNull {
            column: column.into(),
            mostly: None,
        })
    }

    /// Builds the suite.
    pub fn build(self) -> Suite {
        Suite {
            version: self.version.unwrap_or_else(|| "1.0.0".to_string()),
            name: self.name,
            owner: self.owner,
            description: self.description,
            expectations: self.expectations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_minimal() {
        let suite = SuiteBuilder::new("test", "team").build();

        assert_eq!(suite.name, "test");
        assert_eq!(suite.owner, "team");
        assert_eq!(suite.version, "1.0.0"); // Default version
        assert!(suite.description.is_none());
        assert!(suite.expectations.is_empty());
    }

    #[test]
    fn test_builder_full() {
        let suite = SuiteBuilder::new("directory", "analytics")
            .version("2.0.0")
            .description("Directory database")
            .column_exists("Name")
            .values_not_null("Name")
            .expectation(Expectation::ValuesUnique {
                columns: vec!["Name".to_string()],
            })
            .build();

        assert_eq!(suite.version, "2.0.0");
        assert_eq!(suite.description, Some("Directory database".to_string()));
        assert_eq!(suite.expectations.len(), 3);
        assert_eq!(suite.expectations[0].kind(), "column_exists");
        assert_eq!(suite.expectations[1].kind(), "values_not_null");
        assert_eq!(suite.expectations[2].kind(), "values_unique");
    }

    #[test]
    fn test_builder_multiple_expectations() {
        let expectations = vec![
            Expectation::ColumnExists {
                column: "A".to_string(),
            },
            Expectation::ColumnExists {
                column: "B".to_string(),
            },
        ];

        let suite = SuiteBuilder::new("test", "team")
            .expectations(expectations)
            .build();

        assert_eq!(suite.expectations.len(), 2);
    }
}
