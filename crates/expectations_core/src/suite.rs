//! Expectation suite types and structures.
//!
//! This module contains the core types for defining expectation suites:
//! named collections of data-quality rules that can be executed against
//! a tabular dataset.

use crate::error::SuiteError;
use serde::{Deserialize, Serialize};

/// A named collection of expectations for a dataset.
///
/// A `Suite` is the main entry point for describing the data quality a
/// dataset is expected to meet. Suites are usually written as YAML or TOML
/// files and resolved by name at validation time.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Expectation, Suite};
///
/// let suite = Suite {
///     version: "1.0.0".to_string(),
///     name: "directory".to_string(),
///     owner: "data-team".to_string(),
///     description: Some("Company directory database".to_string()),
///     expectations: vec![Expectation::ValuesNotNull {
///         column: "Name".to_string(),
///         mostly: None,
///     }],
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suite {
    /// Semantic version of the suite (e.g., "1.0.0")
    pub version: String,

    /// Unique name identifying this suite
    pub name: String,

    /// Team or individual responsible for this suite
    pub owner: String,

    /// Human-readable description of the dataset under test
    pub description: Option<String>,

    /// The expectations to evaluate, in order
    pub expectations: Vec<Expectation>,
}

impl Suite {
    /// Checks the suite definition itself (no data involved).
    ///
    /// Returns a list of problems; an empty list means the definition is
    /// well-formed. Useful before attempting to run the suite.
    pub fn lint(&self) -> Vec<SuiteDefect> {
        let mut defects = Vec::new();

        if self.expectations.is_empty() {
            defects.push(SuiteDefect::new(None, "suite has no expectations"));
        }

        for (index, expectation) in self.expectations.iter().enumerate() {
            if let Some(column) = expectation.column() {
                if column.trim().is_empty() {
                    defects.push(SuiteDefect::new(Some(index), "column name is empty"));
                }
            }

            match expectation {
                Expectation::ValuesUnique { columns } => {
                    if columns.is_empty() {
                        defects.push(SuiteDefect::new(
                            Some(index),
                            "values_unique requires at least one column",
                        ));
                    }
                }
                Expectation::ValuesInSet { values, .. } => {
                    if values.is_empty() {
                        defects.push(SuiteDefect::new(
                            Some(index),
                            "values_in_set requires a non-empty value set",
                        ));
                    }
                }
                Expectation::ValuesBetween { min, max, .. } => {
                    if min.is_none() && max.is_none() {
                        defects.push(SuiteDefect::new(
                            Some(index),
                            "values_between requires min and/or max",
                        ));
                    }
                    if let (Some(min), Some(max)) = (min, max) {
                        if min > max {
                            defects.push(SuiteDefect::new(Some(index), "min is greater than max"));
                        }
                    }
                }
                Expectation::RowCountBetween { min, max } => {
                    if min.is_none() && max.is_none() {
                        defects.push(SuiteDefect::new(
                            Some(index),
                            "row_count_between requires min and/or max",
                        ));
                    }
                }
                _ => {}
            }

            if let Some(mostly) = expectation.mostly() {
                if !(0.0..=1.0).contains(&mostly) {
                    defects.push(SuiteDefect::new(
                        Some(index),
                        format!("mostly {mostly} is outside 0.0..=1.0"),
                    ));
                }
            }
        }

        defects
    }

    /// Errors when the definition is not runnable, joining all lint
    /// defects into one message.
    pub fn ensure_runnable(&self) -> Result<(), SuiteError> {
        let defects = self.lint();
        if defects.is_empty() {
            return Ok(());
        }

        let listing: Vec<String> = defects.iter().map(|defect| defect.to_string()).collect();
        Err(SuiteError::invalid(&self.name, listing.join("; ")))
    }
}

/// A problem found while linting a suite definition.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteDefect {
    /// Index of the offending expectation, if the defect is local to one
    pub expectation: Option<usize>,

    /// What is wrong
    pub message: String,
}

impl SuiteDefect {
    fn new(expectation: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            expectation,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SuiteDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expectation {
            Some(index) => write!(f, "expectation #{}: {}", index + 1, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// A single data-quality rule.
///
/// Column-level expectations accept an optional `mostly` fraction: the
/// minimum share of evaluated values (0.0 to 1.0) that must satisfy the
/// rule for it to pass. When omitted, every value must satisfy the rule.
/// Null cells are not evaluated by column-level expectations other than
/// `ValuesNotNull`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Expectation {
    /// The dataset must contain the column
    ColumnExists {
        /// Column name
        column: String,
    },

    /// Column values must not be null or missing
    ValuesNotNull {
        /// Column name
        column: String,
        /// Minimum passing fraction (default 1.0)
        mostly: Option<f64>,
    },

    /// Combinations of the listed columns must be unique across rows
    ValuesUnique {
        /// Columns that must be unique together
        columns: Vec<String>,
    },

    /// Column values must be one of the allowed values
    ValuesInSet {
        /// Column name
        column: String,
        /// List of valid values
        values: Vec<String>,
        /// Minimum passing fraction (default 1.0)
        mostly: Option<f64>,
    },

    /// Numeric column values must lie within the given bounds (inclusive)
    ValuesBetween {
        /// Column name
        column: String,
        /// Minimum value (inclusive)
        min: Option<f64>,
        /// Maximum value (inclusive)
        max: Option<f64>,
        /// Minimum passing fraction (default 1.0)
        mostly: Option<f64>,
    },

    /// String column values must match the regex pattern
    ValuesMatchPattern {
        /// Column name
        column: String,
        /// Regular expression pattern
        regex: String,
        /// Minimum passing fraction (default 1.0)
        mostly: Option<f64>,
    },

    /// Column values must all be of the named type
    ValuesOfType {
        /// Column name
        column: String,
        /// Expected type (e.g., "string", "number", "boolean", "timestamp", "list")
        value_type: String,
    },

    /// The dataset row count must lie within the given bounds (inclusive)
    RowCountBetween {
        /// Minimum row count (inclusive)
        min: Option<usize>,
        /// Maximum row count (inclusive)
        max: Option<usize>,
    },

    /// The most recent timestamp in the column must not be older than `max_delay`
    ValuesRecentWithin {
        /// Column holding timestamps
        column: String,
        /// Maximum allowed staleness (e.g., "1h", "30m", "7d")
        max_delay: String,
    },
}

impl Expectation {
    /// Short snake_case identifier for this expectation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Expectation::ColumnExists { .. } => "column_exists",
            Expectation::ValuesNotNull { .. } => "values_not_null",
            Expectation::ValuesUnique { .. } => "values_unique",
            Expectation::ValuesInSet { .. } => "values_in_set",
            Expectation::ValuesBetween { .. } => "values_between",
            Expectation::ValuesMatchPattern { .. } => "values_match_pattern",
            Expectation::ValuesOfType { .. } => "values_of_type",
            Expectation::RowCountBetween { .. } => "row_count_between",
            Expectation::ValuesRecentWithin { .. } => "values_recent_within",
        }
    }

    /// The single column this expectation targets, if any.
    ///
    /// `ValuesUnique` can span several columns and `RowCountBetween` has
    /// none; both return `None`.
    pub fn column(&self) -> Option<&str> {
        match self {
            Expectation::ColumnExists { column }
            | Expectation::ValuesNotNull { column, .. }
            | Expectation::ValuesInSet { column, .. }
            | Expectation::ValuesBetween { column, .. }
            | Expectation::ValuesMatchPattern { column, .. }
            | Expectation::ValuesOfType { column, .. }
            | Expectation::ValuesRecentWithin { column, .. } => Some(column),
            Expectation::ValuesUnique { .. } | Expectation::RowCountBetween { .. } => None,
        }
    }

    /// The `mostly` fraction, where the expectation supports one.
    pub fn mostly(&self) -> Option<f64> {
        match self {
            Expectation::ValuesNotNull { mostly, .. }
            | Expectation::ValuesInSet { mostly, .. }
            | Expectation::ValuesBetween { mostly, .. }
            | Expectation::ValuesMatchPattern { mostly, .. } => *mostly,
            _ => None,
        }
    }

    /// Human-readable description, used in reports and Data Docs.
    pub fn describe(&self) -> String {
        let mostly_suffix = |mostly: &Option<f64>| match mostly {
            Some(fraction) => format!(" (at least {:.1}% of values)", fraction * 100.0),
            None => String::new(),
        };

        match self {
            Expectation::ColumnExists { column } => {
                format!("column '{column}' exists")
            }
            Expectation::ValuesNotNull { column, mostly } => {
                format!("values in '{column}' are not null{}", mostly_suffix(mostly))
            }
            Expectation::ValuesUnique { columns } => {
                format!("values in [{}] are unique", columns.join(", "))
            }
            Expectation::ValuesInSet {
                column,
                values,
                mostly,
            } => {
                format!(
                    "values in '{column}' are in [{}]{}",
                    values.join(", "),
                    mostly_suffix(mostly)
                )
            }
            Expectation::ValuesBetween {
                column,
                min,
                max,
                mostly,
            } => {
                let bounds = match (min, max) {
                    (Some(min), Some(max)) => format!("between {min} and {max}"),
                    (Some(min), None) => format!("at least {min}"),
                    (None, Some(max)) => format!("at most {max}"),
                    (None, None) => "unbounded".to_string(),
                };
                format!(
                    "values in '{column}' are {bounds}{}",
                    mostly_suffix(mostly)
                )
            }
            Expectation::ValuesMatchPattern {
                column,
                regex,
                mostly,
            } => {
                format!(
                    "values in '{column}' match pattern '{regex}'{}",
                    mostly_suffix(mostly)
                )
            }
            Expectation::ValuesOfType { column, value_type } => {
                format!("values in '{column}' are of type {value_type}")
            }
            Expectation::RowCountBetween { min, max } => match (min, max) {
                (Some(min), Some(max)) => format!("row count is between {min} and {max}"),
                (Some(min), None) => format!("row count is at least {min}"),
                (None, Some(max)) => format!("row count is at most {max}"),
                (None, None) => "row count is unbounded".to_string(),
            },
            Expectation::ValuesRecentWithin { column, max_delay } => {
                format!("most recent value in '{column}' is within {max_delay}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal_suite(expectations: Vec<Expectation>) -> Suite {
        Suite {
            version: "1.0.0".to_string(),
            name: "test".to_string(),
            owner: "team".to_string(),
            description: None,
            expectations,
        }
    }

    #[test]
    fn test_expectation_serde_tag() {
        let expectation = Expectation::ValuesInSet {
            column: "Status".to_string(),
            values: vec!["active".to_string(), "inactive".to_string()],
            mostly: Some(0.9),
        };

        let json = serde_json::to_value(&expectation).unwrap();
        assert_eq!(json["type"], "values_in_set");
        assert_eq!(json["column"], "Status");
        assert_eq!(json["mostly"], 0.9);

        let back: Expectation = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), "values_in_set");
    }

    #[test]
    fn test_column_accessor() {
        let expectation = Expectation::ValuesNotNull {
            column: "Name".to_string(),
            mostly: None,
        };
        assert_eq!(expectation.column(), Some("Name"));

        let expectation = Expectation::RowCountBetween {
            min: Some(1),
            max: None,
        };
        assert_eq!(expectation.column(), None);
    }

    #[test]
    fn test_describe_values_between() {
        let expectation = Expectation::ValuesBetween {
            column: "Score".to_string(),
            min: Some(0.0),
            max: Some(100.0),
            mostly: None,
        };
        assert_eq!(
            expectation.describe(),
            "values in 'Score' are between 0 and 100"
        );
    }

    #[test]
    fn test_lint_empty_suite() {
        let suite = minimal_suite(vec![]);
        let defects = suite.lint();
        assert_eq!(defects.len(), 1);
        assert!(defects[0].message.contains("no expectations"));
    }

    #[test]
    fn test_lint_bad_mostly() {
        let suite = minimal_suite(vec![Expectation::ValuesNotNull {
            column: "Name".to_string(),
            mostly: Some(1.5),
        }]);
        let defects = suite.lint();
        assert_eq!(defects.len(), 1);
        assert_eq!(defects[0].expectation, Some(0));
    }

    #[test]
    fn test_lint_empty_value_set() {
        let suite = minimal_suite(vec![Expectation::ValuesInSet {
            column: "Status".to_string(),
            values: vec![],
            mostly: None,
        }]);
        let defects = suite.lint();
        assert_eq!(defects.len(), 1);
        assert!(defects[0].message.contains("non-empty value set"));
    }

    #[test]
    fn test_lint_inverted_bounds() {
        let suite = minimal_suite(vec![Expectation::ValuesBetween {
            column: "Score".to_string(),
            min: Some(10.0),
            max: Some(1.0),
            mostly: None,
        }]);
        let defects = suite.lint();
        assert_eq!(defects.len(), 1);
        assert!(defects[0].message.contains("greater than max"));
    }

    #[test]
    fn test_ensure_runnable_joins_defects() {
        let suite = minimal_suite(vec![Expectation::ValuesInSet {
            column: "Status".to_string(),
            values: vec![],
            mostly: Some(2.0),
        }]);

        let err = suite.ensure_runnable().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("non-empty value set"));
        assert!(message.contains("mostly"));
    }

    #[test]
    fn test_lint_clean_suite() {
        let suite = minimal_suite(vec![
            Expectation::ColumnExists {
                column: "Name".to_string(),
            },
            Expectation::ValuesUnique {
                columns: vec!["Name".to_string()],
            },
            Expectation::RowCountBetween {
                min: Some(1),
                max: Some(1000),
            },
        ]);
        assert!(suite.lint().is_empty());
    }
}
