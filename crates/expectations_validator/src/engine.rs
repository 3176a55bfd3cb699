//! Main expectation execution engine.
//!
//! [`ExpectationEngine`] runs a suite against a dataset and assembles the
//! [`SuiteReport`]. Every expectation produces an outcome, including ones
//! whose definition turns out to be unusable at run time (e.g., an invalid
//! regex): a validation run always yields a complete report.

use crate::{column, freshness, table, DataSet};
use chrono::Utc;
use expectations_core::{Expectation, ExpectationOutcome, RunContext, RunStats, Suite, SuiteReport};
use regex::Regex;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, warn};

/// Executes expectation suites against datasets.
///
/// # Example
///
/// ```rust
/// use expectations_core::{RunContext, SuiteBuilder};
/// use expectations_validator::{DataRow, DataSet, DataValue, ExpectationEngine};
///
/// let suite = SuiteBuilder::new("directory", "data-team")
///     .values_not_null("Name")
///     .build();
///
/// let mut row = DataRow::new();
/// row.insert("Name".to_string(), DataValue::String("Ada".to_string()));
/// let dataset = DataSet::from_rows(vec![row]);
///
/// let mut engine = ExpectationEngine::new();
/// let report = engine.run(&suite, &dataset, "Directory", &RunContext::new());
/// assert!(report.passed);
/// ```
pub struct ExpectationEngine {
    /// Cache of compiled regex patterns
    regex_cache: HashMap<String, Regex>,
}

impl ExpectationEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Runs a suite against a dataset and returns the report.
    ///
    /// # Arguments
    ///
    /// * `suite` - The expectation suite to execute
    /// * `dataset` - The data to validate
    /// * `data_asset` - Name of the dataset (appears in reports and docs)
    /// * `ctx` - Run options and metadata
    pub fn run(
        &mut self,
        suite: &Suite,
        dataset: &DataSet,
        data_asset: &str,
        ctx: &RunContext,
    ) -> SuiteReport {
        let start = Instant::now();

        let dataset = match ctx.sample_size {
            Some(size) => dataset.sample(size),
            None => dataset.clone(),
        };

        debug!(
            suite = %suite.name,
            rows = dataset.len(),
            expectations = suite.expectations.len(),
            "Running expectation suite"
        );

        let results: Vec<ExpectationOutcome> = suite
            .expectations
            .iter()
            .map(|expectation| self.evaluate(expectation, &dataset))
            .collect();

        let passed = results.iter().all(|outcome| outcome.success);

        SuiteReport {
            suite_name: suite.name.clone(),
            data_asset: data_asset.to_string(),
            run_name: ctx.run_name.clone(),
            run_time: Utc::now().to_rfc3339(),
            passed,
            results,
            stats: RunStats {
                rows_validated: dataset.len(),
                expectations_evaluated: suite.expectations.len(),
                duration_ms: start.elapsed().as_millis() as u64,
            },
        }
    }

    /// Evaluates a single expectation against the dataset.
    fn evaluate(&mut self, expectation: &Expectation, dataset: &DataSet) -> ExpectationOutcome {
        let description = expectation.describe();

        match expectation {
            Expectation::ColumnExists { column } => {
                table::check_column_exists(description, dataset, column)
            }
            Expectation::ValuesNotNull { column, mostly } => {
                column::check_values_not_null(description, dataset, column, *mostly)
            }
            Expectation::ValuesUnique { columns } => {
                column::check_values_unique(description, dataset, columns)
            }
            Expectation::ValuesInSet {
                column,
                values,
                mostly,
            } => column::check_values_in_set(description, dataset, column, values, *mostly),
            Expectation::ValuesBetween {
                column,
                min,
                max,
                mostly,
            } => column::check_values_between(description, dataset, column, *min, *max, *mostly),
            Expectation::ValuesMatchPattern {
                column,
                regex,
                mostly,
            } => match self.get_or_compile_regex(regex) {
                Ok(compiled) => column::check_values_match_pattern(
                    description,
                    dataset,
                    column,
                    compiled,
                    *mostly,
                ),
                Err(error) => {
                    warn!(pattern = %regex, %error, "Invalid regex in expectation");
                    ExpectationOutcome::failure(description, format!("invalid regex: {error}"))
                }
            },
            Expectation::ValuesOfType { column, value_type } => {
                column::check_values_of_type(description, dataset, column, value_type)
            }
            Expectation::RowCountBetween { min, max } => {
                table::check_row_count_between(description, dataset, *min, *max)
            }
            Expectation::ValuesRecentWithin { column, max_delay } => {
                freshness::check_values_recent_within(description, dataset, column, max_delay)
            }
        }
    }

    /// Gets a compiled regex from cache or compiles and caches it.
    fn get_or_compile_regex(&mut self, pattern: &str) -> Result<&Regex, regex::Error> {
        if !self.regex_cache.contains_key(pattern) {
            let regex = Regex::new(pattern)?;
            self.regex_cache.insert(pattern.to_string(), regex);
        }
        Ok(&self.regex_cache[pattern])
    }
}

impl Default for ExpectationEngine {
    fn default() -> Self {
        Self::new()
    }
}
