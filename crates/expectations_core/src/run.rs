//! Validation run context and report types.
//!
//! A validation run takes a suite and a dataset and produces a
//! [`SuiteReport`]: one [`ExpectationOutcome`] per expectation plus
//! overall statistics. Reports serialize to JSON so they can be stored
//! and rendered into Data Docs.

use serde::{Deserialize, Serialize};

/// Context for a validation run.
///
/// Carries run metadata and options that are independent of the suite
/// itself, such as the run name that later appears in Data Docs.
#[derive(Debug, Default, Clone)]
pub struct RunContext {
    /// Name of this run, shown in reports and Data Docs
    pub run_name: Option<String>,

    /// Maximum number of rows to validate (validates all when unset)
    pub sample_size: Option<usize>,

    /// Additional metadata attached to the run
    pub metadata: std::collections::HashMap<String, String>,
}

impl RunContext {
    /// Creates a new run context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the run name.
    pub fn with_run_name(mut self, run_name: impl Into<String>) -> Self {
        self.run_name = Some(run_name.into());
        self
    }

    /// Sets the sample size.
    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    /// Adds metadata to the context.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Report of a suite run against one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    /// Name of the suite that was executed
    pub suite_name: String,

    /// Name of the dataset the suite ran against (e.g., the database title)
    pub data_asset: String,

    /// Run name, if one was provided
    pub run_name: Option<String>,

    /// When the run happened (RFC 3339)
    pub run_time: String,

    /// Whether every expectation succeeded
    pub passed: bool,

    /// One outcome per expectation, in suite order
    pub results: Vec<ExpectationOutcome>,

    /// Run statistics
    pub stats: RunStats,
}

impl SuiteReport {
    /// Number of expectations that succeeded.
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    /// Number of expectations that failed.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }
}

/// Outcome of a single expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectationOutcome {
    /// Human-readable description of the expectation
    pub description: String,

    /// Whether the expectation was met
    pub success: bool,

    /// Number of values (or rows) that were evaluated
    pub element_count: usize,

    /// Number of evaluated values that did not meet the expectation
    pub unexpected_count: usize,

    /// `unexpected_count` as a percentage of `element_count`
    pub unexpected_percent: f64,

    /// Sample of offending values (capped), for reports and Data Docs
    pub unexpected_samples: Vec<String>,

    /// Extra detail when the outcome is not a simple count (e.g., a parse
    /// failure in the expectation definition)
    pub detail: Option<String>,
}

impl ExpectationOutcome {
    /// Creates a passing outcome with no evaluated elements.
    pub fn trivial_pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            success: true,
            element_count: 0,
            unexpected_count: 0,
            unexpected_percent: 0.0,
            unexpected_samples: Vec::new(),
            detail: None,
        }
    }

    /// Creates an outcome from evaluation counts.
    ///
    /// `mostly` is the minimum passing fraction; `None` means all values
    /// must meet the expectation.
    pub fn from_counts(
        description: impl Into<String>,
        element_count: usize,
        unexpected_count: usize,
        unexpected_samples: Vec<String>,
        mostly: Option<f64>,
    ) -> Self {
        let unexpected_percent = if element_count == 0 {
            0.0
        } else {
            unexpected_count as f64 / element_count as f64 * 100.0
        };

        let success = if element_count == 0 {
            true
        } else {
            let observed = (element_count - unexpected_count) as f64 / element_count as f64;
            observed >= mostly.unwrap_or(1.0)
        };

        Self {
            description: description.into(),
            success,
            element_count,
            unexpected_count,
            unexpected_percent,
            unexpected_samples,
            detail: None,
        }
    }

    /// Creates a failing outcome with an explanatory detail message.
    pub fn failure(description: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            success: false,
            element_count: 0,
            unexpected_count: 0,
            unexpected_percent: 0.0,
            unexpected_samples: Vec::new(),
            detail: Some(detail.into()),
        }
    }

    /// Attaches a detail message.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Statistics about a validation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunStats {
    /// Number of rows validated
    pub rows_validated: usize,

    /// Number of expectations evaluated
    pub expectations_evaluated: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
