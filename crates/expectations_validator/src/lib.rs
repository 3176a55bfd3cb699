//! # Expectations Validator
//!
//! Execution engine for expectation suites. This crate provides the
//! row-oriented dataset representation and the engine that evaluates each
//! expectation against it:
//!
//! - Column checks (not-null, in-set, between, pattern, type, uniqueness)
//!   with optional `mostly` thresholds and unexpected-value sampling
//! - Table checks (column presence, row count bounds)
//! - Staleness checks over timestamp columns
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{RunContext, SuiteBuilder};
//! use expectations_validator::{DataRow, DataSet, DataValue, ExpectationEngine};
//!
//! let suite = SuiteBuilder::new("directory", "data-team")
//!     .values_not_null("Name")
//!     .build();
//!
//! let mut row = DataRow::new();
//! row.insert("Name".to_string(), DataValue::String("Ada".to_string()));
//! let dataset = DataSet::from_rows(vec![row]);
//!
//! let mut engine = ExpectationEngine::new();
//! let report = engine.run(&suite, &dataset, "Directory", &RunContext::new());
//!
//! if report.passed {
//!     println!("Validation passed!");
//! }
//! ```

mod column;
mod dataset;
mod engine;
mod freshness;
mod table;

pub use dataset::*;
pub use engine::*;
pub use freshness::{parse_duration, parse_timestamp};
