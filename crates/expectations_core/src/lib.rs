//! # Expectations Core
//!
//! Core data structures and types for the Notion Expectations Engine.
//!
//! This crate provides the building blocks for defining and working with
//! expectation suites. An expectation suite is a named collection of
//! data-quality rules ("expectations") evaluated against a tabular dataset.
//!
//! ## Key Concepts
//!
//! - **Suite**: a named, versioned collection of expectations
//! - **Expectation**: a single data-quality rule (e.g., "values in column
//!   X are never null")
//! - **SuiteReport**: the outcome of running a suite against a dataset
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Expectation, SuiteBuilder};
//!
//! let suite = SuiteBuilder::new("directory", "data-team")
//!     .description("Company directory database")
//!     .column_exists("Name")
//!     .values_not_null("Name")
//!     .expectation(Expectation::ValuesInSet {
//!         column: "Status".to_string(),
//!         values: vec!["active".to_string(), "inactive".to_string()],
//!         mostly: None,
//!     })
//!     .build();
//!
//! assert!(suite.lint().is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod run;
pub mod suite;

pub use builder::*;
pub use error::*;
pub use run::*;
pub use suite::*;
