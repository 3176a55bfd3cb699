//! Tests to verify consistent null handling across expectation checks.
//!
//! Null and missing cells must behave the same way everywhere:
//! - `values_not_null` counts both against its threshold
//! - Every other column-level check skips them entirely
//!
//! This prevents logical bugs where null cells incorrectly pass or fail
//! value-level expectations.

use expectations_core::{Expectation, RunContext, SuiteBuilder};
use expectations_validator::{DataRow, DataSet, DataValue, ExpectationEngine};

fn run(suite_expectations: Vec<Expectation>, dataset: &DataSet) -> expectations_core::SuiteReport {
    let suite = SuiteBuilder::new("null_handling", "tests")
        .expectations(suite_expectations)
        .build();
    ExpectationEngine::new().run(&suite, dataset, "test_asset", &RunContext::new())
}

fn rows_of(column: &str, values: Vec<DataValue>) -> DataSet {
    values
        .into_iter()
        .map(|value| {
            let mut row = DataRow::new();
            row.insert(column.to_string(), value);
            row
        })
        .collect()
}

#[test]
fn test_null_fails_not_null_expectation() {
    let dataset = rows_of("id", vec![DataValue::String("1".into()), DataValue::Null]);

    let report = run(
        vec![Expectation::ValuesNotNull {
            column: "id".to_string(),
            mostly: None,
        }],
        &dataset,
    );

    assert!(!report.passed, "Null should fail values_not_null");
    assert_eq!(report.results[0].unexpected_count, 1);
}

#[test]
fn test_missing_cell_counts_as_null() {
    let mut dataset = rows_of("id", vec![DataValue::String("1".into())]);
    dataset.add_row(DataRow::new());

    let report = run(
        vec![Expectation::ValuesNotNull {
            column: "id".to_string(),
            mostly: None,
        }],
        &dataset,
    );

    assert!(!report.passed, "Missing cell should count as null");
    assert_eq!(report.results[0].element_count, 2);
    assert_eq!(report.results[0].unexpected_count, 1);
}

#[test]
fn test_null_skips_in_set_check() {
    let dataset = rows_of(
        "status",
        vec![DataValue::String("active".into()), DataValue::Null],
    );

    let report = run(
        vec![Expectation::ValuesInSet {
            column: "status".to_string(),
            values: vec!["active".to_string()],
            mostly: None,
        }],
        &dataset,
    );

    assert!(
        report.passed,
        "Null cells must not be evaluated by values_in_set: {:?}",
        report.results
    );
    assert_eq!(report.results[0].element_count, 1);
}

#[test]
fn test_null_skips_range_check() {
    let dataset = rows_of("score", vec![DataValue::Int(50), DataValue::Null]);

    let report = run(
        vec![Expectation::ValuesBetween {
            column: "score".to_string(),
            min: Some(0.0),
            max: Some(100.0),
            mostly: None,
        }],
        &dataset,
    );

    assert!(report.passed);
    assert_eq!(report.results[0].element_count, 1);
}

#[test]
fn test_null_skips_pattern_check() {
    let dataset = rows_of(
        "email",
        vec![DataValue::String("ada@example.com".into()), DataValue::Null],
    );

    let report = run(
        vec![Expectation::ValuesMatchPattern {
            column: "email".to_string(),
            regex: "^[^@]+@[^@]+$".to_string(),
            mostly: None,
        }],
        &dataset,
    );

    assert!(report.passed);
    assert_eq!(report.results[0].element_count, 1);
}

#[test]
fn test_null_skips_type_check() {
    let dataset = rows_of("done", vec![DataValue::Bool(true), DataValue::Null]);

    let report = run(
        vec![Expectation::ValuesOfType {
            column: "done".to_string(),
            value_type: "boolean".to_string(),
        }],
        &dataset,
    );

    assert!(report.passed);
    assert_eq!(report.results[0].element_count, 1);
}

#[test]
fn test_all_null_column_passes_value_checks_but_fails_not_null() {
    let dataset = rows_of("maybe", vec![DataValue::Null, DataValue::Null]);

    let report = run(
        vec![
            Expectation::ValuesInSet {
                column: "maybe".to_string(),
                values: vec!["x".to_string()],
                mostly: None,
            },
            Expectation::ValuesNotNull {
                column: "maybe".to_string(),
                mostly: None,
            },
        ],
        &dataset,
    );

    assert!(report.results[0].success, "Nothing evaluated, nothing failed");
    assert!(!report.results[1].success);
    assert_eq!(report.results[1].unexpected_count, 2);
}

#[test]
fn test_not_null_mostly_threshold() {
    let mut values: Vec<DataValue> = (0..19).map(|i| DataValue::Int(i)).collect();
    values.push(DataValue::Null);
    let dataset = rows_of("id", values);

    // 95% non-null meets a 0.95 threshold
    let report = run(
        vec![Expectation::ValuesNotNull {
            column: "id".to_string(),
            mostly: Some(0.95),
        }],
        &dataset,
    );
    assert!(report.passed);

    // but not a 0.99 threshold
    let report = run(
        vec![Expectation::ValuesNotNull {
            column: "id".to_string(),
            mostly: Some(0.99),
        }],
        &dataset,
    );
    assert!(!report.passed);
}
