//! End-to-end run of a realistic suite against a flattened directory
//! database, the shape produced by the workspace integration: scalar cells
//! plus list cells for multi-selects and relation ids.

use expectations_core::{Expectation, RunContext, SuiteBuilder};
use expectations_validator::{DataRow, DataSet, DataValue, ExpectationEngine};

/// Builds a dataset resembling a flattened company directory database.
fn directory_dataset() -> DataSet {
    let people = [
        ("Ada Lovelace", Some("Engineering"), 1815.0, "active"),
        ("Grace Hopper", Some("Engineering"), 1906.0, "active"),
        ("Alan Turing", Some("Research"), 1912.0, "inactive"),
    ];

    people
        .iter()
        .map(|(name, team, year, status)| {
            let mut row = DataRow::new();
            row.insert("Name".to_string(), DataValue::String(name.to_string()));
            row.insert(
                "Team".to_string(),
                match team {
                    Some(team) => DataValue::String(team.to_string()),
                    None => DataValue::Null,
                },
            );
            row.insert("Born".to_string(), DataValue::Float(*year));
            row.insert("Status".to_string(), DataValue::String(status.to_string()));
            row.insert(
                "Projects".to_string(),
                DataValue::List(vec![
                    DataValue::String("a2c4e6a8-0b1c-4d5e-8f90-123456789abc".to_string()),
                ]),
            );
            row
        })
        .collect()
}

fn directory_suite() -> expectations_core::Suite {
    SuiteBuilder::new("directory", "data-team")
        .description("Company directory database")
        .column_exists("Name")
        .values_not_null("Name")
        .expectation(Expectation::ValuesUnique {
            columns: vec!["Name".to_string()],
        })
        .expectation(Expectation::ValuesInSet {
            column: "Status".to_string(),
            values: vec!["active".to_string(), "inactive".to_string()],
            mostly: None,
        })
        .expectation(Expectation::ValuesBetween {
            column: "Born".to_string(),
            min: Some(1800.0),
            max: Some(2024.0),
            mostly: None,
        })
        .expectation(Expectation::ValuesMatchPattern {
            column: "Projects".to_string(),
            regex: "^[0-9a-f-]{36}$".to_string(),
            mostly: None,
        })
        .expectation(Expectation::RowCountBetween {
            min: Some(1),
            max: Some(1000),
        })
        .build()
}

#[test]
fn test_directory_suite_passes() {
    let suite = directory_suite();
    assert!(suite.lint().is_empty());

    let mut engine = ExpectationEngine::new();
    let report = engine.run(
        &suite,
        &directory_dataset(),
        "Directory",
        &RunContext::new().with_run_name("ci"),
    );

    assert!(report.passed, "Failures: {:#?}", report.results);
    assert_eq!(report.results.len(), 7);
    assert_eq!(report.stats.rows_validated, 3);
    assert_eq!(report.run_name.as_deref(), Some("ci"));
}

#[test]
fn test_directory_suite_catches_bad_rows() {
    let mut dataset = directory_dataset();

    // A row with a duplicate name, an unknown status and an impossible year
    let mut bad = DataRow::new();
    bad.insert("Name".to_string(), DataValue::String("Ada Lovelace".into()));
    bad.insert("Team".to_string(), DataValue::Null);
    bad.insert("Born".to_string(), DataValue::Float(2525.0));
    bad.insert("Status".to_string(), DataValue::String("pending".into()));
    bad.insert(
        "Projects".to_string(),
        DataValue::List(vec![DataValue::String(
            "a2c4e6a8-0b1c-4d5e-8f90-123456789abc".into(),
        )]),
    );
    dataset.add_row(bad);

    let mut engine = ExpectationEngine::new();
    let report = engine.run(
        &directory_suite(),
        &dataset,
        "Directory",
        &RunContext::new(),
    );

    assert!(!report.passed);
    assert_eq!(report.failure_count(), 3);

    let failed: Vec<&str> = report
        .results
        .iter()
        .filter(|outcome| !outcome.success)
        .map(|outcome| outcome.description.as_str())
        .collect();
    assert!(failed.iter().any(|d| d.contains("unique")));
    assert!(failed.iter().any(|d| d.contains("Status")));
    assert!(failed.iter().any(|d| d.contains("Born")));
}

#[test]
fn test_report_serializes_for_docs() {
    let mut engine = ExpectationEngine::new();
    let report = engine.run(
        &directory_suite(),
        &directory_dataset(),
        "Directory",
        &RunContext::new().with_run_name("nightly"),
    );

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["suite_name"], "directory");
    assert_eq!(json["data_asset"], "Directory");
    assert_eq!(json["run_name"], "nightly");
    assert_eq!(json["results"].as_array().unwrap().len(), 7);
}
