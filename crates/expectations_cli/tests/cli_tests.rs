use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the nex binary
#[allow(deprecated)]
fn nex() -> Command {
    let mut cmd = Command::cargo_bin("nex").expect("Failed to find nex binary");
    // Keep the environment hermetic: tests set the token explicitly
    cmd.env_remove("NOTION_API_KEY");
    cmd
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_suite() {
    nex()
        .arg("check")
        .arg(fixture_path("directory_suite.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("directory"))
        .stdout(predicate::str::contains("data-team"))
        .stdout(predicate::str::contains("Suite definition is valid"));
}

#[test]
fn test_check_lists_expectation_kinds() {
    nex()
        .arg("check")
        .arg(fixture_path("directory_suite.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Expectations: 5"))
        .stdout(predicate::str::contains("column_exists"))
        .stdout(predicate::str::contains("values_in_set"))
        .stdout(predicate::str::contains("row_count_between"));
}

#[test]
fn test_check_toml_suite() {
    nex()
        .arg("check")
        .arg(fixture_path("suite.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("toml_suite"))
        .stdout(predicate::str::contains("values_between"));
}

#[test]
fn test_check_invalid_suite() {
    nex()
        .arg("check")
        .arg(fixture_path("invalid_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_defective_suite() {
    nex()
        .arg("check")
        .arg(fixture_path("defective_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty value set"))
        .stderr(predicate::str::contains("mostly"));
}

#[test]
fn test_check_missing_file() {
    nex()
        .arg("check")
        .arg("nonexistent.yml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

// ============================================================================
// validate command tests (offline failure paths)
// ============================================================================

#[test]
fn test_validate_requires_api_key() {
    nex()
        .arg("validate")
        .arg("--db")
        .arg("0123456789abcdef0123456789abcdef")
        .arg("--suite")
        .arg(fixture_path("directory_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTION_API_KEY"));
}

#[test]
fn test_validate_rejects_bad_database_reference() {
    // The id is parsed before any network traffic
    nex()
        .env("NOTION_API_KEY", "secret_test")
        .arg("validate")
        .arg("--db")
        .arg("not-a-database")
        .arg("--suite")
        .arg(fixture_path("directory_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid Notion id"));
}

#[test]
fn test_validate_unknown_named_suite() {
    let suites_dir = TempDir::new().unwrap();

    nex()
        .arg("validate")
        .arg("--db")
        .arg("0123456789abcdef0123456789abcdef")
        .arg("--suite")
        .arg("no_such_suite")
        .arg("--suites-dir")
        .arg(suites_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no_such_suite"));
}

#[test]
fn test_validate_defective_suite_refused_before_network() {
    nex()
        .env("NOTION_API_KEY", "secret_test")
        .arg("validate")
        .arg("--db")
        .arg("0123456789abcdef0123456789abcdef")
        .arg("--suite")
        .arg(fixture_path("defective_suite.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not runnable"));
}

#[test]
fn test_validate_resolves_named_suite_from_dir() {
    // A named suite resolves from --suites-dir; the run then stops at the
    // missing credentials, proving resolution happened first
    let suites_dir = TempDir::new().unwrap();
    fs::copy(
        fixture_path("directory_suite.yml"),
        suites_dir.path().join("directory.yml"),
    )
    .unwrap();

    nex()
        .arg("validate")
        .arg("--db")
        .arg("0123456789abcdef0123456789abcdef")
        .arg("--suite")
        .arg("directory")
        .arg("--suites-dir")
        .arg(suites_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Suite loaded: directory"))
        .stderr(predicate::str::contains("NOTION_API_KEY"));
}

// ============================================================================
// init command tests (offline failure paths)
// ============================================================================

#[test]
fn test_init_requires_api_key() {
    nex()
        .arg("init")
        .arg("--db")
        .arg("0123456789abcdef0123456789abcdef")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOTION_API_KEY"));
}

// ============================================================================
// docs command tests
// ============================================================================

#[test]
fn test_docs_rebuild_empty_store() {
    let docs_dir = TempDir::new().unwrap();

    nex()
        .arg("docs")
        .arg("--docs-dir")
        .arg(docs_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("0 run(s)"));

    let index = docs_dir.path().join("index.html");
    assert!(index.is_file());
    let html = fs::read_to_string(index).unwrap();
    assert!(html.contains("No validation runs stored yet"));
}

#[test]
fn test_docs_rebuild_from_stored_result() {
    let docs_dir = TempDir::new().unwrap();
    let validations = docs_dir.path().join("validations");
    fs::create_dir_all(&validations).unwrap();
    fs::write(
        validations.join("nightly-directory.json"),
        r#"{
            "suite_name": "directory",
            "data_asset": "Company Directory",
            "run_name": "nightly",
            "run_time": "2024-01-15T10:30:00Z",
            "passed": true,
            "results": [{
                "description": "values in 'Name' are not null",
                "success": true,
                "element_count": 12,
                "unexpected_count": 0,
                "unexpected_percent": 0.0,
                "unexpected_samples": [],
                "detail": null
            }],
            "stats": {"rows_validated": 12, "expectations_evaluated": 1, "duration_ms": 4}
        }"#,
    )
    .unwrap();

    nex()
        .arg("docs")
        .arg("--docs-dir")
        .arg(docs_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 run(s)"));

    let index = fs::read_to_string(docs_dir.path().join("index.html")).unwrap();
    assert!(index.contains("Company Directory"));
    assert!(index.contains("nightly"));

    let run_page =
        fs::read_to_string(docs_dir.path().join("runs/nightly-directory.html")).unwrap();
    assert!(run_page.contains("values in &#39;Name&#39; are not null"));
}

// ============================================================================
// argument parsing
// ============================================================================

#[test]
fn test_help_lists_subcommands() {
    nex()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("docs"));
}

#[test]
fn test_validate_requires_db_and_suite() {
    nex().arg("validate").assert().failure();
}
