//! JSON persistence for validation results.
//!
//! Every run is stored as one pretty-printed JSON file under the store
//! directory, named after the run. The Data Docs site is regenerated from
//! these files, so deleting one removes the run from the docs on the next
//! rebuild.

use crate::DocsError;
use expectations_core::SuiteReport;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A persisted validation run.
#[derive(Debug, Clone)]
pub struct StoredRun {
    /// Filesystem-safe run identifier (also the file stem)
    pub id: String,

    /// The stored report
    pub report: SuiteReport,
}

/// Directory of stored validation results.
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory results are stored under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persists a report and returns the stored run.
    pub fn save(&self, report: &SuiteReport) -> Result<StoredRun, DocsError> {
        fs::create_dir_all(&self.dir)?;

        let id = run_id(report);
        let path = self.dir.join(format!("{id}.json"));
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json)?;

        debug!(path = %path.display(), "Stored validation result");

        Ok(StoredRun {
            id,
            report: report.clone(),
        })
    }

    /// Loads every stored run, most recent first.
    ///
    /// A store that does not exist yet is just empty.
    pub fn load_all(&self) -> Result<Vec<StoredRun>, DocsError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut runs = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let content = fs::read_to_string(&path)?;
            let report: SuiteReport = serde_json::from_str(&content)?;
            runs.push(StoredRun {
                id: id.to_string(),
                report,
            });
        }

        runs.sort_by(|a, b| b.report.run_time.cmp(&a.report.run_time));
        Ok(runs)
    }
}

/// Derives a filesystem-safe identifier from a report.
fn run_id(report: &SuiteReport) -> String {
    let run_name = report.run_name.as_deref().unwrap_or("run");
    sanitize(&format!(
        "{}-{}-{}",
        run_name, report.suite_name, report.run_time
    ))
}

/// Maps anything outside `[A-Za-z0-9_-]` to a dash and collapses repeats.
fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_dash = false;

    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }

    out.trim_matches('-').to_string()
}
