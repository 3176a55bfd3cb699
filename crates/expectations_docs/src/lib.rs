//! # Expectations Data Docs
//!
//! Persists validation results and renders them into a static HTML site.
//! A checkpoint run does two things after validating: store the result as
//! JSON, and regenerate the Data Docs so the newest run shows up on the
//! index. Both live here.
//!
//! ## Example
//!
//! ```no_run
//! use expectations_docs::DataDocs;
//!
//! # fn example(report: expectations_core::SuiteReport) -> Result<(), expectations_docs::DocsError> {
//! let docs = DataDocs::new("data_docs");
//! let index = docs.update(&report)?;
//! println!("Docs rebuilt at {}", index.display());
//! # Ok(())
//! # }
//! ```

mod html;
mod store;

pub use html::{escape_html, render_index, render_run};
pub use store::{ResultStore, StoredRun};

use expectations_core::SuiteReport;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Error types for result storage and docs rendering.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Filesystem error
    #[error("Data Docs I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored result could not be (de)serialized
    #[error("Failed to (de)serialize validation result: {0}")]
    Json(#[from] serde_json::Error),
}

/// A Data Docs site on disk.
///
/// Layout under the root directory:
///
/// ```text
/// <root>/validations/<run-id>.json   stored results
/// <root>/index.html                  run index
/// <root>/runs/<run-id>.html          one page per run
/// ```
#[derive(Debug, Clone)]
pub struct DataDocs {
    root: PathBuf,
    store: ResultStore,
}

impl DataDocs {
    /// Creates a site handle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let store = ResultStore::new(root.join("validations"));
        Self { root, store }
    }

    /// The site root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The underlying result store.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Stores a new result and regenerates the site.
    ///
    /// Returns the path of the rebuilt index page.
    pub fn update(&self, report: &SuiteReport) -> Result<PathBuf, DocsError> {
        self.store.save(report)?;
        self.rebuild()
    }

    /// Regenerates the whole site from the stored results.
    ///
    /// Returns the path of the index page.
    pub fn rebuild(&self) -> Result<PathBuf, DocsError> {
        let runs = self.store.load_all()?;

        let runs_dir = self.root.join("runs");
        fs::create_dir_all(&runs_dir)?;

        for run in &runs {
            let page = render_run(run);
            fs::write(runs_dir.join(format!("{}.html", run.id)), page)?;
        }

        let index_path = self.root.join("index.html");
        fs::write(&index_path, render_index(&runs))?;

        info!(
            runs = runs.len(),
            index = %index_path.display(),
            "Rebuilt Data Docs"
        );

        Ok(index_path)
    }
}
