//! Named suite resolution.
//!
//! Suites are "previously configured": they live as files in a suites
//! directory and are referenced by name at validation time. `SuiteStore`
//! maps a suite name to the file that defines it.

use crate::{parse_file, ParserError, Result};
use expectations_core::Suite;
use std::path::{Path, PathBuf};

/// Extensions tried when resolving a suite name, in order.
const SUITE_EXTENSIONS: [&str; 3] = ["yml", "yaml", "toml"];

/// A directory of named expectation suites.
///
/// # Example
///
/// ```no_run
/// use expectations_parser::SuiteStore;
///
/// let store = SuiteStore::new("suites");
/// let suite = store.load("directory").unwrap();
/// assert_eq!(suite.name, "directory");
/// ```
#[derive(Debug, Clone)]
pub struct SuiteStore {
    dir: PathBuf,
}

impl SuiteStore {
    /// Creates a store rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store resolves names against.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolves a suite name to the file that defines it.
    ///
    /// Tries `<dir>/<name>.yml`, `.yaml`, then `.toml`.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        for ext in SUITE_EXTENSIONS {
            let candidate = self.dir.join(format!("{name}.{ext}"));
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        Err(ParserError::SuiteNotFound {
            name: name.to_string(),
            dir: self.dir.display().to_string(),
        })
    }

    /// Loads a suite by name.
    pub fn load(&self, name: &str) -> Result<Suite> {
        let path = self.resolve(name)?;
        parse_file(&path)
    }

    /// Lists the names of all suites in the store.
    pub fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !SUITE_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}
