//! Parser for expectation suite files (YAML/TOML formats).
//!
//! This crate parses expectation suites from YAML and TOML files into the
//! strongly-typed [`Suite`] structure, and resolves *named* suites from a
//! configured suites directory (see [`SuiteStore`]).
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_yaml;
//!
//! let yaml = r#"
//! version: "1.0.0"
//! name: directory
//! owner: data-team
//! description: Company directory database
//! expectations:
//!   - type: values_not_null
//!     column: Name
//! "#;
//!
//! let suite = parse_yaml(yaml).expect("Failed to parse suite");
//! assert_eq!(suite.name, "directory");
//! ```

mod store;

pub use store::SuiteStore;

use expectations_core::Suite;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during suite parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// A named suite was not found in the suites directory
    #[error("Suite '{name}' not found under {dir} (tried .yml, .yaml, .toml)")]
    SuiteNotFound {
        /// The requested suite name
        name: String,
        /// The directory that was searched
        dir: String,
    },
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a suite from a YAML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_yaml;
///
/// let yaml = r#"
/// version: "1.0.0"
/// name: my_suite
/// owner: data-team
/// expectations: []
/// "#;
///
/// let suite = parse_yaml(yaml).unwrap();
/// assert_eq!(suite.name, "my_suite");
/// ```
pub fn parse_yaml(content: &str) -> Result<Suite> {
    let suite: Suite = serde_yaml_ng::from_str(content)?;
    Ok(suite)
}

/// Parse a suite from a TOML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_toml;
///
/// let toml = r#"
/// version = "1.0.0"
/// name = "my_suite"
/// owner = "data-team"
/// expectations = []
/// "#;
///
/// let suite = parse_toml(toml).unwrap();
/// assert_eq!(suite.name, "my_suite");
/// ```
pub fn parse_toml(content: &str) -> Result<Suite> {
    let suite: Suite = toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(suite)
}

/// Detect the suite format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SuiteFormat::Yaml`
/// * `.toml` → `SuiteFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SuiteFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SuiteFormat::Yaml),
        "toml" => Ok(SuiteFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a suite from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use expectations_parser::parse_file;
/// use std::path::Path;
///
/// let suite = parse_file(Path::new("suites/directory.yml")).unwrap();
/// println!("Loaded suite: {}", suite.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Suite> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        SuiteFormat::Yaml => parse_yaml(&content),
        SuiteFormat::Toml => parse_toml(&content),
    }
}
