//! Notion object identifiers.
//!
//! Databases and pages share a 32-hex-digit id that the API expects in
//! dashed 8-4-4-4-12 form. Users usually hold one of three shapes: the
//! dashed id, the bare 32-character id, or a full workspace URL where the
//! id sits right before the `?v=` view marker (or at the end of the last
//! path segment).

use crate::NotionError;
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Length of a bare Notion id.
const SIMPLE_LEN: usize = 32;

/// A normalized Notion object id (database or page), in dashed form.
///
/// # Example
///
/// ```rust
/// use expectations_notion::ObjectId;
///
/// let id = ObjectId::parse("0123456789abcdef0123456789abcdef").unwrap();
/// assert_eq!(id.as_str(), "01234567-89ab-cdef-0123-456789abcdef");
/// assert_eq!(id.simple(), "0123456789abcdef0123456789abcdef");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parses a database/page id from a dashed id, a bare id, or a full
    /// workspace URL.
    pub fn parse(input: &str) -> Result<Self, NotionError> {
        let input = input.trim();

        if input.starts_with("https://") || input.starts_with("http://") {
            return Self::from_url(input);
        }

        Self::from_simple(&input.replace('-', ""))
            .ok_or_else(|| NotionError::InvalidId(input.to_string()))
    }

    /// The dashed 8-4-4-4-12 form the API expects.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The bare 32-character form.
    pub fn simple(&self) -> String {
        self.0.replace('-', "")
    }

    /// Extracts the id from a full workspace URL.
    ///
    /// Database URLs carry the id immediately before the `?v=` view
    /// marker. URLs without a view marker end their last path segment with
    /// the id (usually prefixed by a human-readable slug).
    fn from_url(input: &str) -> Result<Self, NotionError> {
        let invalid = || NotionError::InvalidId(input.to_string());

        // The 32 characters before "?v=" are the database id
        if let Some(marker) = input.find("?v=") {
            let candidate = input
                .get(marker.saturating_sub(SIMPLE_LEN)..marker)
                .ok_or_else(invalid)?;
            return Self::from_simple(candidate).ok_or_else(invalid);
        }

        let url = Url::parse(input)?;
        let segment = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .ok_or_else(invalid)?;

        // Slugged URLs look like "My-Database-<32 hex chars>"
        if let Some(tail) = segment.get(segment.len().saturating_sub(SIMPLE_LEN)..) {
            if let Some(id) = Self::from_simple(tail) {
                return Ok(id);
            }
        }

        Self::from_simple(&segment.replace('-', "")).ok_or_else(invalid)
    }

    /// Builds an id from the bare 32-hex form, inserting dashes for the
    /// 8-4-4-4-12 structure.
    fn from_simple(simple: &str) -> Option<Self> {
        if simple.len() != SIMPLE_LEN || !simple.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let dashed = format!(
            "{}-{}-{}-{}-{}",
            &simple[0..8],
            &simple[8..12],
            &simple[12..16],
            &simple[16..20],
            &simple[20..32]
        );

        Some(Self(dashed.to_lowercase()))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ObjectId {
    type Err = NotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
