//! Typed model of Notion pages and their properties.
//!
//! A database row is a page whose `properties` map column names to typed
//! cells. Each cell is a JSON object tagged by `type` whose payload sits
//! under a key of the same name, e.g.
//! `{"id": "abc", "type": "number", "number": 42}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A page returned by the database query endpoint (one database row).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page id (dashed form)
    pub id: String,

    /// Creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_time: Option<String>,

    /// Last edit timestamp (RFC 3339)
    #[serde(default)]
    pub last_edited_time: Option<String>,

    /// Whether the page is archived
    #[serde(default)]
    pub archived: bool,

    /// Workspace URL of the page
    #[serde(default)]
    pub url: Option<String>,

    /// The typed cells, keyed by column name
    pub properties: HashMap<String, PageProperty>,
}

impl Page {
    /// Column names present on this page.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// The typed value of one property, if present.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name).map(|p| &p.value)
    }
}

/// One cell of a database row: the property id plus its typed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageProperty {
    /// Property id assigned by the API
    #[serde(default)]
    pub id: Option<String>,

    /// The typed value
    #[serde(flatten)]
    pub value: PropertyValue,
}

/// A typed property value.
///
/// Variants mirror the database column types the API exposes; anything
/// newer than this list deserializes as `Unsupported` instead of failing
/// the whole row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    /// The title column (every database has exactly one)
    Title {
        /// Rich text fragments
        title: Vec<RichText>,
    },

    /// Free-form rich text
    RichText {
        /// Rich text fragments
        rich_text: Vec<RichText>,
    },

    /// Numeric cell
    Number {
        /// The number, absent when the cell is empty
        number: Option<f64>,
    },

    /// Single-select cell
    Select {
        /// Chosen option, absent when the cell is empty
        select: Option<SelectOption>,
    },

    /// Multi-select cell
    MultiSelect {
        /// Chosen options
        multi_select: Vec<SelectOption>,
    },

    /// Checkbox cell; false is a value, not an empty cell
    Checkbox {
        /// Checked state
        checkbox: bool,
    },

    /// Date or date-range cell
    Date {
        /// The date value, absent when the cell is empty
        date: Option<DateValue>,
    },

    /// Relation cell referencing rows of another database
    Relation {
        /// References to the related records
        relation: Vec<RelationRef>,
    },

    /// Rollup cell aggregating over a relation
    Rollup {
        /// The aggregated value
        rollup: RollupValue,
    },

    /// URL cell
    Url {
        /// The URL, absent when the cell is empty
        url: Option<String>,
    },

    /// Email cell
    Email {
        /// The address, absent when the cell is empty
        email: Option<String>,
    },

    /// Phone number cell
    PhoneNumber {
        /// The number, absent when the cell is empty
        phone_number: Option<String>,
    },

    /// File attachments cell
    Files {
        /// Attached files
        files: Vec<FileRef>,
    },

    /// Any property type this model does not know about
    #[serde(other)]
    Unsupported,
}

/// One fragment of a rich text value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichText {
    /// The fragment rendered as plain text
    pub plain_text: String,

    /// Link target, when the fragment is a link
    #[serde(default)]
    pub href: Option<String>,
}

/// An option chosen in a select or multi-select cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    /// Option display name
    pub name: String,
}

/// A date cell value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateValue {
    /// Start of the date or date range (ISO 8601)
    pub start: String,

    /// End of the range, when the value is a range
    #[serde(default)]
    pub end: Option<String>,
}

/// A reference to a record in another database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationRef {
    /// Id of the related record
    pub id: String,
}

/// An attached file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRef {
    /// File display name
    pub name: String,
}

/// The aggregated value of a rollup cell, tagged like a property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    /// Numeric aggregate (count, sum, ...)
    Number {
        /// The number, absent when nothing was aggregated
        number: Option<f64>,
    },

    /// Date aggregate (earliest, latest, ...)
    Date {
        /// The date, absent when nothing was aggregated
        date: Option<DateValue>,
    },

    /// Element-wise aggregate: one property value per related row
    Array {
        /// The aggregated values
        array: Vec<PropertyValue>,
    },

    /// Any rollup type this model does not know about
    #[serde(other)]
    Unsupported,
}
