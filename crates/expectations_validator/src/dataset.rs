//! Dataset representation for validation.
//!
//! A dataset is the rectangular table produced by flattening workspace
//! database rows: each row maps a column name to a scalar value or a list
//! of scalars (e.g., a relation column resolved to related record ids).

use std::collections::{BTreeSet, HashMap};

/// A value in a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// Timestamp value (ISO 8601 string)
    Timestamp(String),
    /// List of scalar values (multi-selects, relation ids)
    List(Vec<DataValue>),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            DataValue::Null => "null",
            DataValue::String(_) => "string",
            DataValue::Int(_) => "int",
            DataValue::Float(_) => "float",
            DataValue::Bool(_) => "boolean",
            DataValue::Timestamp(_) => "timestamp",
            DataValue::List(_) => "list",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DataValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DataValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a float. Integers coerce.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            DataValue::Float(f) => Some(*f),
            DataValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DataValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to get this value as a timestamp string.
    pub fn as_timestamp(&self) -> Option<&str> {
        match self {
            DataValue::Timestamp(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as a list of values.
    pub fn as_list(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// String rendering used for uniqueness keys and unexpected-value
    /// samples in reports.
    pub fn display_string(&self) -> String {
        match self {
            DataValue::Null => "null".to_string(),
            DataValue::String(s) => s.clone(),
            DataValue::Int(i) => i.to_string(),
            DataValue::Float(f) => f.to_string(),
            DataValue::Bool(b) => b.to_string(),
            DataValue::Timestamp(ts) => ts.clone(),
            DataValue::List(items) => {
                let rendered: Vec<String> = items.iter().map(|v| v.display_string()).collect();
                format!("[{}]", rendered.join(", "))
            }
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

/// A single row of data.
pub type DataRow = HashMap<String, DataValue>;

/// A dataset containing multiple rows.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates a new empty dataset.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Creates a new dataset from rows.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        Self { rows }
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Adds a row to the dataset.
    pub fn add_row(&mut self, row: DataRow) {
        self.rows.push(row);
    }

    /// Returns true if any row carries the named column.
    pub fn has_column(&self, name: &str) -> bool {
        self.rows.iter().any(|row| row.contains_key(name))
    }

    /// The union of column names across all rows, sorted.
    pub fn column_names(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        names.into_iter().map(String::from).collect()
    }

    /// Takes a sample of rows from the dataset.
    ///
    /// If `size` is greater than the number of rows, returns all rows.
    pub fn sample(&self, size: usize) -> DataSet {
        let sample_size = size.min(self.rows.len());
        DataSet {
            rows: self.rows.iter().take(sample_size).cloned().collect(),
        }
    }
}

impl FromIterator<DataRow> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
