//! Flattening typed page properties into dataset values.
//!
//! The expectation engine works on scalar cells, so every typed property
//! collapses to a `DataValue`: text becomes its plain rendering, selects
//! become option names, and relation cells resolve to the *ids* of the
//! related records rather than their display names. Empty cells of every
//! type become `Null`.

use crate::page::{Page, PropertyValue, RichText, RollupValue};
use expectations_validator::{DataRow, DataSet, DataValue};
use tracing::debug;

/// Flattens one typed property value to a dataset value.
pub fn flatten_property(value: &PropertyValue) -> DataValue {
    match value {
        PropertyValue::Title { title } => first_plain_text(title),
        PropertyValue::RichText { rich_text } => first_plain_text(rich_text),
        PropertyValue::Number { number } => number.map(number_value).unwrap_or(DataValue::Null),
        PropertyValue::Select { select } => select
            .as_ref()
            .map(|option| DataValue::String(option.name.clone()))
            .unwrap_or(DataValue::Null),
        PropertyValue::MultiSelect { multi_select } => {
            if multi_select.is_empty() {
                DataValue::Null
            } else {
                DataValue::List(
                    multi_select
                        .iter()
                        .map(|option| DataValue::String(option.name.clone()))
                        .collect(),
                )
            }
        }
        PropertyValue::Checkbox { checkbox } => DataValue::Bool(*checkbox),
        PropertyValue::Date { date } => date
            .as_ref()
            .map(|date| DataValue::Timestamp(date.start.clone()))
            .unwrap_or(DataValue::Null),
        PropertyValue::Relation { relation } => {
            if relation.is_empty() {
                DataValue::Null
            } else {
                DataValue::List(
                    relation
                        .iter()
                        .map(|related| DataValue::String(related.id.clone()))
                        .collect(),
                )
            }
        }
        PropertyValue::Rollup { rollup } => flatten_rollup(rollup),
        PropertyValue::Url { url } => optional_string(url),
        PropertyValue::Email { email } => optional_string(email),
        PropertyValue::PhoneNumber { phone_number } => optional_string(phone_number),
        PropertyValue::Files { files } => files
            .first()
            .map(|file| DataValue::String(file.name.clone()))
            .unwrap_or(DataValue::Null),
        PropertyValue::Unsupported => DataValue::Null,
    }
}

/// Flattens a list of pages into a rectangular dataset, one row per page
/// keyed by column name.
pub fn pages_to_dataset(pages: &[Page]) -> DataSet {
    let mut dataset = DataSet::empty();

    for page in pages {
        let mut row = DataRow::new();
        for (name, property) in &page.properties {
            row.insert(name.clone(), flatten_property(&property.value));
        }
        dataset.add_row(row);
    }

    debug!(
        rows = dataset.len(),
        columns = dataset.column_names().len(),
        "Flattened pages into dataset"
    );

    dataset
}

fn flatten_rollup(rollup: &RollupValue) -> DataValue {
    match rollup {
        RollupValue::Number { number } => number.map(number_value).unwrap_or(DataValue::Null),
        RollupValue::Date { date } => date
            .as_ref()
            .map(|date| DataValue::Timestamp(date.start.clone()))
            .unwrap_or(DataValue::Null),
        RollupValue::Array { array } => {
            if array.is_empty() {
                DataValue::Null
            } else {
                DataValue::List(array.iter().map(flatten_property).collect())
            }
        }
        RollupValue::Unsupported => DataValue::Null,
    }
}

fn first_plain_text(fragments: &[RichText]) -> DataValue {
    match fragments.first() {
        Some(fragment) => DataValue::String(fragment.plain_text.clone()),
        None => DataValue::Null,
    }
}

/// Integral JSON numbers become ints so they render without a trailing ".0".
fn number_value(number: f64) -> DataValue {
    if number.fract() == 0.0 && number.abs() < i64::MAX as f64 {
        DataValue::Int(number as i64)
    } else {
        DataValue::Float(number)
    }
}

fn optional_string(value: &Option<String>) -> DataValue {
    match value {
        Some(s) => DataValue::String(s.clone()),
        None => DataValue::Null,
    }
}
