//! Column-level expectation checks.
//!
//! Each check walks the dataset once, counts evaluated and unexpected
//! values, and folds the counts into an [`ExpectationOutcome`] via the
//! `mostly` threshold. Null and missing cells are not evaluated, except by
//! the not-null check where they are exactly what is being counted.

use crate::{DataSet, DataValue};
use expectations_core::ExpectationOutcome;
use regex::Regex;
use std::collections::HashSet;

/// Cap on offending values recorded per outcome.
pub(crate) const MAX_SAMPLES: usize = 20;

pub(crate) fn check_values_not_null(
    description: String,
    dataset: &DataSet,
    column: &str,
    mostly: Option<f64>,
) -> ExpectationOutcome {
    let mut unexpected = 0;
    let mut samples = Vec::new();

    for (row_idx, row) in dataset.rows().enumerate() {
        // A missing cell counts as null
        let is_null = row.get(column).map(DataValue::is_null).unwrap_or(true);
        if is_null {
            unexpected += 1;
            if samples.len() < MAX_SAMPLES {
                samples.push(format!("row {}", row_idx + 1));
            }
        }
    }

    ExpectationOutcome::from_counts(description, dataset.len(), unexpected, samples, mostly)
}

pub(crate) fn check_values_in_set(
    description: String,
    dataset: &DataSet,
    column: &str,
    allowed: &[String],
    mostly: Option<f64>,
) -> ExpectationOutcome {
    evaluate_cells(description, dataset, column, mostly, |value| {
        // List cells (multi-selects, relation ids) pass only if every
        // element is allowed
        match value {
            DataValue::List(items) => items
                .iter()
                .all(|item| allowed.iter().any(|a| *a == item.display_string())),
            other => allowed.iter().any(|a| *a == other.display_string()),
        }
    })
}

pub(crate) fn check_values_between(
    description: String,
    dataset: &DataSet,
    column: &str,
    min: Option<f64>,
    max: Option<f64>,
    mostly: Option<f64>,
) -> ExpectationOutcome {
    evaluate_cells(description, dataset, column, mostly, |value| {
        match value.as_float() {
            Some(number) => {
                min.is_none_or(|min| number >= min) && max.is_none_or(|max| number <= max)
            }
            // Non-numeric values cannot satisfy a range
            None => false,
        }
    })
}

pub(crate) fn check_values_match_pattern(
    description: String,
    dataset: &DataSet,
    column: &str,
    regex: &Regex,
    mostly: Option<f64>,
) -> ExpectationOutcome {
    evaluate_cells(description, dataset, column, mostly, |value| match value {
        DataValue::List(items) => items
            .iter()
            .all(|item| item.as_string().is_some_and(|s| regex.is_match(s))),
        other => other.as_string().is_some_and(|s| regex.is_match(s)),
    })
}

pub(crate) fn check_values_of_type(
    description: String,
    dataset: &DataSet,
    column: &str,
    value_type: &str,
) -> ExpectationOutcome {
    let expected = value_type.to_lowercase();
    evaluate_cells(description, dataset, column, None, |value| {
        match expected.trim() {
            "string" | "text" => matches!(value, DataValue::String(_)),
            "int" | "int64" | "integer" => matches!(value, DataValue::Int(_)),
            "float" | "float64" | "double" | "number" => {
                matches!(value, DataValue::Float(_) | DataValue::Int(_))
            }
            "boolean" | "bool" | "checkbox" => matches!(value, DataValue::Bool(_)),
            "timestamp" | "datetime" | "date" => matches!(value, DataValue::Timestamp(_)),
            "list" | "array" => matches!(value, DataValue::List(_)),
            // Unknown type names are accepted rather than failing every row
            _ => true,
        }
    })
}

pub(crate) fn check_values_unique(
    description: String,
    dataset: &DataSet,
    columns: &[String],
) -> ExpectationOutcome {
    let mut seen = HashSet::new();
    let mut evaluated = 0;
    let mut unexpected = 0;
    let mut samples = Vec::new();

    for row in dataset.rows() {
        // Build a composite key from all uniqueness columns; rows missing
        // any of them are not evaluated
        let mut key_parts = Vec::with_capacity(columns.len());
        let mut has_all = true;

        for column in columns {
            match row.get(column) {
                Some(value) => key_parts.push(value.display_string()),
                None => {
                    has_all = false;
                    break;
                }
            }
        }

        if !has_all {
            continue;
        }

        evaluated += 1;
        let key = key_parts.join("|");
        if !seen.insert(key.clone()) {
            unexpected += 1;
            if samples.len() < MAX_SAMPLES {
                samples.push(key);
            }
        }
    }

    ExpectationOutcome::from_counts(description, evaluated, unexpected, samples, None)
}

/// Shared walk for cell-level checks: skips null/missing cells, applies
/// `is_expected` to the rest, and samples offenders.
fn evaluate_cells(
    description: String,
    dataset: &DataSet,
    column: &str,
    mostly: Option<f64>,
    is_expected: impl Fn(&DataValue) -> bool,
) -> ExpectationOutcome {
    let mut evaluated = 0;
    let mut unexpected = 0;
    let mut samples = Vec::new();

    for row in dataset.rows() {
        let Some(value) = row.get(column) else {
            continue;
        };
        if value.is_null() {
            continue;
        }

        evaluated += 1;
        if !is_expected(value) {
            unexpected += 1;
            if samples.len() < MAX_SAMPLES {
                samples.push(value.display_string());
            }
        }
    }

    ExpectationOutcome::from_counts(description, evaluated, unexpected, samples, mostly)
}
