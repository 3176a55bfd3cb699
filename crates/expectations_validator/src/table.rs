//! Table-level expectation checks.

use crate::DataSet;
use expectations_core::ExpectationOutcome;

pub(crate) fn check_column_exists(
    description: String,
    dataset: &DataSet,
    column: &str,
) -> ExpectationOutcome {
    // An empty dataset carries no column information, so there is nothing
    // to contradict the expectation
    if dataset.is_empty() || dataset.has_column(column) {
        return ExpectationOutcome::trivial_pass(description);
    }

    ExpectationOutcome::failure(
        description,
        format!(
            "column '{}' not present; dataset columns: [{}]",
            column,
            dataset.column_names().join(", ")
        ),
    )
}

pub(crate) fn check_row_count_between(
    description: String,
    dataset: &DataSet,
    min: Option<usize>,
    max: Option<usize>,
) -> ExpectationOutcome {
    let count = dataset.len();
    let within = min.is_none_or(|min| count >= min) && max.is_none_or(|max| count <= max);

    let outcome = if within {
        ExpectationOutcome::trivial_pass(description)
    } else {
        ExpectationOutcome::failure(description, "")
    };

    let mut outcome = outcome.with_detail(format!("observed {count} row(s)"));
    outcome.element_count = count;
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataRow, DataValue};

    fn single_column_dataset(rows: usize) -> DataSet {
        (0..rows)
            .map(|i| {
                let mut row = DataRow::new();
                row.insert("id".to_string(), DataValue::Int(i as i64));
                row
            })
            .collect()
    }

    #[test]
    fn test_column_exists_pass() {
        let dataset = single_column_dataset(3);
        let outcome = check_column_exists("d".into(), &dataset, "id");
        assert!(outcome.success);
    }

    #[test]
    fn test_column_exists_fail_lists_columns() {
        let dataset = single_column_dataset(3);
        let outcome = check_column_exists("d".into(), &dataset, "name");
        assert!(!outcome.success);
        assert!(outcome.detail.as_deref().unwrap().contains("id"));
    }

    #[test]
    fn test_column_exists_on_empty_dataset() {
        let outcome = check_column_exists("d".into(), &DataSet::empty(), "anything");
        assert!(outcome.success);
    }

    #[test]
    fn test_row_count_within_bounds() {
        let dataset = single_column_dataset(5);
        let outcome = check_row_count_between("d".into(), &dataset, Some(1), Some(10));
        assert!(outcome.success);
        assert_eq!(outcome.element_count, 5);
    }

    #[test]
    fn test_row_count_below_min() {
        let outcome = check_row_count_between("d".into(), &DataSet::empty(), Some(1), None);
        assert!(!outcome.success);
        assert_eq!(outcome.detail.as_deref(), Some("observed 0 row(s)"));
    }

    #[test]
    fn test_row_count_above_max() {
        let dataset = single_column_dataset(11);
        let outcome = check_row_count_between("d".into(), &dataset, None, Some(10));
        assert!(!outcome.success);
    }
}
