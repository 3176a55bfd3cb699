//! Staleness checking for timestamp columns.
//!
//! `values_recent_within` passes when the most recent timestamp found in
//! the column is younger than the configured delay. Durations use short
//! human units ("1h", "30m", "7d"); timestamps are accepted in the formats
//! the workspace API and its users actually produce.

use crate::{DataSet, DataValue};
use chrono::{DateTime, Duration, Utc};
use expectations_core::ExpectationOutcome;

pub(crate) fn check_values_recent_within(
    description: String,
    dataset: &DataSet,
    column: &str,
    max_delay: &str,
) -> ExpectationOutcome {
    let max_delay = match parse_duration(max_delay) {
        Ok(duration) => duration,
        Err(message) => return ExpectationOutcome::failure(description, message),
    };

    let mut evaluated = 0;
    let mut most_recent: Option<DateTime<Utc>> = None;

    for row in dataset.rows() {
        let Some(value) = row.get(column) else {
            continue;
        };
        let ts_str = match value {
            DataValue::Timestamp(ts) => ts.as_str(),
            DataValue::String(s) => s.as_str(),
            _ => continue,
        };
        let Ok(ts) = parse_timestamp(ts_str) else {
            continue; // Skip unparseable timestamps
        };

        evaluated += 1;
        if most_recent.is_none_or(|current| ts > current) {
            most_recent = Some(ts);
        }
    }

    let Some(most_recent) = most_recent else {
        return ExpectationOutcome::failure(
            description,
            format!("no valid timestamps found in column '{column}'"),
        );
    };

    let age = Utc::now().signed_duration_since(most_recent);
    if age > max_delay {
        let mut outcome = ExpectationOutcome::failure(
            description,
            format!("most recent value is {} old", format_duration(age)),
        );
        outcome.element_count = evaluated;
        return outcome;
    }

    let mut outcome = ExpectationOutcome::trivial_pass(description);
    outcome.element_count = evaluated;
    outcome
}

/// Parses a duration string like "1h", "30m", "1d".
pub fn parse_duration(duration_str: &str) -> Result<Duration, String> {
    let duration_str = duration_str.trim();

    if duration_str.is_empty() {
        return Err("duration string is empty".to_string());
    }

    let split_at = duration_str
        .chars()
        .position(|c| !c.is_numeric())
        .unwrap_or(duration_str.len());
    let (num_str, unit) = duration_str.split_at(split_at);

    let num: i64 = num_str
        .parse()
        .map_err(|_| format!("invalid number in duration: '{num_str}'"))?;

    match unit.trim().to_lowercase().as_str() {
        "s" | "sec" | "second" | "seconds" => Ok(Duration::seconds(num)),
        "m" | "min" | "minute" | "minutes" => Ok(Duration::minutes(num)),
        "h" | "hr" | "hour" | "hours" => Ok(Duration::hours(num)),
        "d" | "day" | "days" => Ok(Duration::days(num)),
        "w" | "week" | "weeks" => Ok(Duration::weeks(num)),
        // No unit means seconds
        "" => Ok(Duration::seconds(num)),
        other => Err(format!("unknown duration unit: '{other}'")),
    }
}

/// Parses a timestamp string in multiple formats.
///
/// Supports:
/// - ISO 8601 / RFC 3339 (e.g., "2024-01-15T10:30:00Z")
/// - Unix epoch seconds or milliseconds
/// - Date only (e.g., "2024-01-15")
/// - "YYYY-MM-DD HH:MM:SS"
pub fn parse_timestamp(ts_str: &str) -> Result<DateTime<Utc>, String> {
    let ts_str = ts_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts_str) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(epoch) = ts_str.parse::<i64>() {
        // Large numbers are epoch milliseconds
        if epoch > 10_000_000_000 {
            if let Some(dt) = DateTime::from_timestamp_millis(epoch) {
                return Ok(dt);
            }
        } else if let Some(dt) = DateTime::from_timestamp(epoch, 0) {
            return Ok(dt);
        }
    }

    if ts_str.contains(' ') && ts_str.len() >= 19 {
        if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(ts_str, "%Y-%m-%d %H:%M:%S") {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    // Date only, taken as start of day UTC
    if let Ok(date) = chrono::NaiveDate::parse_from_str(ts_str, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(datetime, Utc));
        }
    }

    if let Ok(dt) = ts_str.parse::<DateTime<Utc>>() {
        return Ok(dt);
    }

    Err(format!(
        "invalid timestamp: '{ts_str}' (supported: RFC 3339, epoch seconds/milliseconds, YYYY-MM-DD, YYYY-MM-DD HH:MM:SS)"
    ))
}

/// Formats a duration for display.
fn format_duration(duration: Duration) -> String {
    if duration.num_days() > 0 {
        format!("{}d", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m", duration.num_minutes())
    } else {
        format!("{}s", duration.num_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataRow;
    use chrono::Timelike;
    use pretty_assertions::assert_eq;

    fn timestamp_dataset(values: Vec<DataValue>) -> DataSet {
        values
            .into_iter()
            .map(|value| {
                let mut row = DataRow::new();
                row.insert("edited".to_string(), value);
                row
            })
            .collect()
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("1d").unwrap(), Duration::days(1));
        assert_eq!(parse_duration("2w").unwrap(), Duration::weeks(2));
        assert_eq!(parse_duration("90s").unwrap(), Duration::seconds(90));
        assert_eq!(parse_duration("90").unwrap(), Duration::seconds(90));
    }

    #[test]
    fn test_parse_duration_word_units() {
        assert_eq!(parse_duration("1hour").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("5minutes").unwrap(), Duration::minutes(5));
        assert_eq!(parse_duration("2days").unwrap(), Duration::days(2));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("1x").is_err());
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        assert!(parse_timestamp("2024-01-15T10:30:00Z").is_ok());
        assert!(parse_timestamp("2024-01-15T10:30:00+00:00").is_ok());
        assert!(parse_timestamp("2024-01-15T10:30:00-05:00").is_ok());
    }

    #[test]
    fn test_parse_timestamp_epoch() {
        let ts = parse_timestamp("1705318200").unwrap();
        assert_eq!(ts.timestamp(), 1705318200);

        let ts = parse_timestamp("1705318200000").unwrap();
        assert_eq!(ts.timestamp(), 1705318200);
    }

    #[test]
    fn test_parse_timestamp_date_only() {
        let ts = parse_timestamp("2024-01-15").unwrap();
        assert_eq!(ts.format("%Y-%m-%d").to_string(), "2024-01-15");
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_parse_timestamp_space_separated() {
        let ts = parse_timestamp("2024-01-15 10:30:00").unwrap();
        assert_eq!(
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2024-01-15 10:30:00"
        );
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("invalid").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2024-13-45").is_err());
    }

    #[test]
    fn test_fresh_data_passes() {
        let recent = Utc::now() - Duration::minutes(10);
        let dataset = timestamp_dataset(vec![DataValue::Timestamp(recent.to_rfc3339())]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1h");
        assert!(outcome.success);
        assert_eq!(outcome.element_count, 1);
    }

    #[test]
    fn test_stale_data_fails() {
        let old = Utc::now() - Duration::hours(2);
        let dataset = timestamp_dataset(vec![DataValue::Timestamp(old.to_rfc3339())]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1h");
        assert!(!outcome.success);
        assert!(outcome.detail.as_deref().unwrap().contains("old"));
    }

    #[test]
    fn test_most_recent_wins() {
        let old = Utc::now() - Duration::days(30);
        let recent = Utc::now() - Duration::minutes(5);
        let dataset = timestamp_dataset(vec![
            DataValue::Timestamp(old.to_rfc3339()),
            DataValue::Timestamp(recent.to_rfc3339()),
        ]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1h");
        assert!(outcome.success);
        assert_eq!(outcome.element_count, 2);
    }

    #[test]
    fn test_no_valid_timestamps() {
        let dataset = timestamp_dataset(vec![DataValue::String("not a time".into())]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1h");
        assert!(!outcome.success);
        assert!(outcome.detail.as_deref().unwrap().contains("no valid timestamps"));
    }

    #[test]
    fn test_invalid_delay_reported() {
        let dataset = timestamp_dataset(vec![DataValue::Timestamp(Utc::now().to_rfc3339())]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1x");
        assert!(!outcome.success);
        assert!(outcome.detail.as_deref().unwrap().contains("unknown duration unit"));
    }

    #[test]
    fn test_string_cells_accepted() {
        let recent = Utc::now() - Duration::minutes(1);
        let dataset = timestamp_dataset(vec![DataValue::String(recent.to_rfc3339())]);

        let outcome = check_values_recent_within("d".into(), &dataset, "edited", "1h");
        assert!(outcome.success);
    }
}
