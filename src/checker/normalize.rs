//! Date normalization for incoming shift payloads.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{SchedulerError, SchedulerResult};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Normalizes a client-supplied date to a calendar date.
///
/// Accepts plain dates (`2024-01-01`, `2024/01/01`), RFC 3339 timestamps and
/// naive date-times. For timestamps the date is taken as written, so
/// `2024-01-01T23:30:00+10:00` stays on the 1st.
///
/// # Examples
///
/// ```
/// use shift_scheduler::checker::normalize_date;
///
/// let date = normalize_date("2024-01-01T09:00:00.000Z").unwrap();
/// assert_eq!(date.to_string(), "2024-01-01");
/// ```
pub fn normalize_date(raw: &str) -> SchedulerResult<NaiveDate> {
    let trimmed = raw.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_local().date());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| SchedulerError::InvalidDate {
            value: raw.to_string(),
            message: "expected yyyy-MM-dd or an ISO 8601 timestamp".to_string(),
        })
}
