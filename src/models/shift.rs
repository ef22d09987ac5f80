//! Shift model and related types.
//!
//! This module defines the persisted [`Shift`] record, the id-less
//! [`ShiftDraft`] used for create/update, and the [`ShiftFilter`] applied
//! by `find`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::time_of_day::{ShiftWindow, TimeOfDay};
use crate::checker::normalize_date;

/// A scheduled work shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Unique identifier, assigned by the store.
    pub id: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends.
    pub end_time: TimeOfDay,
    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Shift {
    /// Builds a stored shift from a draft and its assigned id.
    pub fn from_draft(id: impl Into<String>, draft: ShiftDraft) -> Self {
        Self {
            id: id.into(),
            date: draft.date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            name: draft.name,
        }
    }

    /// Returns the window this shift occupies.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_scheduler::models::{Shift, TimeOfDay};
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift {
    ///     id: "1".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///     start_time: "09:00".parse().unwrap(),
    ///     end_time: "17:00".parse().unwrap(),
    ///     name: None,
    /// };
    /// assert_eq!(shift.window().to_string(), "09:00-17:00");
    /// ```
    pub fn window(&self) -> ShiftWindow {
        ShiftWindow::new(self.start_time, self.end_time)
    }

    /// Returns true when this shift sits on `date` with exactly `window`.
    pub fn occupies(&self, date: NaiveDate, window: &ShiftWindow) -> bool {
        self.date == date && self.window() == *window
    }
}

/// The replaceable fields of a shift, without an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftDraft {
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// When the shift starts.
    pub start_time: TimeOfDay,
    /// When the shift ends.
    pub end_time: TimeOfDay,
    /// Optional display label.
    pub name: Option<String>,
}

impl ShiftDraft {
    /// Returns the window the draft asks for.
    pub fn window(&self) -> ShiftWindow {
        ShiftWindow::new(self.start_time, self.end_time)
    }
}

/// Optional criteria for listing shifts. Every present field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftFilter {
    /// Only shifts on this date. Accepts the same forms as request bodies.
    #[serde(default, deserialize_with = "deserialize_filter_date")]
    pub date: Option<NaiveDate>,
    /// Only shifts starting at this time.
    #[serde(default)]
    pub start_time: Option<TimeOfDay>,
    /// Only shifts ending at this time.
    #[serde(default)]
    pub end_time: Option<TimeOfDay>,
    /// Only shifts with this name.
    #[serde(default)]
    pub name: Option<String>,
}

impl ShiftFilter {
    /// Returns true if `shift` satisfies every criterion set on the filter.
    pub fn matches(&self, shift: &Shift) -> bool {
        self.date.is_none_or(|d| d == shift.date)
            && self.start_time.is_none_or(|t| t == shift.start_time)
            && self.end_time.is_none_or(|t| t == shift.end_time)
            && self
                .name
                .as_deref()
                .is_none_or(|n| shift.name.as_deref() == Some(n))
    }
}

fn deserialize_filter_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    Option::<String>::deserialize(deserializer)?
        .map(|raw| normalize_date(&raw))
        .transpose()
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(id: &str, date: &str, start: &str, end: &str) -> Shift {
        Shift {
            id: id.to_string(),
            date: make_date(date),
            start_time: start.parse().unwrap(),
            end_time: end.parse().unwrap(),
            name: None,
        }
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let shift = make_shift("1", "2024-01-01", "09:00", "17:00");
        let json = serde_json::to_value(&shift).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["endTime"], "17:00");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn test_occupies_requires_same_date_and_window() {
        let shift = make_shift("1", "2024-01-01", "09:00", "17:00");
        let window = shift.window();

        assert!(shift.occupies(make_date("2024-01-01"), &window));
        assert!(!shift.occupies(make_date("2024-01-02"), &window));

        let other = ShiftWindow::new("09:00".parse().unwrap(), "18:00".parse().unwrap());
        assert!(!shift.occupies(make_date("2024-01-01"), &other));
    }

    #[test]
    fn test_from_draft_keeps_fields() {
        let draft = ShiftDraft {
            date: make_date("2024-02-29"),
            start_time: "22:00".parse().unwrap(),
            end_time: "06:00".parse().unwrap(),
            name: Some("Night".to_string()),
        };

        let shift = Shift::from_draft("n1", draft.clone());
        assert_eq!(shift.id, "n1");
        assert_eq!(shift.date, draft.date);
        assert_eq!(shift.window(), draft.window());
        assert_eq!(shift.name.as_deref(), Some("Night"));
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let shift = make_shift("1", "2024-01-01", "09:00", "17:00");
        assert!(ShiftFilter::default().matches(&shift));
    }

    #[test]
    fn test_filter_by_date_and_start() {
        let shift = make_shift("1", "2024-01-01", "09:00", "17:00");

        let filter = ShiftFilter {
            date: Some(make_date("2024-01-01")),
            start_time: Some("09:00".parse().unwrap()),
            ..Default::default()
        };
        assert!(filter.matches(&shift));

        let filter = ShiftFilter {
            date: Some(make_date("2024-01-02")),
            ..Default::default()
        };
        assert!(!filter.matches(&shift));
    }

    #[test]
    fn test_filter_date_accepts_timestamps() {
        let filter: ShiftFilter =
            serde_json::from_str(r#"{"date":"2024-01-01T00:00:00.000Z"}"#).unwrap();
        assert_eq!(filter.date, Some(make_date("2024-01-01")));

        let filter: ShiftFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.date, None);

        assert!(serde_json::from_str::<ShiftFilter>(r#"{"date":"soon"}"#).is_err());
    }

    #[test]
    fn test_filter_by_name_skips_unnamed_shifts() {
        let unnamed = make_shift("1", "2024-01-01", "09:00", "17:00");
        let mut named = unnamed.clone();
        named.name = Some("Day".to_string());

        let filter = ShiftFilter {
            name: Some("Day".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&named));
        assert!(!filter.matches(&unnamed));
    }
}
