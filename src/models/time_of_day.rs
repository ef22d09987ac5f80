//! Time-of-day values and shift windows.
//!
//! Shift boundaries are compared at minute precision. Anything past the
//! minutes component of the textual form (seconds, fractions) is ignored.
//! A window whose end is before its start runs past midnight.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SchedulerError;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time with minute precision.
///
/// Ordering is chronological within a single day.
///
/// # Examples
///
/// ```
/// use shift_scheduler::models::TimeOfDay;
///
/// let start: TimeOfDay = "09:00:00.000".parse().unwrap();
/// assert_eq!(start, TimeOfDay::new(9, 0).unwrap());
/// assert_eq!(start.to_string(), "09:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day, returning `None` when out of range.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |message: &str| SchedulerError::InvalidTime {
            value: s.to_string(),
            message: message.to_string(),
        };

        let mut parts = s.trim().split(':');
        let hour = parts
            .next()
            .filter(|h| (1..=2).contains(&h.len()) && is_digits(h))
            .and_then(|h| h.parse::<u8>().ok())
            .ok_or_else(|| invalid("expected HH:MM"))?;
        let minute = parts
            .next()
            .map(|m| m.get(..2).unwrap_or(m))
            .filter(|m| m.len() == 2 && is_digits(m))
            .and_then(|m| m.parse::<u8>().ok())
            .ok_or_else(|| invalid("expected HH:MM"))?;

        TimeOfDay::new(hour, minute).ok_or_else(|| invalid("time out of range"))
    }
}

fn is_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The start/end pair a shift occupies on its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShiftWindow {
    /// Start of the window.
    pub start: TimeOfDay,
    /// End of the window.
    pub end: TimeOfDay,
}

impl ShiftWindow {
    /// Creates a window from its bounds.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Returns true when the window ends before it starts, i.e. runs past
    /// midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end < self.start
    }

    /// Returns true when both windows share a non-empty stretch of time.
    ///
    /// Windows that only touch (one ends exactly when the other starts)
    /// do not overlap, and a zero-length window overlaps nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_scheduler::models::ShiftWindow;
    ///
    /// let night = ShiftWindow::new("22:00".parse().unwrap(), "06:00".parse().unwrap());
    /// let early = ShiftWindow::new("05:00".parse().unwrap(), "07:00".parse().unwrap());
    /// assert!(night.overlaps(&early));
    /// ```
    pub fn overlaps(&self, other: &ShiftWindow) -> bool {
        self.spans().any(|(from, to)| {
            other
                .spans()
                .any(|(other_from, other_to)| from < other_to && other_from < to)
        })
    }

    /// Half-open minute ranges covered within the day. A window running past
    /// midnight is split in two.
    fn spans(&self) -> impl Iterator<Item = (u16, u16)> {
        let start = self.start.minutes_from_midnight();
        let end = self.end.minutes_from_midnight();
        let spans = if self.wraps_midnight() {
            [Some((start, MINUTES_PER_DAY)), Some((0, end))]
        } else {
            [Some((start, end)), None]
        };
        spans.into_iter().flatten()
    }
}

impl fmt::Display for ShiftWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
