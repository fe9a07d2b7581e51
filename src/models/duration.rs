//! Minute-granularity work durations and the `"H:MM"` codec.
//!
//! Time-of-day fields arrive from the timesheet as `"H:MM"` text, where the
//! hour component may exceed 24 to denote the next calendar day (a shift
//! ending `"25:00"` finished at 01:00 the day after it started). This module
//! defines the [`WorkDuration`] type and both directions of the codec.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A non-negative span of time with minute granularity.
///
/// Durations are ordered and copyable. Subtraction saturates at zero:
/// there is no negative representation, matching the engine's rule that a
/// daily bucket can never go below `"0:00"`.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkDuration;
///
/// let start = WorkDuration::decode(Some("9:00"));
/// let end = WorkDuration::decode(Some("17:30"));
/// assert_eq!(end.saturating_sub(start).encode(), "8:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WorkDuration {
    minutes: u32,
}

impl WorkDuration {
    /// The zero-length duration, `"0:00"`.
    pub const ZERO: WorkDuration = WorkDuration { minutes: 0 };

    /// One full calendar day, `"24:00"`.
    pub const DAY: WorkDuration = WorkDuration { minutes: 24 * 60 };

    /// Creates a duration from a total number of minutes.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Creates a duration from an hour and minute component.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::WorkDuration;
    ///
    /// assert_eq!(WorkDuration::from_hm(8, 30).minutes(), 510);
    /// ```
    pub const fn from_hm(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours * 60 + minutes,
        }
    }

    /// Returns the total number of minutes in this duration.
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Returns true if this duration is zero.
    pub const fn is_zero(&self) -> bool {
        self.minutes == 0
    }

    /// Strictly parses an `"H:MM"` string.
    ///
    /// The hour component may be any non-negative integer, including values
    /// of 24 and above: `"25:00"` parses as 25 hours (the literal numeral,
    /// not modulo 24). Returns `None` for anything that is not two
    /// colon-separated unsigned integers.
    ///
    /// This is the strict half of the codec, used for configuration values
    /// and serde deserialization, where malformed input is an error. Raw
    /// timesheet fields go through the lenient [`WorkDuration::decode`]
    /// instead.
    pub fn parse(text: &str) -> Option<Self> {
        let (hours, minutes) = text.split_once(':')?;
        if hours.is_empty() || minutes.is_empty() {
            return None;
        }
        let hours: u32 = hours.parse().ok()?;
        let minutes: u32 = minutes.parse().ok()?;
        Some(Self::from_hm(hours, minutes))
    }

    /// Leniently decodes an optional `"H:MM"` string.
    ///
    /// Missing, empty, or malformed input decodes to [`WorkDuration::ZERO`]:
    /// an unparseable time field means "no data", and the calculators must
    /// tolerate incomplete records without blocking report generation.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::WorkDuration;
    ///
    /// assert_eq!(WorkDuration::decode(Some("27:30")), WorkDuration::from_hm(27, 30));
    /// assert_eq!(WorkDuration::decode(Some("not a time")), WorkDuration::ZERO);
    /// assert_eq!(WorkDuration::decode(None), WorkDuration::ZERO);
    /// ```
    pub fn decode(text: Option<&str>) -> Self {
        text.and_then(Self::parse).unwrap_or(Self::ZERO)
    }

    /// Encodes the duration as `"H:MM"` with zero-padded minutes.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::WorkDuration;
    ///
    /// assert_eq!(WorkDuration::from_hm(8, 5).encode(), "8:05");
    /// assert_eq!(WorkDuration::ZERO.encode(), "0:00");
    /// ```
    pub fn encode(&self) -> String {
        format!("{}:{:02}", self.minutes / 60, self.minutes % 60)
    }

    /// Subtracts another duration, saturating at zero.
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self {
            minutes: self.minutes.saturating_sub(other.minutes),
        }
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Add for WorkDuration {
    type Output = WorkDuration;

    fn add(self, other: Self) -> Self {
        Self {
            minutes: self.minutes.saturating_add(other.minutes),
        }
    }
}

impl AddAssign for WorkDuration {
    fn add_assign(&mut self, other: Self) {
        self.minutes = self.minutes.saturating_add(other.minutes);
    }
}

impl Sum for WorkDuration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, d| acc + d)
    }
}

impl Serialize for WorkDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encode())
    }
}

impl<'de> Deserialize<'de> for WorkDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        WorkDuration::parse(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid H:MM duration: '{}'", text))
        })
    }
}
