//! The seven classified duration buckets for a single day.

use serde::{Deserialize, Serialize};

use super::WorkDuration;

/// The classified labor-time buckets derived from one day's record.
///
/// For any given day, either the weekday buckets (`scheduled_work`, the two
/// overtime buckets, `late_night_work`) or the holiday pair (`holiday_work`,
/// `late_night_holiday_work`) are populated, never both. `working_hours` is
/// common to both cases.
///
/// All fields serialize as `"H:MM"` text.
///
/// # Example
///
/// ```
/// use attendance_engine::models::DailySummary;
///
/// let empty = DailySummary::default();
/// assert!(empty.is_zero());
/// assert_eq!(serde_json::to_value(&empty).unwrap()["working_hours"], "0:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailySummary {
    /// Actual worked time, net of breaks.
    pub working_hours: WorkDuration,
    /// The portion of worked time within the standard daily threshold;
    /// zero on holidays.
    pub scheduled_work: WorkDuration,
    /// Overtime beyond the standard threshold but within the legal
    /// threshold; zero when the two thresholds are equal.
    pub statutory_inner_overtime: WorkDuration,
    /// Overtime beyond the legal threshold.
    pub statutory_outer_overtime: WorkDuration,
    /// The portion of worked time inside the late-night window, net of the
    /// night break; zero on holidays.
    pub late_night_work: WorkDuration,
    /// Equals `working_hours` when the day is a holiday, else zero.
    pub holiday_work: WorkDuration,
    /// The late-night portion when the day is a holiday.
    pub late_night_holiday_work: WorkDuration,
}

impl DailySummary {
    /// Returns true when every bucket is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
