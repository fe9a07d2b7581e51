//! Daily summary calculation.
//!
//! This module classifies one day's raw time fields into the seven
//! legally distinct duration buckets.

use crate::config::WorkPolicy;
use crate::models::{DailySummary, WorkDayRecord, WorkDuration};

use super::late_night::late_night_overlap;

/// Computes the classified duration buckets for one day's record.
///
/// This is a total function: it never fails. Malformed or missing time
/// text decodes to a zero duration, and a record with neither start nor
/// end time produces the all-zero summary. A record whose start and end
/// are both literally `"0:00"` is indistinguishable from one with no time
/// entered; the engine treats both as "no work".
///
/// Classification:
///
/// 1. `working_hours` is the shift span (extended across midnight when the
///    end precedes the start) minus both break fields, floored at zero.
/// 2. The late-night portion is the overlap with the policy's band minus
///    the night break, floored at zero.
/// 3. On a holiday (explicit holiday type or calendar holiday) the whole
///    of `working_hours` lands in `holiday_work` and the late-night
///    portion in `late_night_holiday_work`.
/// 4. Otherwise `scheduled_work` is capped at the standard threshold, the
///    excess splits into inner overtime (up to the legal threshold) and
///    outer overtime (beyond it), and the late-night portion lands in
///    `late_night_work`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::compute_daily_summary;
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::WorkDayRecord;
///
/// let record = WorkDayRecord {
///     start_time: Some("9:00".to_string()),
///     end_time: Some("19:00".to_string()),
///     break_time: Some("1:00".to_string()),
///     ..Default::default()
/// };
///
/// let summary = compute_daily_summary(&record, &WorkPolicy::default());
/// assert_eq!(summary.working_hours.encode(), "9:00");
/// assert_eq!(summary.scheduled_work.encode(), "8:00");
/// assert_eq!(summary.statutory_outer_overtime.encode(), "1:00");
/// ```
pub fn compute_daily_summary(record: &WorkDayRecord, policy: &WorkPolicy) -> DailySummary {
    let start = WorkDuration::decode(record.start_time.as_deref());
    let end = WorkDuration::decode(record.end_time.as_deref());
    let break_time = WorkDuration::decode(record.break_time.as_deref());
    let night_break = WorkDuration::decode(record.night_break_time.as_deref());

    // No start and no end means no work was entered for the day.
    if start.is_zero() && end.is_zero() {
        return DailySummary::default();
    }

    let total_span = if end >= start {
        end.saturating_sub(start)
    } else {
        // Midnight-crossing shift.
        WorkDuration::DAY.saturating_sub(start) + end
    };
    let working_hours = total_span.saturating_sub(break_time).saturating_sub(night_break);

    let late_night = late_night_overlap(start, end, policy).saturating_sub(night_break);

    let mut summary = DailySummary {
        working_hours,
        ..Default::default()
    };

    if record.is_holiday() {
        summary.holiday_work = working_hours;
        summary.late_night_holiday_work = late_night;
    } else {
        let scheduled_work = working_hours.min(policy.standard_daily);
        let overtime = working_hours.saturating_sub(scheduled_work);
        let inner_overtime = overtime.min(policy.inner_overtime_cap());

        summary.scheduled_work = scheduled_work;
        summary.statutory_inner_overtime = inner_overtime;
        summary.statutory_outer_overtime = overtime.saturating_sub(inner_overtime);
        summary.late_night_work = late_night;
    }

    summary
}
