//! Late-night overlap calculation.
//!
//! This module computes how much of a work interval falls inside the
//! late-night premium band (22:00–05:00 under the default policy),
//! handling shifts that cross midnight.

use crate::config::WorkPolicy;
use crate::models::WorkDuration;

/// Computes the overlap between a work interval and the late-night band.
///
/// `start` and `end` are offsets from the shift day's 00:00. When `end` is
/// numerically less than `start` the shift crossed midnight and `end` is
/// extended by 24 hours for the computation only. The policy's three
/// windows already cover both today's band and tomorrow's early morning on
/// that extended timeline, so overlap is a plain sum of
/// `max(0, min(end, window_end) - max(start, window_start))` with no
/// midnight special case.
///
/// # Arguments
///
/// * `start` - Shift start as an offset from the day's midnight
/// * `end` - Shift end on the same scale; may be less than `start`
/// * `policy` - The work policy supplying the late-night window bounds
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::late_night_overlap;
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::WorkDuration;
///
/// let policy = WorkPolicy::default();
///
/// // 14:00-23:00 only touches 22:00-23:00.
/// let overlap = late_night_overlap(
///     WorkDuration::from_hm(14, 0),
///     WorkDuration::from_hm(23, 0),
///     &policy,
/// );
/// assert_eq!(overlap.encode(), "1:00");
///
/// // 18:00-05:00 crosses midnight: 22:00-24:00 plus 00:00-05:00.
/// let overlap = late_night_overlap(
///     WorkDuration::from_hm(18, 0),
///     WorkDuration::from_hm(5, 0),
///     &policy,
/// );
/// assert_eq!(overlap.encode(), "7:00");
/// ```
pub fn late_night_overlap(start: WorkDuration, end: WorkDuration, policy: &WorkPolicy) -> WorkDuration {
    let start_minutes = start.minutes();
    let mut end_minutes = end.minutes();
    if end_minutes < start_minutes {
        // Midnight-crossing shift: extend the end onto the next day.
        end_minutes += WorkDuration::DAY.minutes();
    }

    let mut overlap_minutes = 0;
    for (window_start, window_end) in policy.late_night_windows() {
        let lo = start_minutes.max(window_start.minutes());
        let hi = end_minutes.min(window_end.minutes());
        overlap_minutes += hi.saturating_sub(lo);
    }

    WorkDuration::from_minutes(overlap_minutes)
}
