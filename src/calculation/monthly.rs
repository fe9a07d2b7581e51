//! Monthly summary aggregation.
//!
//! This module folds a month of daily summaries, together with each day's
//! classification tags, into the monthly totals and day counts.

use rust_decimal::Decimal;

use crate::models::{AttendanceType, HolidayType, MonthlySummary, SummarizedDay, WorkDuration};

/// A half day, the increment for half-day leave variants.
const HALF_DAY: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Aggregates a month's worth of summarized days.
///
/// This is a single forward fold with no ordering dependency between days;
/// all accumulation is associative, so partial sums over day ranges can be
/// computed independently and combined with [`MonthlySummary::merge`].
///
/// Counting rules:
///
/// - `working_days` counts any day with `working_hours > 0`, including
///   worked holidays, which also count in `holiday_work_days`.
/// - Each attendance type feeds exactly one counter; half-day leave
///   variants add 0.5 paid holidays instead of 1.
/// - Each holiday type adds one whole day to its counter regardless of
///   any half-day attendance on the same date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{compute_daily_summary, compute_monthly_summary};
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::{SummarizedDay, WorkDayRecord};
///
/// let policy = WorkPolicy::default();
/// let record = WorkDayRecord {
///     start_time: Some("9:00".to_string()),
///     end_time: Some("18:00".to_string()),
///     break_time: Some("1:00".to_string()),
///     ..Default::default()
/// };
/// let day = SummarizedDay {
///     attendance_type: None,
///     holiday_type: None,
///     summary: compute_daily_summary(&record, &policy),
/// };
///
/// let monthly = compute_monthly_summary(&[day]);
/// assert_eq!(monthly.working_days, 1);
/// assert_eq!(monthly.total_working_hours.encode(), "8:00");
/// ```
pub fn compute_monthly_summary(days: &[SummarizedDay]) -> MonthlySummary {
    let mut monthly = MonthlySummary::default();
    for day in days {
        accumulate_day(&mut monthly, day);
    }
    monthly
}

/// Adds one day's contribution to the running monthly summary.
fn accumulate_day(monthly: &mut MonthlySummary, day: &SummarizedDay) {
    let summary = &day.summary;

    monthly.total_working_hours += summary.working_hours;
    monthly.total_scheduled_work += summary.scheduled_work;
    monthly.total_statutory_inner_overtime += summary.statutory_inner_overtime;
    monthly.total_statutory_outer_overtime += summary.statutory_outer_overtime;
    monthly.total_late_night_work += summary.late_night_work;
    monthly.total_holiday_work += summary.holiday_work;
    monthly.total_late_night_holiday_work += summary.late_night_holiday_work;

    if summary.working_hours > WorkDuration::ZERO {
        monthly.working_days += 1;
    }
    if summary.holiday_work > WorkDuration::ZERO {
        monthly.holiday_work_days += 1;
    }

    if let Some(attendance) = day.attendance_type {
        let increment = if attendance.is_half_day() {
            HALF_DAY
        } else {
            Decimal::ONE
        };
        match attendance {
            AttendanceType::Absence => monthly.absent_days += increment,
            AttendanceType::PaidLeave
            | AttendanceType::HalfLeave
            | AttendanceType::HalfPaidLeave
            | AttendanceType::MorningHalfLeave
            | AttendanceType::AfternoonHalfLeave => monthly.paid_holidays += increment,
            AttendanceType::CompensatoryLeave => monthly.compensatory_holidays += increment,
            AttendanceType::TransferLeave => monthly.transfer_holidays += increment,
            AttendanceType::Late => monthly.late_days += 1,
            AttendanceType::EarlyLeave => monthly.early_leave_days += 1,
            AttendanceType::Flex => monthly.flex_days += 1,
            AttendanceType::OffSite => monthly.off_site_days += 1,
        }
    }

    if let Some(holiday) = day.holiday_type {
        match holiday {
            HolidayType::Statutory => monthly.statutory_holidays += 1,
            HolidayType::Scheduled => monthly.scheduled_holidays += 1,
            HolidayType::Special => monthly.special_holidays += 1,
        }
    }
}
