//! Monthly aggregation output: duration totals and day counts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AttendanceType, DailySummary, HolidayType, WorkDuration};

/// One day's contribution to the monthly aggregation.
///
/// Carries the already-computed [`DailySummary`] together with the day's
/// classification tags, which only the aggregator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizedDay {
    /// Attendance classification for the day, if any.
    #[serde(default)]
    pub attendance_type: Option<AttendanceType>,
    /// Holiday classification for the day, if any.
    #[serde(default)]
    pub holiday_type: Option<HolidayType>,
    /// The day's classified duration buckets.
    pub summary: DailySummary,
}

/// Aggregated totals and day counts for one employee-month.
///
/// The four leave counters that can accumulate in half-day steps
/// (`absent_days`, `paid_holidays`, `compensatory_holidays`,
/// `transfer_holidays`) use exact decimal arithmetic; the remaining
/// counters are whole days. Duration totals carry a `total_` prefix
/// matching their [`DailySummary`] field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Days on which any time was worked (`working_hours > 0`).
    pub working_days: u32,
    /// Days on which holiday work was performed (`holiday_work > 0`).
    pub holiday_work_days: u32,
    /// Absence days.
    pub absent_days: Decimal,
    /// Paid leave days, in half-day steps.
    pub paid_holidays: Decimal,
    /// Compensatory leave days.
    pub compensatory_holidays: Decimal,
    /// Transfer leave days.
    pub transfer_holidays: Decimal,
    /// Days with a late arrival.
    pub late_days: u32,
    /// Days with an early departure.
    pub early_leave_days: u32,
    /// Flex-time days.
    pub flex_days: u32,
    /// Off-site working days.
    pub off_site_days: u32,
    /// Statutory holidays in the month.
    pub statutory_holidays: u32,
    /// Company-scheduled holidays in the month.
    pub scheduled_holidays: u32,
    /// Special holidays in the month.
    pub special_holidays: u32,
    /// Total of `working_hours` across the month.
    pub total_working_hours: WorkDuration,
    /// Total of `scheduled_work` across the month.
    pub total_scheduled_work: WorkDuration,
    /// Total of `statutory_inner_overtime` across the month.
    pub total_statutory_inner_overtime: WorkDuration,
    /// Total of `statutory_outer_overtime` across the month.
    pub total_statutory_outer_overtime: WorkDuration,
    /// Total of `late_night_work` across the month.
    pub total_late_night_work: WorkDuration,
    /// Total of `holiday_work` across the month.
    pub total_holiday_work: WorkDuration,
    /// Total of `late_night_holiday_work` across the month.
    pub total_late_night_holiday_work: WorkDuration,
}

impl MonthlySummary {
    /// Merges another partial sum into this one.
    ///
    /// Every counter and total is additive, so a month may be aggregated in
    /// any grouping: folding days one by one and merging partial sums over
    /// day ranges produce identical results.
    pub fn merge(&mut self, other: &MonthlySummary) {
        self.working_days += other.working_days;
        self.holiday_work_days += other.holiday_work_days;
        self.absent_days += other.absent_days;
        self.paid_holidays += other.paid_holidays;
        self.compensatory_holidays += other.compensatory_holidays;
        self.transfer_holidays += other.transfer_holidays;
        self.late_days += other.late_days;
        self.early_leave_days += other.early_leave_days;
        self.flex_days += other.flex_days;
        self.off_site_days += other.off_site_days;
        self.statutory_holidays += other.statutory_holidays;
        self.scheduled_holidays += other.scheduled_holidays;
        self.special_holidays += other.special_holidays;
        self.total_working_hours += other.total_working_hours;
        self.total_scheduled_work += other.total_scheduled_work;
        self.total_statutory_inner_overtime += other.total_statutory_inner_overtime;
        self.total_statutory_outer_overtime += other.total_statutory_outer_overtime;
        self.total_late_night_work += other.total_late_night_work;
        self.total_holiday_work += other.total_holiday_work;
        self.total_late_night_holiday_work += other.total_late_night_holiday_work;
    }
}
