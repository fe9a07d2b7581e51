//! Core data models for the attendance engine.
//!
//! This module contains all the domain types used throughout the engine.

mod daily_summary;
mod duration;
mod monthly_summary;
mod report;
mod work_day;

pub use daily_summary::DailySummary;
pub use duration::WorkDuration;
pub use monthly_summary::{MonthlySummary, SummarizedDay};
pub use report::{DayCountOverrides, MonthlyReport, ReportStatus};
pub use work_day::{AttendanceType, HolidayType, WorkDayRecord};
