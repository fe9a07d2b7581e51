//! Work-day record model and classification tags.
//!
//! This module defines the raw per-day input row supplied by the storage
//! collaborator, together with the closed enumerations for attendance and
//! holiday classification. The original records carried these as free-text
//! tags matched by equality; modelling them as enums makes an unknown code
//! detectable at the parse boundary instead of a silent no-op.

use serde::{Deserialize, Serialize};

/// Attendance classification for a calendar day.
///
/// Consumed only by the monthly aggregator, which maps each variant to
/// exactly one day counter. The four half-day variants count as 0.5 of a
/// paid holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceType {
    /// Unexcused absence.
    Absence,
    /// Full-day paid leave.
    PaidLeave,
    /// Generic half-day leave.
    HalfLeave,
    /// Half-day paid leave.
    HalfPaidLeave,
    /// Morning half-day leave.
    MorningHalfLeave,
    /// Afternoon half-day leave.
    AfternoonHalfLeave,
    /// Compensatory leave granted for prior holiday work.
    CompensatoryLeave,
    /// Leave taken against a transferred working day.
    TransferLeave,
    /// Arrived late.
    Late,
    /// Left early.
    EarlyLeave,
    /// Flex-time day.
    Flex,
    /// Worked off-site (direct to/from a client).
    OffSite,
}

impl AttendanceType {
    /// Parses an attendance code, returning `None` for unknown codes.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::AttendanceType;
    ///
    /// assert_eq!(AttendanceType::from_code("paid_leave"), Some(AttendanceType::PaidLeave));
    /// assert_eq!(AttendanceType::from_code("sabbatical"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "absence" => Some(Self::Absence),
            "paid_leave" => Some(Self::PaidLeave),
            "half_leave" => Some(Self::HalfLeave),
            "half_paid_leave" => Some(Self::HalfPaidLeave),
            "morning_half_leave" => Some(Self::MorningHalfLeave),
            "afternoon_half_leave" => Some(Self::AfternoonHalfLeave),
            "compensatory_leave" => Some(Self::CompensatoryLeave),
            "transfer_leave" => Some(Self::TransferLeave),
            "late" => Some(Self::Late),
            "early_leave" => Some(Self::EarlyLeave),
            "flex" => Some(Self::Flex),
            "off_site" => Some(Self::OffSite),
            _ => None,
        }
    }

    /// Returns true for the half-day leave variants.
    pub fn is_half_day(&self) -> bool {
        matches!(
            self,
            Self::HalfLeave | Self::HalfPaidLeave | Self::MorningHalfLeave | Self::AfternoonHalfLeave
        )
    }
}

/// Holiday classification for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayType {
    /// A statutory (legally mandated) holiday.
    Statutory,
    /// A company-scheduled holiday.
    Scheduled,
    /// A special holiday granted by the company.
    Special,
}

impl HolidayType {
    /// Parses a holiday code, returning `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "statutory" => Some(Self::Statutory),
            "scheduled" => Some(Self::Scheduled),
            "special" => Some(Self::Special),
            _ => None,
        }
    }
}

/// One calendar day of raw timesheet data for one employee.
///
/// Time fields are kept as the raw `"H:MM"` text the employee entered;
/// decoding is lenient and happens inside the calculator, so an incomplete
/// or malformed row still produces a (possibly all-zero) summary.
///
/// A record with neither start nor end time is a day with no work entered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkDayRecord {
    /// Clock-in time as `"H:MM"`, absent when no work was entered.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Clock-out time as `"H:MM"`; may exceed `"24:00"` for shifts ending
    /// the next calendar day.
    #[serde(default)]
    pub end_time: Option<String>,
    /// Total break time as `"H:MM"`, defaults to zero.
    #[serde(default)]
    pub break_time: Option<String>,
    /// Break time taken inside the late-night window as `"H:MM"`.
    #[serde(default)]
    pub night_break_time: Option<String>,
    /// Holiday classification, absent on ordinary working days.
    #[serde(default)]
    pub holiday_type: Option<HolidayType>,
    /// True when the date is a weekend or a registered public holiday.
    #[serde(default)]
    pub is_calendar_holiday: bool,
    /// Attendance classification, consumed by the monthly aggregator.
    #[serde(default)]
    pub attendance_type: Option<AttendanceType>,
}

impl WorkDayRecord {
    /// Returns true when the day counts as a holiday for bucket
    /// classification: either an explicit holiday type is present or the
    /// calendar marks the date as a holiday.
    pub fn is_holiday(&self) -> bool {
        self.holiday_type.is_some() || self.is_calendar_holiday
    }
}
