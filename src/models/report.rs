//! Monthly report model and its lifecycle status.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::MonthlySummary;

/// Lifecycle status of a monthly report.
///
/// Reports move `Draft → Submitted → Approved → Finalized`, with
/// `Remanded` reachable only from `Submitted`. `Remanded` behaves like
/// `Draft` for edit permission: the owning employee may resume editing and
/// re-submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Being edited by the employee; never yet submitted, or withdrawn.
    Draft,
    /// Submitted by the employee, awaiting manager review.
    Submitted,
    /// Approved by the manager, awaiting accounting.
    Approved,
    /// Sent back by the manager for correction.
    Remanded,
    /// Finalized by accounting.
    Finalized,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Submitted => "submitted",
            ReportStatus::Approved => "approved",
            ReportStatus::Remanded => "remanded",
            ReportStatus::Finalized => "finalized",
        };
        write!(f, "{}", name)
    }
}

/// Manually entered day counts that take precedence over computed values.
///
/// A human reviewer may correct the absence/leave/lateness counts for a
/// month; any count present here replaces the aggregator's value when the
/// report is displayed or stored. Absent fields fall back to the computed
/// counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayCountOverrides {
    /// Override for absence days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absent_days: Option<Decimal>,
    /// Override for paid leave days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_holidays: Option<Decimal>,
    /// Override for compensatory leave days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compensatory_holidays: Option<Decimal>,
    /// Override for transfer leave days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_holidays: Option<Decimal>,
    /// Override for late-arrival days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub late_days: Option<u32>,
    /// Override for early-departure days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub early_leave_days: Option<u32>,
}

impl DayCountOverrides {
    /// Returns true when no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One employee's report for one calendar month.
///
/// Created in `Draft` the first time anything touches the employee-month
/// (the explicit form of the original's implicit upsert); it persists
/// indefinitely and has no deletion path. The numeric pipeline never reads
/// this type; it only gates whether the underlying day records may be
/// edited and records who moved the report between states, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// The owning employee.
    pub employee_id: String,
    /// Calendar year of the report.
    pub year: i32,
    /// Calendar month of the report (1-12).
    pub month: u32,
    /// Current lifecycle status.
    pub status: ReportStatus,
    /// Free-text notes the employee attaches to the month.
    #[serde(default)]
    pub special_notes: Option<String>,
    /// Date the report was last submitted.
    #[serde(default)]
    pub submitted_date: Option<NaiveDate>,
    /// Date the manager approved.
    #[serde(default)]
    pub manager_approval_date: Option<NaiveDate>,
    /// Date accounting finalized.
    #[serde(default)]
    pub accounting_approval_date: Option<NaiveDate>,
    /// Legacy single approval date, kept in step with
    /// `accounting_approval_date` for older consumers.
    #[serde(default)]
    pub approval_date: Option<NaiveDate>,
    /// The manager's most recent remand reason. Retained for audit after
    /// resubmission; see [`MonthlyReport::active_remand_reason`].
    #[serde(default)]
    pub remand_reason: Option<String>,
    /// Manually entered day counts overriding the aggregator.
    #[serde(default)]
    pub overrides: DayCountOverrides,
}

impl MonthlyReport {
    /// Creates a fresh report in `Draft` for an employee-month.
    ///
    /// This is the initial value a `get_or_create` on the storage side hands
    /// out when no row exists yet.
    pub fn new(employee_id: impl Into<String>, year: i32, month: u32) -> Self {
        Self {
            employee_id: employee_id.into(),
            year,
            month,
            status: ReportStatus::Draft,
            special_notes: None,
            submitted_date: None,
            manager_approval_date: None,
            accounting_approval_date: None,
            approval_date: None,
            remand_reason: None,
            overrides: DayCountOverrides::default(),
        }
    }

    /// Returns the remand reason only while the report is in `Remanded`.
    ///
    /// Resubmitting clears the reason from display but keeps it stored for
    /// audit, so the raw `remand_reason` field outlives the state.
    pub fn active_remand_reason(&self) -> Option<&str> {
        if self.status == ReportStatus::Remanded {
            self.remand_reason.as_deref()
        } else {
            None
        }
    }

    /// Applies the manual overrides to a computed summary.
    ///
    /// Returns a copy of `computed` with each overridden counter replaced;
    /// counters without an override keep the aggregator's value.
    pub fn resolved_counts(&self, computed: &MonthlySummary) -> MonthlySummary {
        let mut resolved = computed.clone();
        if let Some(absent) = self.overrides.absent_days {
            resolved.absent_days = absent;
        }
        if let Some(paid) = self.overrides.paid_holidays {
            resolved.paid_holidays = paid;
        }
        if let Some(compensatory) = self.overrides.compensatory_holidays {
            resolved.compensatory_holidays = compensatory;
        }
        if let Some(transfer) = self.overrides.transfer_holidays {
            resolved.transfer_holidays = transfer;
        }
        if let Some(late) = self.overrides.late_days {
            resolved.late_days = late;
        }
        if let Some(early) = self.overrides.early_leave_days {
            resolved.early_leave_days = early;
        }
        resolved
    }
}
