//! Lifecycle transitions for monthly reports.
//!
//! [`attempt_transition`] is a pure decision function: it checks the actor
//! and the current status against the transition table and returns either
//! the new status with its side effects, or a rejection naming the failed
//! precondition. The caller persists the outcome transactionally against
//! the status it read; if the stored status changed in between, re-reading
//! and retrying reproduces the decision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{MonthlyReport, ReportStatus};

/// The role an actor holds with respect to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorRole {
    /// An employee; only the report's owner may submit or edit.
    Employee,
    /// The reviewing manager.
    Manager,
    /// The accounting role that finalizes approved reports.
    Accounting,
}

impl std::fmt::Display for ActorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActorRole::Employee => "employee",
            ActorRole::Manager => "manager",
            ActorRole::Accounting => "accounting",
        };
        write!(f, "{}", name)
    }
}

/// The actor requesting a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The actor's role.
    pub role: ActorRole,
    /// Whether the actor is the report's own employee.
    #[serde(default)]
    pub is_owner: bool,
}

/// A requested lifecycle transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionAction {
    /// Employee submits a draft or remanded report for review.
    Submit,
    /// Employee withdraws a submitted report back to draft.
    Withdraw,
    /// Manager approves a submitted report.
    Approve,
    /// Manager sends a submitted report back for correction.
    Remand {
        /// The reason given to the employee.
        reason: String,
    },
    /// Manager reverses an approval, returning the report to submitted.
    RevokeApproval,
    /// Accounting finalizes an approved report.
    Finalize,
    /// Accounting reopens a finalized report back to approved.
    RevokeFinalization,
}

impl TransitionAction {
    /// The short name used in rejection messages.
    fn name(&self) -> &'static str {
        match self {
            TransitionAction::Submit => "submit",
            TransitionAction::Withdraw => "withdraw",
            TransitionAction::Approve => "approve",
            TransitionAction::Remand { .. } => "remand",
            TransitionAction::RevokeApproval => "revoke_approval",
            TransitionAction::Finalize => "finalize",
            TransitionAction::RevokeFinalization => "revoke_finalization",
        }
    }

    /// The role allowed to perform this action.
    fn required_role(&self) -> ActorRole {
        match self {
            TransitionAction::Submit | TransitionAction::Withdraw => ActorRole::Employee,
            TransitionAction::Approve
            | TransitionAction::Remand { .. }
            | TransitionAction::RevokeApproval => ActorRole::Manager,
            TransitionAction::Finalize | TransitionAction::RevokeFinalization => {
                ActorRole::Accounting
            }
        }
    }

    /// The statuses this action may be applied from.
    fn allowed_from(&self) -> &'static [ReportStatus] {
        match self {
            TransitionAction::Submit => &[ReportStatus::Draft, ReportStatus::Remanded],
            TransitionAction::Withdraw => &[ReportStatus::Submitted],
            TransitionAction::Approve => &[ReportStatus::Submitted],
            TransitionAction::Remand { .. } => &[ReportStatus::Submitted],
            TransitionAction::RevokeApproval => &[ReportStatus::Approved],
            TransitionAction::Finalize => &[ReportStatus::Approved],
            TransitionAction::RevokeFinalization => &[ReportStatus::Finalized],
        }
    }
}

/// A timestamp or field change the caller must persist with the new status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum SideEffect {
    /// Record today as the submission date.
    SetSubmittedDate,
    /// Remove the submission date.
    ClearSubmittedDate,
    /// Record today as the manager approval date.
    SetManagerApprovalDate,
    /// Remove the manager approval date.
    ClearManagerApprovalDate,
    /// Record today as the accounting approval date (and the legacy
    /// single approval date).
    SetAccountingApprovalDate,
    /// Remove the accounting approval date (and the legacy field).
    ClearAccountingApprovalDate,
    /// Store the manager's remand reason.
    SetRemandReason {
        /// The reason text.
        reason: String,
    },
}

/// The successful result of a transition decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOutcome {
    /// The status the report moves to.
    pub new_status: ReportStatus,
    /// The field changes to persist alongside the status.
    pub effects: Vec<SideEffect>,
}

impl TransitionOutcome {
    /// Applies this outcome to a report.
    ///
    /// `today` is supplied by the caller; the engine never reads the clock.
    pub fn apply_to(&self, report: &mut MonthlyReport, today: NaiveDate) {
        report.status = self.new_status;
        for effect in &self.effects {
            match effect {
                SideEffect::SetSubmittedDate => report.submitted_date = Some(today),
                SideEffect::ClearSubmittedDate => report.submitted_date = None,
                SideEffect::SetManagerApprovalDate => {
                    report.manager_approval_date = Some(today);
                }
                SideEffect::ClearManagerApprovalDate => report.manager_approval_date = None,
                SideEffect::SetAccountingApprovalDate => {
                    report.accounting_approval_date = Some(today);
                    report.approval_date = Some(today);
                }
                SideEffect::ClearAccountingApprovalDate => {
                    report.accounting_approval_date = None;
                    report.approval_date = None;
                }
                SideEffect::SetRemandReason { reason } => {
                    report.remand_reason = Some(reason.clone());
                }
            }
        }
    }
}

/// A refused transition, naming the precondition that failed.
///
/// Rejections carry no partial effects; the report is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionRejection {
    /// The actor's role may not perform this action.
    #[error("'{action}' requires the {required} role, actor is {actual}")]
    RoleMismatch {
        /// The requested action.
        action: &'static str,
        /// The role the action requires.
        required: ActorRole,
        /// The role the actor holds.
        actual: ActorRole,
    },

    /// The actor has the right role but does not own the report.
    #[error("'{action}' is allowed only for the report's own employee")]
    NotOwner {
        /// The requested action.
        action: &'static str,
    },

    /// The report is not in a status this action may be applied from.
    #[error("'{action}' is not allowed from status '{actual}'")]
    StatusMismatch {
        /// The requested action.
        action: &'static str,
        /// The statuses the action is allowed from.
        expected: &'static [ReportStatus],
        /// The report's current status.
        actual: ReportStatus,
    },
}

/// Decides a lifecycle transition.
///
/// Checks the actor first (role, then ownership for employee actions) and
/// the current status second, so the rejection identifies which
/// precondition failed. On success, returns the new status and the side
/// effects to persist; the function itself changes nothing.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportStatus;
/// use attendance_engine::workflow::{
///     attempt_transition, Actor, ActorRole, SideEffect, TransitionAction,
/// };
///
/// let owner = Actor { role: ActorRole::Employee, is_owner: true };
/// let outcome =
///     attempt_transition(ReportStatus::Draft, &TransitionAction::Submit, &owner).unwrap();
/// assert_eq!(outcome.new_status, ReportStatus::Submitted);
/// assert_eq!(outcome.effects, vec![SideEffect::SetSubmittedDate]);
///
/// let someone_else = Actor { role: ActorRole::Employee, is_owner: false };
/// assert!(attempt_transition(ReportStatus::Draft, &TransitionAction::Submit, &someone_else).is_err());
/// ```
pub fn attempt_transition(
    current: ReportStatus,
    action: &TransitionAction,
    actor: &Actor,
) -> Result<TransitionOutcome, TransitionRejection> {
    let required = action.required_role();
    if actor.role != required {
        return Err(TransitionRejection::RoleMismatch {
            action: action.name(),
            required,
            actual: actor.role,
        });
    }
    if required == ActorRole::Employee && !actor.is_owner {
        return Err(TransitionRejection::NotOwner {
            action: action.name(),
        });
    }

    let allowed = action.allowed_from();
    if !allowed.contains(&current) {
        return Err(TransitionRejection::StatusMismatch {
            action: action.name(),
            expected: allowed,
            actual: current,
        });
    }

    let outcome = match action {
        TransitionAction::Submit => TransitionOutcome {
            new_status: ReportStatus::Submitted,
            effects: vec![SideEffect::SetSubmittedDate],
        },
        TransitionAction::Withdraw => TransitionOutcome {
            new_status: ReportStatus::Draft,
            effects: vec![SideEffect::ClearSubmittedDate],
        },
        TransitionAction::Approve => TransitionOutcome {
            new_status: ReportStatus::Approved,
            effects: vec![SideEffect::SetManagerApprovalDate],
        },
        TransitionAction::Remand { reason } => TransitionOutcome {
            new_status: ReportStatus::Remanded,
            effects: vec![SideEffect::SetRemandReason {
                reason: reason.clone(),
            }],
        },
        TransitionAction::RevokeApproval => TransitionOutcome {
            new_status: ReportStatus::Submitted,
            effects: vec![SideEffect::ClearManagerApprovalDate],
        },
        TransitionAction::Finalize => TransitionOutcome {
            new_status: ReportStatus::Finalized,
            effects: vec![SideEffect::SetAccountingApprovalDate],
        },
        TransitionAction::RevokeFinalization => TransitionOutcome {
            new_status: ReportStatus::Approved,
            effects: vec![SideEffect::ClearAccountingApprovalDate],
        },
    };

    Ok(outcome)
}

/// Returns whether the underlying day records and notes may be edited.
///
/// Editing is allowed only while the report is in `Draft` or `Remanded`,
/// and only for the report's own employee. Every other combination fails
/// closed.
///
/// # Example
///
/// ```
/// use attendance_engine::models::ReportStatus;
/// use attendance_engine::workflow::may_edit;
///
/// assert!(may_edit(ReportStatus::Draft, true));
/// assert!(may_edit(ReportStatus::Remanded, true));
/// assert!(!may_edit(ReportStatus::Submitted, true));
/// assert!(!may_edit(ReportStatus::Draft, false));
/// ```
pub fn may_edit(status: ReportStatus, actor_is_owner: bool) -> bool {
    actor_is_owner && matches!(status, ReportStatus::Draft | ReportStatus::Remanded)
}
