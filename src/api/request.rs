//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the summary and
//! report endpoints.

use serde::{Deserialize, Serialize};

use crate::models::{ReportStatus, SummarizedDay, WorkDayRecord};
use crate::workflow::{Actor, TransitionAction};

/// Request body for the `/summary/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySummaryRequest {
    /// The raw day record to classify.
    pub record: WorkDayRecord,
}

/// Request body for the `/summary/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySummaryRequest {
    /// The month's days, each with its summary and classification tags.
    #[serde(default)]
    pub days: Vec<SummarizedDay>,
}

/// Request body for the `/report/transition` endpoint.
///
/// `current_status` is the status the caller read from storage; the caller
/// is responsible for persisting the returned outcome transactionally
/// against that same status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// The report status the caller read.
    pub current_status: ReportStatus,
    /// The requested transition.
    pub action: TransitionAction,
    /// The actor requesting it.
    pub actor: Actor,
}

/// Request body for the `/report/may-edit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCheckRequest {
    /// The report status the caller read.
    pub current_status: ReportStatus,
    /// Whether the requester is the report's own employee.
    #[serde(default)]
    pub is_owner: bool,
}
