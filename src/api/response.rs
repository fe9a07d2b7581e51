//! Response types for the attendance engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::workflow::TransitionRejection;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for the `/report/may-edit` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditCheckResponse {
    /// Whether the requester may mutate the month's records and notes.
    pub may_edit: bool,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
        }
    }
}

impl From<TransitionRejection> for ApiErrorResponse {
    fn from(rejection: TransitionRejection) -> Self {
        let (status, code) = match &rejection {
            TransitionRejection::RoleMismatch { .. } => (StatusCode::FORBIDDEN, "ROLE_MISMATCH"),
            TransitionRejection::NotOwner { .. } => (StatusCode::FORBIDDEN, "NOT_OWNER"),
            TransitionRejection::StatusMismatch { .. } => (StatusCode::CONFLICT, "STATUS_MISMATCH"),
        };

        ApiErrorResponse {
            status,
            error: ApiError::new(code, rejection.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportStatus;
    use crate::workflow::ActorRole;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_role_mismatch_maps_to_forbidden() {
        let rejection = TransitionRejection::RoleMismatch {
            action: "approve",
            required: ActorRole::Manager,
            actual: ActorRole::Employee,
        };
        let response: ApiErrorResponse = rejection.into();
        assert_eq!(response.status, StatusCode::FORBIDDEN);
        assert_eq!(response.error.code, "ROLE_MISMATCH");
    }

    #[test]
    fn test_status_mismatch_maps_to_conflict() {
        let rejection = TransitionRejection::StatusMismatch {
            action: "finalize",
            expected: &[ReportStatus::Approved],
            actual: ReportStatus::Submitted,
        };
        let response: ApiErrorResponse = rejection.into();
        assert_eq!(response.status, StatusCode::CONFLICT);
        assert_eq!(response.error.code, "STATUS_MISMATCH");
    }

    #[test]
    fn test_engine_error_maps_to_internal() {
        let error = EngineError::ConfigNotFound {
            path: "/missing".to_string(),
        };
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "CONFIG_ERROR");
    }
}
