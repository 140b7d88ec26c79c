//! Common error types used across the workspace.
//!
//! Three families of failure reach a user:
//! - a creation form fails client-side checks ([`ValidationError`]),
//! - the backend could not be reached or answered non-2xx ([`BackendError`]),
//! - both wrapped together by callers that can hit either ([`DeskError`]).

use crate::maintenance::MaintenanceStatus;

/// Base error for operations that validate input and then call the backend.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl DeskError {
    /// Text suitable for a blocking user notification.
    ///
    /// Backend failures prefer the server-provided `detail`; everything else
    /// falls back to `fallback` or the validation message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Backend(err) => err.user_message(fallback),
        }
    }
}

/// A creation or update request rejected before it left the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a number")]
    InvalidNumber(&'static str),

    #[error("{0} must be a date (YYYY-MM-DD)")]
    InvalidDate(&'static str),

    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),

    #[error("{0} has an unsupported value")]
    UnknownOption(&'static str),

    #[error("check-out date cannot be before check-in date")]
    CheckOutBeforeCheckIn,

    #[error("cannot move a request from {from} to {to}")]
    InvalidTransition {
        from: MaintenanceStatus,
        to: MaintenanceStatus,
    },

    #[error("{entity} {id} not found")]
    UnknownReference { entity: &'static str, id: String },
}

/// A call to the REST backend that did not produce the expected response.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The request never completed (connection refused, timeout, …).
    #[error("backend unreachable: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// `detail` field of the JSON error body, when present.
        detail: Option<String>,
    },

    /// A 2xx body could not be decoded into the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(Box<dyn std::error::Error + Send + Sync>),
}

impl BackendError {
    /// The backend `detail` if one was provided, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } if !detail.is_empty() => detail.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the request reached the backend and was answered.
    #[must_use]
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_prefer_backend_detail_in_user_message() {
        let err = BackendError::Status {
            status: 400,
            detail: Some("Room number may already exist".to_string()),
        };
        assert_eq!(
            err.user_message("Failed to create room"),
            "Room number may already exist"
        );
    }

    #[test]
    fn should_fall_back_when_detail_missing_or_empty() {
        let missing = BackendError::Status {
            status: 500,
            detail: None,
        };
        let empty = BackendError::Status {
            status: 500,
            detail: Some(String::new()),
        };
        assert_eq!(missing.user_message("Failed"), "Failed");
        assert_eq!(empty.user_message("Failed"), "Failed");
    }

    #[test]
    fn should_fall_back_for_transport_errors() {
        let err = BackendError::Transport("connection refused".into());
        assert_eq!(err.user_message("Failed to fetch data"), "Failed to fetch data");
        assert!(!err.is_status());
    }

    #[test]
    fn should_display_status_code() {
        let err = BackendError::Status {
            status: 503,
            detail: None,
        };
        assert_eq!(err.to_string(), "HTTP 503");
    }

    #[test]
    fn should_use_validation_text_as_user_message() {
        let err = DeskError::from(ValidationError::Required("Full name"));
        assert_eq!(err.user_message("ignored"), "Full name is required");
    }
}
