//! Mission-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, MissionId, ValidationError};

/// Errors returned by the mission command and query handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    #[error("Validation failed for '{field}': {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Mission not found: {0}")]
    NotFound(MissionId),

    #[error("Mission {mission_id} still has {count} application(s)")]
    HasApplications { mission_id: MissionId, count: u64 },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl MissionError {
    pub fn not_found(id: MissionId) -> Self {
        MissionError::NotFound(id)
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MissionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            MissionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            MissionError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            MissionError::NotFound(_) => ErrorCode::MissionNotFound,
            MissionError::HasApplications { .. } => ErrorCode::MissionHasApplications,
            MissionError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            MissionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for MissionError {
    fn from(err: ValidationError) -> Self {
        if matches!(err, ValidationError::NotPositive { .. }) && err.field() == "mission_id" {
            return MissionError::InvalidArgument(err.to_string());
        }
        MissionError::validation(err.field().to_string(), err.to_string())
    }
}

impl From<DomainError> for MissionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::MissionNotFound => MissionError::NotFound(MissionId::from_raw(
                err.detail("mission_id")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_default(),
            )),
            ErrorCode::MissionHasApplications => MissionError::HasApplications {
                mission_id: MissionId::from_raw(
                    err.detail("mission_id")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or_default(),
                ),
                count: err
                    .detail("count")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_default(),
            },
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => MissionError::ValidationFailed {
                field: err.detail("field").unwrap_or("unknown").to_string(),
                message: err.message,
            },
            ErrorCode::InvalidArgument => MissionError::InvalidArgument(err.message),
            ErrorCode::StoreUnavailable => MissionError::StoreUnavailable(err.message),
            _ => MissionError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_domain_error_keeps_mission_id() {
        let err = DomainError::new(ErrorCode::MissionNotFound, "Mission not found: 3")
            .with_detail("mission_id", "3");
        assert_eq!(
            MissionError::from(err),
            MissionError::NotFound(MissionId::from_raw(3))
        );
    }

    #[test]
    fn store_unavailable_is_not_downgraded() {
        let err = DomainError::store_unavailable("pool timed out");
        assert!(matches!(
            MissionError::from(err),
            MissionError::StoreUnavailable(_)
        ));
    }

    #[test]
    fn has_applications_carries_count() {
        let err = DomainError::new(ErrorCode::MissionHasApplications, "busy")
            .with_detail("mission_id", "1")
            .with_detail("count", "2");
        assert_eq!(
            MissionError::from(err),
            MissionError::HasApplications {
                mission_id: MissionId::from_raw(1),
                count: 2
            }
        );
    }

    #[test]
    fn validation_error_maps_to_validation_failed() {
        let err = MissionError::from(ValidationError::empty_field("title"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn non_positive_mission_id_is_invalid_argument() {
        let err = MissionError::from(ValidationError::not_positive("mission_id", 0));
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
    }
}
