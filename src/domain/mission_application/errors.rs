//! Application workflow error types.

use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, MissionApplicationId, MissionId, UserId, ValidationError,
};

/// Errors returned by the application workflow handlers.
///
/// `NotFound` on approve or delete means "already gone" to callers;
/// `StoreUnavailable` is transient and safe to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Mission application not found: {0}")]
    NotFound(MissionApplicationId),

    #[error("Mission not found: {0}")]
    MissionNotFound(MissionId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("User {user_id} has already applied to mission {mission_id}")]
    AlreadyApplied { mission_id: MissionId, user_id: UserId },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn not_found(id: MissionApplicationId) -> Self {
        ApplicationError::NotFound(id)
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApplicationError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            ApplicationError::NotFound(_) => ErrorCode::ApplicationNotFound,
            ApplicationError::MissionNotFound(_) => ErrorCode::MissionNotFound,
            ApplicationError::UserNotFound(_) => ErrorCode::UserNotFound,
            ApplicationError::AlreadyApplied { .. } => ErrorCode::DuplicateApplication,
            ApplicationError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            ApplicationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// True for every "referenced entity is absent" variant.
    pub fn is_not_found(&self) -> bool {
        self.code().is_not_found()
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::InvalidArgument(err.to_string())
    }
}

fn detail_id(err: &DomainError, key: &str) -> i64 {
    err.detail(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ApplicationNotFound => ApplicationError::NotFound(
                MissionApplicationId::from_raw(detail_id(&err, "application_id")),
            ),
            ErrorCode::MissionNotFound => {
                ApplicationError::MissionNotFound(MissionId::from_raw(detail_id(&err, "mission_id")))
            }
            ErrorCode::UserNotFound => {
                ApplicationError::UserNotFound(UserId::from_raw(detail_id(&err, "user_id")))
            }
            ErrorCode::DuplicateApplication => ApplicationError::AlreadyApplied {
                mission_id: MissionId::from_raw(detail_id(&err, "mission_id")),
                user_id: UserId::from_raw(detail_id(&err, "user_id")),
            },
            ErrorCode::InvalidArgument => ApplicationError::InvalidArgument(err.message),
            ErrorCode::StoreUnavailable => ApplicationError::StoreUnavailable(err.message),
            _ => ApplicationError::Infrastructure(err.to_string()),
        }
    }
}
