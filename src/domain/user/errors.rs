//! User and skill association error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SkillId, UserId, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserSkillError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Skill not found: {0}")]
    SkillNotFound(SkillId),

    #[error("User {user_id} does not have skill {skill_id}")]
    AssociationNotFound { user_id: UserId, skill_id: SkillId },

    #[error("User {user_id} already has skill {skill_id}")]
    Duplicate { user_id: UserId, skill_id: SkillId },

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl UserSkillError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserSkillError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            UserSkillError::UserNotFound(_) => ErrorCode::UserNotFound,
            UserSkillError::SkillNotFound(_) => ErrorCode::SkillNotFound,
            UserSkillError::AssociationNotFound { .. } => ErrorCode::UserSkillNotFound,
            UserSkillError::Duplicate { .. } => ErrorCode::DuplicateUserSkill,
            UserSkillError::StoreUnavailable(_) => ErrorCode::StoreUnavailable,
            UserSkillError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<ValidationError> for UserSkillError {
    fn from(err: ValidationError) -> Self {
        UserSkillError::InvalidArgument(err.to_string())
    }
}

impl From<DomainError> for UserSkillError {
    fn from(err: DomainError) -> Self {
        let user_id = UserId::from_raw(
            err.detail("user_id")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        );
        let skill_id = SkillId::from_raw(
            err.detail("skill_id")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
        );
        match err.code {
            ErrorCode::UserNotFound => UserSkillError::UserNotFound(user_id),
            ErrorCode::SkillNotFound => UserSkillError::SkillNotFound(skill_id),
            ErrorCode::UserSkillNotFound => {
                UserSkillError::AssociationNotFound { user_id, skill_id }
            }
            ErrorCode::DuplicateUserSkill => UserSkillError::Duplicate { user_id, skill_id },
            ErrorCode::InvalidArgument
            | ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => UserSkillError::InvalidArgument(err.message),
            ErrorCode::StoreUnavailable => UserSkillError::StoreUnavailable(err.message),
            _ => UserSkillError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_pair_round_trips_ids() {
        let err = DomainError::new(ErrorCode::DuplicateUserSkill, "dup")
            .with_detail("user_id", "1")
            .with_detail("skill_id", "2");
        assert_eq!(
            UserSkillError::from(err),
            UserSkillError::Duplicate {
                user_id: UserId::from_raw(1),
                skill_id: SkillId::from_raw(2)
            }
        );
    }

    #[test]
    fn store_unavailable_is_preserved() {
        let err = UserSkillError::from(DomainError::store_unavailable("down"));
        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }
}
