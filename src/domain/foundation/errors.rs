//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

use super::{MissionApplicationId, MissionId, SkillId, UserId};

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' must be a positive integer, got {actual}")]
    NotPositive { field: String, actual: i64 },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too-long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates a non-positive identifier error.
    pub fn not_positive(field: impl Into<String>, actual: i64) -> Self {
        ValidationError::NotPositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotPositive { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    OutOfRange,
    InvalidFormat,
    InvalidArgument,

    // Not found errors
    MissionNotFound,
    ApplicationNotFound,
    UserNotFound,
    SkillNotFound,
    UserSkillNotFound,

    // Conflict errors
    MissionHasApplications,
    DuplicateApplication,
    DuplicateUserSkill,

    // Infrastructure errors
    StoreUnavailable,
    DatabaseError,
    InternalError,
}

impl ErrorCode {
    /// Returns true for codes that mean "the referenced entity is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ErrorCode::MissionNotFound
                | ErrorCode::ApplicationNotFound
                | ErrorCode::UserNotFound
                | ErrorCode::SkillNotFound
                | ErrorCode::UserSkillNotFound
        )
    }

    /// Returns true for transient infrastructure failures worth retrying.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCode::StoreUnavailable)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
            ErrorCode::MissionNotFound => "MISSION_NOT_FOUND",
            ErrorCode::ApplicationNotFound => "APPLICATION_NOT_FOUND",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::SkillNotFound => "SKILL_NOT_FOUND",
            ErrorCode::UserSkillNotFound => "USER_SKILL_NOT_FOUND",
            ErrorCode::MissionHasApplications => "MISSION_HAS_APPLICATIONS",
            ErrorCode::DuplicateApplication => "DUPLICATE_APPLICATION",
            ErrorCode::DuplicateUserSkill => "DUPLICATE_USER_SKILL",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Creates a transient store failure.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Looks up a detail by key.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }
}

// Store-side constructors. The ids travel as details so the module error
// enums can rebuild typed variants from them.
impl DomainError {
    pub fn mission_not_found(id: MissionId) -> Self {
        Self::new(ErrorCode::MissionNotFound, format!("Mission not found: {}", id))
            .with_detail("mission_id", id.to_string())
    }

    pub fn application_not_found(id: MissionApplicationId) -> Self {
        Self::new(
            ErrorCode::ApplicationNotFound,
            format!("Mission application not found: {}", id),
        )
        .with_detail("application_id", id.to_string())
    }

    pub fn user_not_found(id: UserId) -> Self {
        Self::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
            .with_detail("user_id", id.to_string())
    }

    pub fn skill_not_found(id: SkillId) -> Self {
        Self::new(ErrorCode::SkillNotFound, format!("Skill not found: {}", id))
            .with_detail("skill_id", id.to_string())
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match &err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::TooLong { .. } => ErrorCode::OutOfRange,
            ValidationError::NotPositive { .. } => ErrorCode::InvalidArgument,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("title");
        assert_eq!(format!("{}", err), "Field 'title' cannot be empty");
    }

    #[test]
    fn validation_error_not_positive_displays_correctly() {
        let err = ValidationError::not_positive("application_id", -5);
        assert_eq!(
            format!("{}", err),
            "Field 'application_id' must be a positive integer, got -5"
        );
    }

    #[test]
    fn validation_error_exposes_field_name() {
        assert_eq!(ValidationError::too_long("theme", 10, 11).field(), "theme");
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::MissionNotFound, "Mission not found");
        assert_eq!(format!("{}", err), "[MISSION_NOT_FOUND] Mission not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::ValidationFailed, "Validation failed")
            .with_detail("field", "title")
            .with_detail("reason", "empty");

        assert_eq!(err.detail("field"), Some("title"));
        assert_eq!(err.detail("reason"), Some("empty"));
    }

    #[test]
    fn not_positive_converts_to_invalid_argument() {
        let err: DomainError = ValidationError::not_positive("id", 0).into();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
        assert_eq!(err.detail("field"), Some("id"));
    }

    #[test]
    fn application_not_found_carries_id_detail() {
        let err = DomainError::application_not_found(MissionApplicationId::from_raw(10));
        assert_eq!(err.code, ErrorCode::ApplicationNotFound);
        assert_eq!(err.detail("application_id"), Some("10"));
    }

    #[test]
    fn store_unavailable_is_transient_not_not_found() {
        let err = DomainError::store_unavailable("pool timed out");
        assert!(err.code.is_transient());
        assert!(!err.code.is_not_found());
        assert!(ErrorCode::ApplicationNotFound.is_not_found());
    }
}
