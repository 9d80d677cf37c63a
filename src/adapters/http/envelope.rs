//! Uniform response envelope and error mapping for every endpoint.
//!
//! Wire shape: `{ "data": <json|null>, "result": 1 | 2, "message": "" }`
//! where `1` is success and `2` is failure.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Serialize, Serializer};

use crate::domain::mission::MissionError;
use crate::domain::mission_application::ApplicationError;
use crate::domain::user::UserSkillError;

/// Seconds a client should wait before retrying a `StoreUnavailable` failure.
const RETRY_AFTER_SECS: &str = "5";

/// Outcome flag of an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    Failure,
}

impl ResultCode {
    pub fn as_i32(&self) -> i32 {
        match self {
            ResultCode::Success => 1,
            ResultCode::Failure => 2,
        }
    }
}

impl Serialize for ResultCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

/// The response wrapper shared by all endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
    pub result: ResultCode,
    pub message: String,
}

impl<T: Serialize> ApiEnvelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            result: ResultCode::Success,
            message: String::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

impl ApiEnvelope<()> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            result: ResultCode::Failure,
            message: message.into(),
        }
    }
}

/// 200 OK with a success envelope.
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiEnvelope::success(data))).into_response()
}

/// 201 Created with a success envelope.
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(ApiEnvelope::success(data))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Failure responses. Each variant fixes the status code; the message
/// lands in the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unavailable(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) | ApiError::Conflict(msg) => {
                tracing::debug!(status = status.as_u16(), "{}", msg);
                msg
            }
            ApiError::Unavailable(msg) => {
                tracing::warn!("Store unavailable: {}", msg);
                "The service is temporarily unavailable, please retry".to_string()
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An unexpected error occurred".to_string()
            }
        };

        let mut response = (status, Json(ApiEnvelope::failure(message))).into_response();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from_static(RETRY_AFTER_SECS));
        }
        response
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<MissionError> for ApiError {
    fn from(err: MissionError) -> Self {
        match err {
            MissionError::ValidationFailed { .. } | MissionError::InvalidArgument(_) => {
                ApiError::BadRequest(err.to_string())
            }
            MissionError::NotFound(_) => ApiError::NotFound(err.to_string()),
            MissionError::HasApplications { .. } => ApiError::Conflict(err.to_string()),
            MissionError::StoreUnavailable(msg) => ApiError::Unavailable(msg),
            MissionError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidArgument(_) => ApiError::BadRequest(err.to_string()),
            ApplicationError::NotFound(_)
            | ApplicationError::MissionNotFound(_)
            | ApplicationError::UserNotFound(_) => ApiError::NotFound(err.to_string()),
            ApplicationError::AlreadyApplied { .. } => ApiError::Conflict(err.to_string()),
            ApplicationError::StoreUnavailable(msg) => ApiError::Unavailable(msg),
            ApplicationError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<UserSkillError> for ApiError {
    fn from(err: UserSkillError) -> Self {
        match err {
            UserSkillError::InvalidArgument(_) => ApiError::BadRequest(err.to_string()),
            UserSkillError::UserNotFound(_)
            | UserSkillError::SkillNotFound(_)
            | UserSkillError::AssociationNotFound { .. } => ApiError::NotFound(err.to_string()),
            UserSkillError::Duplicate { .. } => ApiError::Conflict(err.to_string()),
            UserSkillError::StoreUnavailable(msg) => ApiError::Unavailable(msg),
            UserSkillError::Infrastructure(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{MissionApplicationId, MissionId};

    #[test]
    fn success_envelope_serializes_result_as_one() {
        let json = serde_json::to_value(ApiEnvelope::success("done")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "data": "done", "result": 1, "message": "" })
        );
    }

    #[test]
    fn failure_envelope_has_null_data_and_result_two() {
        let json = serde_json::to_value(ApiEnvelope::failure("nope")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "data": null, "result": 2, "message": "nope" })
        );
    }

    #[test]
    fn application_not_found_maps_to_404() {
        let err = ApiError::from(ApplicationError::NotFound(MissionApplicationId::from_raw(10)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_argument_maps_to_400() {
        let err = ApiError::from(ApplicationError::InvalidArgument("id".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn referenced_mission_maps_to_409() {
        let err = ApiError::from(MissionError::HasApplications {
            mission_id: MissionId::from_raw(1),
            count: 2,
        });
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn store_unavailable_maps_to_503_with_retry_after() {
        let response =
            ApiError::from(MissionError::StoreUnavailable("timeout".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            RETRY_AFTER_SECS
        );
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let err = ApiError::from(UserSkillError::Infrastructure("boom".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
