//! HTTP handlers for the mission application workflow.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::correlation::request_metadata;
use crate::adapters::http::envelope::{created, ok, ApiEnvelope, ApiError};
use crate::application::handlers::mission_application::{
    ApplyToMissionCommand, ApplyToMissionHandler, ApproveApplicationCommand,
    ApproveApplicationHandler, DeleteApplicationCommand, DeleteApplicationHandler,
    ListApplicationsHandler,
};
use crate::ports::EntityStore;

use super::dto::{ApplyMissionRequest, MissionApplicationResponse, MissionApplicationViewResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MissionApplicationHandlers {
    list_handler: Arc<ListApplicationsHandler>,
    approve_handler: Arc<ApproveApplicationHandler>,
    delete_handler: Arc<DeleteApplicationHandler>,
    apply_handler: Arc<ApplyToMissionHandler>,
}

impl MissionApplicationHandlers {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            list_handler: Arc::new(ListApplicationsHandler::new(
                store.application_reader.clone(),
            )),
            approve_handler: Arc::new(ApproveApplicationHandler::new(
                store.applications.clone(),
            )),
            delete_handler: Arc::new(DeleteApplicationHandler::new(store.applications.clone())),
            apply_handler: Arc::new(ApplyToMissionHandler::new(store.applications.clone())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/Mission/MissionApplicationList - Enriched applications by id
pub async fn mission_application_list(
    State(handlers): State<MissionApplicationHandlers>,
) -> Result<Response, ApiError> {
    let views = handlers.list_handler.handle().await?;
    let response: Vec<MissionApplicationViewResponse> = views
        .into_iter()
        .map(MissionApplicationViewResponse::from)
        .collect();
    Ok(ok(response))
}

/// POST /api/Mission/MissionApplicationApprove - Body is the bare id, e.g. `10`
pub async fn mission_application_approve(
    State(handlers): State<MissionApplicationHandlers>,
    headers: HeaderMap,
    payload: Result<Json<i64>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(application_id) = payload?;
    let result = handlers
        .approve_handler
        .handle(
            ApproveApplicationCommand { application_id },
            request_metadata(&headers),
        )
        .await?;

    // A repeat approval reads the same as the first one
    let envelope =
        ApiEnvelope::success(MissionApplicationResponse::from(&result.application))
            .with_message("Approved");
    Ok((StatusCode::OK, Json(envelope)).into_response())
}

/// DELETE /api/Mission/MissionApplicationDelete/:id - Remove an application
pub async fn mission_application_delete(
    State(handlers): State<MissionApplicationHandlers>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(application_id) = id?;
    handlers
        .delete_handler
        .handle(
            DeleteApplicationCommand { application_id },
            request_metadata(&headers),
        )
        .await?;
    Ok(ok("Mission application deleted successfully"))
}

/// POST /api/Mission/ApplyMission - A user applies to a mission
pub async fn apply_mission(
    State(handlers): State<MissionApplicationHandlers>,
    headers: HeaderMap,
    payload: Result<Json<ApplyMissionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let application = handlers
        .apply_handler
        .handle(
            ApplyToMissionCommand {
                mission_id: req.mission_id,
                user_id: req.user_id,
            },
            request_metadata(&headers),
        )
        .await?;
    Ok(created(MissionApplicationResponse::from(&application)))
}
