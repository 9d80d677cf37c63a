//! HTTP handlers for mission endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::HeaderMap,
    response::Response,
    Json,
};

use crate::adapters::http::correlation::request_metadata;
use crate::adapters::http::envelope::{created, ok, ApiError};
use crate::application::handlers::mission::{
    AddMissionCommand, AddMissionHandler, DeleteMissionCommand, DeleteMissionHandler,
    GetMissionHandler, GetMissionQuery, ListMissionsHandler, UpdateMissionCommand,
    UpdateMissionHandler,
};
use crate::domain::mission::MissionDeletePolicy;
use crate::ports::EntityStore;

use super::dto::{MissionRequest, MissionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct MissionHandlers {
    add_handler: Arc<AddMissionHandler>,
    list_handler: Arc<ListMissionsHandler>,
    get_handler: Arc<GetMissionHandler>,
    update_handler: Arc<UpdateMissionHandler>,
    delete_handler: Arc<DeleteMissionHandler>,
}

impl MissionHandlers {
    pub fn new(store: &EntityStore, delete_policy: MissionDeletePolicy) -> Self {
        Self {
            add_handler: Arc::new(AddMissionHandler::new(store.missions.clone())),
            list_handler: Arc::new(ListMissionsHandler::new(store.missions.clone())),
            get_handler: Arc::new(GetMissionHandler::new(store.missions.clone())),
            update_handler: Arc::new(UpdateMissionHandler::new(store.missions.clone())),
            delete_handler: Arc::new(DeleteMissionHandler::new(
                store.missions.clone(),
                delete_policy,
            )),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/Mission/AddMission - Create a mission
pub async fn add_mission(
    State(handlers): State<MissionHandlers>,
    headers: HeaderMap,
    payload: Result<Json<MissionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let cmd = AddMissionCommand {
        details: req.into(),
    };

    let mission = handlers
        .add_handler
        .handle(cmd, request_metadata(&headers))
        .await?;

    Ok(created(MissionResponse::from(&mission)))
}

/// GET /api/Mission/MissionList - All missions in insertion order
pub async fn mission_list(State(handlers): State<MissionHandlers>) -> Result<Response, ApiError> {
    let missions = handlers.list_handler.handle().await?;
    let response: Vec<MissionResponse> = missions.iter().map(MissionResponse::from).collect();
    Ok(ok(response))
}

/// GET /api/Mission/MissionDetailById/:id - One mission
pub async fn mission_detail_by_id(
    State(handlers): State<MissionHandlers>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(mission_id) = id?;
    let mission = handlers
        .get_handler
        .handle(GetMissionQuery { mission_id })
        .await?;
    Ok(ok(MissionResponse::from(&mission)))
}

/// POST /api/Mission/UpdateMission - Overwrite a mission's fields
pub async fn update_mission(
    State(handlers): State<MissionHandlers>,
    headers: HeaderMap,
    payload: Result<Json<MissionRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let mission_id = req
        .id
        .ok_or_else(|| ApiError::BadRequest("Mission id is required".to_string()))?;
    let cmd = UpdateMissionCommand {
        mission_id,
        details: req.into(),
    };

    let mission = handlers
        .update_handler
        .handle(cmd, request_metadata(&headers))
        .await?;

    Ok(ok(MissionResponse::from(&mission)))
}

/// DELETE /api/Mission/DeleteMission/:missionId - Remove a mission
pub async fn delete_mission(
    State(handlers): State<MissionHandlers>,
    headers: HeaderMap,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(mission_id) = id?;
    let deletion = handlers
        .delete_handler
        .handle(DeleteMissionCommand { mission_id }, request_metadata(&headers))
        .await?;

    let confirmation = if deletion.applications_removed > 0 {
        format!(
            "Mission deleted successfully along with {} application(s)",
            deletion.applications_removed
        )
    } else {
        "Mission deleted successfully".to_string()
    };
    Ok(ok(confirmation))
}
