//! HTTP routes for the mission application workflow.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    apply_mission, mission_application_approve, mission_application_delete,
    mission_application_list, MissionApplicationHandlers,
};

/// Creates the application router. It shares the `/api/Mission` prefix with
/// the mission routes.
pub fn mission_application_routes(handlers: MissionApplicationHandlers) -> Router {
    Router::new()
        .route("/MissionApplicationList", get(mission_application_list))
        .route("/MissionApplicationApprove", post(mission_application_approve))
        .route("/MissionApplicationDelete/:id", delete(mission_application_delete))
        .route("/ApplyMission", post(apply_mission))
        .with_state(handlers)
}
