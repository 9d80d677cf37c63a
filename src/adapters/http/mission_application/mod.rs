//! HTTP adapter for the mission application workflow.

mod dto;
mod handlers;
mod routes;

pub use dto::{ApplyMissionRequest, MissionApplicationResponse, MissionApplicationViewResponse};
pub use handlers::MissionApplicationHandlers;
pub use routes::mission_application_routes;
