//! HTTP adapter for mission endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{MissionRequest, MissionResponse};
pub use handlers::MissionHandlers;
pub use routes::mission_routes;
