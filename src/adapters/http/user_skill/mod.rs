//! HTTP adapter for the user skill association.

mod handlers;
mod routes;

pub use handlers::{SkillResponse, UserSkillHandlers, UserSkillRequest, UserSkillResponse};
pub use routes::user_skill_routes;
