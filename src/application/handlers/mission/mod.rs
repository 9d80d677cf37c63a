//! Mission Service - CRUD command and query handlers for missions.

mod add_mission;
mod delete_mission;
mod get_mission;
mod list_missions;
mod update_mission;

pub use add_mission::{AddMissionCommand, AddMissionHandler};
pub use delete_mission::{DeleteMissionCommand, DeleteMissionHandler};
pub use get_mission::{GetMissionHandler, GetMissionQuery};
pub use list_missions::ListMissionsHandler;
pub use update_mission::{UpdateMissionCommand, UpdateMissionHandler};
