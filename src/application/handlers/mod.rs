//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod mission;
pub mod mission_application;
pub mod user_skill;

pub use mission::{
    AddMissionCommand, AddMissionHandler, DeleteMissionCommand, DeleteMissionHandler,
    GetMissionHandler, GetMissionQuery, ListMissionsHandler, UpdateMissionCommand,
    UpdateMissionHandler,
};
pub use mission_application::{
    ApplyToMissionCommand, ApplyToMissionHandler, ApproveApplicationCommand,
    ApproveApplicationHandler, ApproveApplicationResult, DeleteApplicationCommand,
    DeleteApplicationHandler, ListApplicationsHandler,
};
pub use user_skill::{
    AddUserSkillCommand, AddUserSkillHandler, ListUserSkillsHandler, ListUserSkillsQuery,
    RemoveUserSkillCommand, RemoveUserSkillHandler, SeedDirectoryHandler, SeededDirectory,
};
