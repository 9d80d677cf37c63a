//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Mission handlers
    AddMissionCommand, AddMissionHandler, DeleteMissionCommand, DeleteMissionHandler,
    GetMissionHandler, GetMissionQuery, ListMissionsHandler, UpdateMissionCommand,
    UpdateMissionHandler,
    // Application workflow handlers
    ApplyToMissionCommand, ApplyToMissionHandler, ApproveApplicationCommand,
    ApproveApplicationHandler, ApproveApplicationResult, DeleteApplicationCommand,
    DeleteApplicationHandler, ListApplicationsHandler,
    // User skill handlers
    AddUserSkillCommand, AddUserSkillHandler, ListUserSkillsHandler, ListUserSkillsQuery,
    RemoveUserSkillCommand, RemoveUserSkillHandler, SeedDirectoryHandler, SeededDirectory,
};
