//! Application Workflow Service - handlers for the application lifecycle.
//!
//! Listing, applying, approving and deleting. The handlers hold no state of
//! their own between calls; the Entity Store is the only shared resource.

mod apply_to_mission;
mod approve_application;
mod delete_application;
mod list_applications;

pub use apply_to_mission::{ApplyToMissionCommand, ApplyToMissionHandler};
pub use approve_application::{
    ApproveApplicationCommand, ApproveApplicationHandler, ApproveApplicationResult,
};
pub use delete_application::{DeleteApplicationCommand, DeleteApplicationHandler};
pub use list_applications::ListApplicationsHandler;
