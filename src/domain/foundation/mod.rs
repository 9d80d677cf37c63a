//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the mission domain.

mod approval_status;
mod command;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use approval_status::ApprovalStatus;
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{MissionApplicationId, MissionId, SkillId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
