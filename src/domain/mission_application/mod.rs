//! Mission application domain module.
//!
//! Owns the approval state machine: `Pending -> Approved`, one-directional.
//! Deletion is an independent administrative action from either state.

mod aggregate;
mod errors;

pub use aggregate::{ApprovalOutcome, MissionApplication, NewMissionApplication};
pub use errors::ApplicationError;
