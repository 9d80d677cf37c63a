//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, statuses, errors)
//! - `mission` - Mission aggregate and its delete policy
//! - `mission_application` - Applications and the approval state machine
//! - `user` - Users, skills and the user/skill association

pub mod foundation;
pub mod mission;
pub mod mission_application;
pub mod user;
