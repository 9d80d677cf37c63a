//! User module - applicants and their skills.
//!
//! Users and skills are created outside the mission workflow. This crate
//! reads them, maintains the `(user, skill)` association (whose pair
//! identity the store keeps unique) and can seed a fresh store from a
//! [`DirectorySeed`].

mod entities;
mod errors;

pub use entities::{DirectorySeed, NewUser, Skill, User, UserSkill, MAX_NAME_LENGTH};
pub use errors::UserSkillError;
