//! User skill handlers - maintain the `(user, skill)` association and seed
//! the user/skill directory.

mod add_user_skill;
mod list_user_skills;
mod remove_user_skill;
mod seed_directory;

pub use add_user_skill::{AddUserSkillCommand, AddUserSkillHandler};
pub use list_user_skills::{ListUserSkillsHandler, ListUserSkillsQuery};
pub use remove_user_skill::{RemoveUserSkillCommand, RemoveUserSkillHandler};
pub use seed_directory::{SeedDirectoryHandler, SeededDirectory};
