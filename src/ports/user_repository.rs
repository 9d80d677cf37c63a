//! User repository port.
//!
//! Covers users, skills and the `(user, skill)` association table.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::{NewUser, Skill, User, UserSkill};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Register a user and return it with its generated id.
    async fn create_user(&self, user: &NewUser) -> Result<User, DomainError>;

    /// Find a user by ID. Returns `None` if not found.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Register a skill and return it with its generated id.
    async fn create_skill(&self, name: &str) -> Result<Skill, DomainError>;

    /// Associate a skill with a user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` / `SkillNotFound` for dangling references
    /// - `DuplicateUserSkill` if the pair already exists
    async fn add_user_skill(&self, link: UserSkill) -> Result<(), DomainError>;

    /// Remove an association.
    ///
    /// # Errors
    ///
    /// - `UserSkillNotFound` if the pair doesn't exist
    async fn remove_user_skill(&self, link: UserSkill) -> Result<(), DomainError>;

    /// Skills of a user, ordered by skill id.
    async fn list_user_skills(&self, user_id: UserId) -> Result<Vec<Skill>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
