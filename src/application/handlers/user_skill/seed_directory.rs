//! SeedDirectoryHandler - Registers a batch of users and skills.
//!
//! Used at startup to give the in-memory store someone to apply and
//! something to declare. Ids follow the order of the seed document.

use std::sync::Arc;

use tracing::info;

use crate::domain::user::{DirectorySeed, Skill, User, UserSkillError};
use crate::ports::UserRepository;

/// What a seed run created.
#[derive(Debug, Clone, Default)]
pub struct SeededDirectory {
    pub users: Vec<User>,
    pub skills: Vec<Skill>,
}

pub struct SeedDirectoryHandler {
    repository: Arc<dyn UserRepository>,
}

impl SeedDirectoryHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Stops at the first invalid entry; entries before it stay registered.
    pub async fn handle(&self, seed: &DirectorySeed) -> Result<SeededDirectory, UserSkillError> {
        let mut seeded = SeededDirectory::default();

        for user in &seed.users {
            seeded.users.push(self.repository.create_user(user).await?);
        }
        for name in &seed.skills {
            seeded.skills.push(self.repository.create_skill(name).await?);
        }

        info!(
            users = seeded.users.len(),
            skills = seeded.skills.len(),
            "Directory seeded"
        );

        Ok(seeded)
    }
}
