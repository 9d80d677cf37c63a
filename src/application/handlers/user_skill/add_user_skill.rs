//! AddUserSkillHandler - Command handler for linking a skill to a user.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, SkillId, UserId};
use crate::domain::user::{UserSkill, UserSkillError};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct AddUserSkillCommand {
    pub user_id: i64,
    pub skill_id: i64,
}

pub struct AddUserSkillHandler {
    repository: Arc<dyn UserRepository>,
}

impl AddUserSkillHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddUserSkillCommand,
        metadata: CommandMetadata,
    ) -> Result<UserSkill, UserSkillError> {
        let link = UserSkill::new(UserId::new(cmd.user_id)?, SkillId::new(cmd.skill_id)?);

        self.repository.add_user_skill(link).await?;

        info!(
            user_id = %link.user_id,
            skill_id = %link.skill_id,
            correlation_id = metadata.correlation_id(),
            "User skill added"
        );

        Ok(link)
    }
}
