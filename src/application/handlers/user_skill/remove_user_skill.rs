//! RemoveUserSkillHandler - Command handler for unlinking a skill.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, SkillId, UserId};
use crate::domain::user::{UserSkill, UserSkillError};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct RemoveUserSkillCommand {
    pub user_id: i64,
    pub skill_id: i64,
}

pub struct RemoveUserSkillHandler {
    repository: Arc<dyn UserRepository>,
}

impl RemoveUserSkillHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveUserSkillCommand,
        metadata: CommandMetadata,
    ) -> Result<UserSkill, UserSkillError> {
        let link = UserSkill::new(UserId::new(cmd.user_id)?, SkillId::new(cmd.skill_id)?);

        self.repository.remove_user_skill(link).await?;

        info!(
            user_id = %link.user_id,
            skill_id = %link.skill_id,
            correlation_id = metadata.correlation_id(),
            "User skill removed"
        );

        Ok(link)
    }
}
