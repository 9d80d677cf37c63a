//! ListUserSkillsHandler - Query handler for the skills of one user.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{Skill, UserSkillError};
use crate::ports::UserRepository;

#[derive(Debug, Clone, Copy)]
pub struct ListUserSkillsQuery {
    pub user_id: i64,
}

pub struct ListUserSkillsHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUserSkillsHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Skills ordered by id. An unknown user is `UserNotFound`, not an
    /// empty list.
    pub async fn handle(&self, query: ListUserSkillsQuery) -> Result<Vec<Skill>, UserSkillError> {
        let user_id = UserId::new(query.user_id)?;

        if self.repository.find_user(user_id).await?.is_none() {
            return Err(UserSkillError::UserNotFound(user_id));
        }

        Ok(self.repository.list_user_skills(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::user::{NewUser, UserSkill};

    #[tokio::test]
    async fn lists_skills_by_id() {
        let store = Arc::new(InMemoryEntityStore::new());
        let user = store
            .create_user(&NewUser::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        let first = store.create_skill("Carpentry").await.unwrap();
        let second = store.create_skill("Teaching").await.unwrap();
        for skill in [&second, &first] {
            store
                .add_user_skill(UserSkill::new(user.id, skill.id))
                .await
                .unwrap();
        }

        let skills = ListUserSkillsHandler::new(store)
            .handle(ListUserSkillsQuery {
                user_id: user.id.value(),
            })
            .await
            .unwrap();

        assert_eq!(skills, vec![first, second]);
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = ListUserSkillsHandler::new(Arc::new(InMemoryEntityStore::new()));
        let err = handler
            .handle(ListUserSkillsQuery { user_id: 8 })
            .await
            .unwrap_err();
        assert_eq!(err, UserSkillError::UserNotFound(UserId::from_raw(8)));
    }
}
