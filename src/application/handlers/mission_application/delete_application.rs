//! DeleteApplicationHandler - Command handler for removing applications.
//!
//! Deletion works from any approval state and is irreversible. A second
//! delete of the same id reports `NotFound`.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{CommandMetadata, MissionApplicationId};
use crate::domain::mission_application::ApplicationError;
use crate::ports::MissionApplicationRepository;

/// Command to delete an application.
#[derive(Debug, Clone, Copy)]
pub struct DeleteApplicationCommand {
    pub application_id: i64,
}

/// Handler for deleting applications.
pub struct DeleteApplicationHandler {
    repository: Arc<dyn MissionApplicationRepository>,
}

impl DeleteApplicationHandler {
    pub fn new(repository: Arc<dyn MissionApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteApplicationCommand,
        metadata: CommandMetadata,
    ) -> Result<MissionApplicationId, ApplicationError> {
        // No stored row can carry a non-positive id
        let id = MissionApplicationId::new(cmd.application_id).map_err(|_| {
            ApplicationError::not_found(MissionApplicationId::from_raw(cmd.application_id))
        })?;

        match self.repository.delete(id).await {
            Ok(()) => {
                info!(
                    application_id = %id,
                    correlation_id = metadata.correlation_id(),
                    "Mission application deleted"
                );
                Ok(id)
            }
            Err(err) => {
                let err = ApplicationError::from(err);
                if err.is_not_found() {
                    debug!(application_id = %id, "Delete target already gone");
                }
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::mission::MissionDetails;
    use crate::domain::mission_application::NewMissionApplication;
    use crate::domain::user::NewUser;
    use crate::ports::{MissionApplicationReader, MissionRepository, UserRepository};

    async fn store_with_application() -> (Arc<InMemoryEntityStore>, MissionApplicationId) {
        let store = Arc::new(InMemoryEntityStore::new());
        let mission = store
            .insert(&MissionDetails::new("Clean Beach", "Environment"))
            .await
            .unwrap();
        let user = store
            .create_user(&NewUser::new("Alan", "Turing", "alan@example.com"))
            .await
            .unwrap();
        let app = store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();
        (store, app.id())
    }

    #[tokio::test]
    async fn deleted_application_disappears_from_listing() {
        let (store, id) = store_with_application().await;
        let handler = DeleteApplicationHandler::new(store.clone());

        handler
            .handle(
                DeleteApplicationCommand {
                    application_id: id.value(),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert!(store.list_views().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn second_delete_is_not_found() {
        let (store, id) = store_with_application().await;
        let handler = DeleteApplicationHandler::new(store);
        let cmd = DeleteApplicationCommand {
            application_id: id.value(),
        };

        handler.handle(cmd, CommandMetadata::new()).await.unwrap();
        let err = handler.handle(cmd, CommandMetadata::new()).await.unwrap_err();

        assert_eq!(err, ApplicationError::NotFound(id));
    }

    #[tokio::test]
    async fn approved_application_can_be_deleted() {
        let (store, id) = store_with_application().await;
        let mut app = MissionApplicationRepository::find_by_id(&*store, id)
            .await
            .unwrap()
            .unwrap();
        app.approve();
        store.update_status(&app).await.unwrap();

        let handler = DeleteApplicationHandler::new(store.clone());
        handler
            .handle(
                DeleteApplicationCommand {
                    application_id: id.value(),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(store.application_count().await, 0);
    }

    #[tokio::test]
    async fn non_positive_id_is_not_found() {
        let (store, _) = store_with_application().await;
        let handler = DeleteApplicationHandler::new(store.clone());

        let err = handler
            .handle(
                DeleteApplicationCommand { application_id: -1 },
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.application_count().await, 1);
    }
}
