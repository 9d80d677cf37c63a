//! UpdateMissionHandler - Command handler for overwriting mission fields.

use std::sync::Arc;

use tracing::info;

use super::get_mission::existing_mission_id;
use crate::domain::foundation::CommandMetadata;
use crate::domain::mission::{Mission, MissionDetails, MissionError};
use crate::ports::MissionRepository;

/// Command to overwrite the mutable fields of a mission.
#[derive(Debug, Clone)]
pub struct UpdateMissionCommand {
    pub mission_id: i64,
    pub details: MissionDetails,
}

/// Handler for mission updates.
pub struct UpdateMissionHandler {
    repository: Arc<dyn MissionRepository>,
}

impl UpdateMissionHandler {
    pub fn new(repository: Arc<dyn MissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateMissionCommand,
        metadata: CommandMetadata,
    ) -> Result<Mission, MissionError> {
        let id = existing_mission_id(cmd.mission_id)?;

        // 1. Load mission
        let mut mission = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MissionError::not_found(id))?;

        // 2. Apply and validate
        mission.update(cmd.details)?;

        // 3. Persist
        self.repository.update(&mission).await?;

        info!(
            mission_id = %id,
            correlation_id = metadata.correlation_id(),
            "Mission updated"
        );

        Ok(mission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::MissionId;

    #[tokio::test]
    async fn overwrites_fields_of_existing_mission() {
        let store = Arc::new(InMemoryEntityStore::new());
        let created = store
            .insert(&MissionDetails::new("Clean Beach", "Environment"))
            .await
            .unwrap();

        let handler = UpdateMissionHandler::new(store.clone());
        let updated = handler
            .handle(
                UpdateMissionCommand {
                    mission_id: created.id().value(),
                    details: MissionDetails::new("Clean River", "Environment"),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap();

        assert_eq!(updated.title(), "Clean River");
        let stored = store.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Clean River");
    }

    #[tokio::test]
    async fn unknown_mission_is_not_found() {
        let handler = UpdateMissionHandler::new(Arc::new(InMemoryEntityStore::new()));
        let err = handler
            .handle(
                UpdateMissionCommand {
                    mission_id: 5,
                    details: MissionDetails::new("Clean River", "Environment"),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, MissionError::NotFound(MissionId::from_raw(5)));
    }

    #[tokio::test]
    async fn invalid_details_leave_stored_mission_untouched() {
        let store = Arc::new(InMemoryEntityStore::new());
        let created = store
            .insert(&MissionDetails::new("Clean Beach", "Environment"))
            .await
            .unwrap();

        let handler = UpdateMissionHandler::new(store.clone());
        let err = handler
            .handle(
                UpdateMissionCommand {
                    mission_id: created.id().value(),
                    details: MissionDetails::new("Clean Beach", ""),
                },
                CommandMetadata::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, MissionError::ValidationFailed { .. }));
        let stored = store.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored.theme(), "Environment");
    }
}
