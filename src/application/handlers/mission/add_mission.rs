//! AddMissionHandler - Command handler for creating missions.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::CommandMetadata;
use crate::domain::mission::{Mission, MissionDetails, MissionError};
use crate::ports::MissionRepository;

/// Command to create a mission.
#[derive(Debug, Clone)]
pub struct AddMissionCommand {
    pub details: MissionDetails,
}

/// Handler for creating missions.
pub struct AddMissionHandler {
    repository: Arc<dyn MissionRepository>,
}

impl AddMissionHandler {
    pub fn new(repository: Arc<dyn MissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: AddMissionCommand,
        metadata: CommandMetadata,
    ) -> Result<Mission, MissionError> {
        // 1. Validate before touching the store
        cmd.details.validate()?;

        // 2. Persist (store assigns the id)
        let mission = self.repository.insert(&cmd.details).await?;

        info!(
            mission_id = %mission.id(),
            correlation_id = metadata.correlation_id(),
            "Mission added"
        );

        Ok(mission)
    }
}
