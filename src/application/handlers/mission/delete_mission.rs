//! DeleteMissionHandler - Command handler for removing missions.
//!
//! What happens to applications that still reference the mission is decided
//! by the configured [`MissionDeletePolicy`].

use std::sync::Arc;

use tracing::info;

use super::get_mission::existing_mission_id;
use crate::domain::foundation::CommandMetadata;
use crate::domain::mission::{MissionDeletePolicy, MissionError};
use crate::ports::{MissionDeletion, MissionRepository};

/// Command to delete a mission.
#[derive(Debug, Clone, Copy)]
pub struct DeleteMissionCommand {
    pub mission_id: i64,
}

/// Handler for mission deletion.
pub struct DeleteMissionHandler {
    repository: Arc<dyn MissionRepository>,
    policy: MissionDeletePolicy,
}

impl DeleteMissionHandler {
    pub fn new(repository: Arc<dyn MissionRepository>, policy: MissionDeletePolicy) -> Self {
        Self { repository, policy }
    }

    pub fn policy(&self) -> MissionDeletePolicy {
        self.policy
    }

    pub async fn handle(
        &self,
        cmd: DeleteMissionCommand,
        metadata: CommandMetadata,
    ) -> Result<MissionDeletion, MissionError> {
        let id = existing_mission_id(cmd.mission_id)?;
        let deletion = self.repository.delete(id, self.policy).await?;

        info!(
            mission_id = %id,
            policy = %self.policy,
            applications_removed = deletion.applications_removed,
            correlation_id = metadata.correlation_id(),
            "Mission deleted"
        );

        Ok(deletion)
    }
}
