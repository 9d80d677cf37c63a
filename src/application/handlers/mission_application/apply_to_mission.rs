//! ApplyToMissionHandler - Command handler for creating applications.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{CommandMetadata, MissionId, UserId};
use crate::domain::mission_application::{
    ApplicationError, MissionApplication, NewMissionApplication,
};
use crate::ports::MissionApplicationRepository;

/// Command for a user applying to a mission.
#[derive(Debug, Clone, Copy)]
pub struct ApplyToMissionCommand {
    pub mission_id: i64,
    pub user_id: i64,
}

/// Handler creating `Pending` applications.
///
/// The store checks that both references exist at creation time and that
/// the user has not already applied.
pub struct ApplyToMissionHandler {
    repository: Arc<dyn MissionApplicationRepository>,
}

impl ApplyToMissionHandler {
    pub fn new(repository: Arc<dyn MissionApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ApplyToMissionCommand,
        metadata: CommandMetadata,
    ) -> Result<MissionApplication, ApplicationError> {
        let mission_id = MissionId::new(cmd.mission_id)?;
        let user_id = UserId::new(cmd.user_id)?;

        let application = self
            .repository
            .create(&NewMissionApplication::new(mission_id, user_id))
            .await?;

        info!(
            application_id = %application.id(),
            mission_id = %mission_id,
            user_id = %user_id,
            correlation_id = metadata.correlation_id(),
            "Mission application created"
        );

        Ok(application)
    }
}
