//! ApproveApplicationHandler - Command handler for the approval transition.
//!
//! `Pending -> Approved`, idempotent: approving an approved application
//! succeeds without writing.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::foundation::{CommandMetadata, MissionApplicationId};
use crate::domain::mission_application::{ApplicationError, ApprovalOutcome, MissionApplication};
use crate::ports::MissionApplicationRepository;

/// Command to approve an application, carrying the id as received.
#[derive(Debug, Clone, Copy)]
pub struct ApproveApplicationCommand {
    pub application_id: i64,
}

/// Result of a successful approval.
#[derive(Debug, Clone)]
pub struct ApproveApplicationResult {
    pub application: MissionApplication,
    pub outcome: ApprovalOutcome,
}

/// Handler for approving applications.
pub struct ApproveApplicationHandler {
    repository: Arc<dyn MissionApplicationRepository>,
}

impl ApproveApplicationHandler {
    pub fn new(repository: Arc<dyn MissionApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: ApproveApplicationCommand,
        metadata: CommandMetadata,
    ) -> Result<ApproveApplicationResult, ApplicationError> {
        // 1. Reject non-positive ids before any store access
        let id = MissionApplicationId::new(cmd.application_id)?;

        // 2. Load application
        let mut application = match self.repository.find_by_id(id).await? {
            Some(application) => application,
            None => {
                debug!(application_id = %id, "Approve target not found");
                return Err(ApplicationError::not_found(id));
            }
        };

        // 3. Transition
        let outcome = application.approve();

        // 4. Persist only a real change
        if outcome.changed() {
            self.repository.update_status(&application).await?;
            info!(
                application_id = %id,
                mission_id = %application.mission_id(),
                correlation_id = metadata.correlation_id(),
                "Mission application approved"
            );
        } else {
            debug!(
                application_id = %id,
                correlation_id = metadata.correlation_id(),
                "Mission application already approved"
            );
        }

        Ok(ApproveApplicationResult {
            application,
            outcome,
        })
    }
}
