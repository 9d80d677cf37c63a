//! ListApplicationsHandler - Query handler for enriched application views.

use std::sync::Arc;

use crate::domain::mission_application::ApplicationError;
use crate::ports::{MissionApplicationReader, MissionApplicationView};

pub struct ListApplicationsHandler {
    reader: Arc<dyn MissionApplicationReader>,
}

impl ListApplicationsHandler {
    pub fn new(reader: Arc<dyn MissionApplicationReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> Result<Vec<MissionApplicationView>, ApplicationError> {
        Ok(self.reader.list_views().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::foundation::ApprovalStatus;
    use crate::domain::mission::MissionDetails;
    use crate::domain::mission_application::NewMissionApplication;
    use crate::domain::user::NewUser;
    use crate::ports::{MissionApplicationRepository, MissionRepository, UserRepository};

    #[tokio::test]
    async fn views_carry_mission_and_applicant_display_fields() {
        let store = Arc::new(InMemoryEntityStore::new());
        let mission = store
            .insert(&MissionDetails::new("Clean Beach", "Environment"))
            .await
            .unwrap();
        let user = store
            .create_user(&NewUser::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();

        let views = ListApplicationsHandler::new(store).handle().await.unwrap();

        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.mission_title.as_deref(), Some("Clean Beach"));
        assert_eq!(view.mission_theme.as_deref(), Some("Environment"));
        assert_eq!(view.user_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(view.approval_status, ApprovalStatus::Pending);
    }

    #[tokio::test]
    async fn store_outage_is_reported() {
        let store = Arc::new(InMemoryEntityStore::new());
        store.set_available(false);

        let err = ListApplicationsHandler::new(store)
            .handle()
            .await
            .unwrap_err();

        assert!(matches!(err, ApplicationError::StoreUnavailable(_)));
    }
}
