//! GetMissionHandler - Query handler for a single mission.

use std::sync::Arc;

use crate::domain::foundation::MissionId;
use crate::domain::mission::{Mission, MissionError};
use crate::ports::MissionRepository;

/// Query to load one mission by its raw id.
#[derive(Debug, Clone, Copy)]
pub struct GetMissionQuery {
    pub mission_id: i64,
}

/// Handler for mission lookups.
pub struct GetMissionHandler {
    repository: Arc<dyn MissionRepository>,
}

impl GetMissionHandler {
    pub fn new(repository: Arc<dyn MissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetMissionQuery) -> Result<Mission, MissionError> {
        let id = existing_mission_id(query.mission_id)?;
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| MissionError::not_found(id))
    }
}

/// A non-positive id can never name a stored mission, so it is reported as
/// not found without a store round trip.
pub(crate) fn existing_mission_id(raw: i64) -> Result<MissionId, MissionError> {
    MissionId::new(raw).map_err(|_| MissionError::not_found(MissionId::from_raw(raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::mission::MissionDetails;

    #[tokio::test]
    async fn round_trips_supplied_fields() {
        let store = Arc::new(InMemoryEntityStore::new());
        let mut details = MissionDetails::new("Clean Beach", "Environment");
        details.city = Some("Porto".to_string());
        details.total_seats = Some(12);
        let created = store.insert(&details).await.unwrap();

        let handler = GetMissionHandler::new(store);
        let loaded = handler
            .handle(GetMissionQuery {
                mission_id: created.id().value(),
            })
            .await
            .unwrap();

        assert_eq!(loaded.details(), &details);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let handler = GetMissionHandler::new(Arc::new(InMemoryEntityStore::new()));
        let err = handler
            .handle(GetMissionQuery { mission_id: 99 })
            .await
            .unwrap_err();
        assert_eq!(err, MissionError::NotFound(MissionId::from_raw(99)));
    }

    #[tokio::test]
    async fn non_positive_id_is_not_found() {
        let handler = GetMissionHandler::new(Arc::new(InMemoryEntityStore::new()));
        let err = handler
            .handle(GetMissionQuery { mission_id: 0 })
            .await
            .unwrap_err();
        assert!(matches!(err, MissionError::NotFound(_)));
    }
}
