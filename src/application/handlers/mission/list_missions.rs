//! ListMissionsHandler - Query handler for all missions.

use std::sync::Arc;

use crate::domain::mission::{Mission, MissionError};
use crate::ports::MissionRepository;

/// Handler returning every mission in insertion order.
pub struct ListMissionsHandler {
    repository: Arc<dyn MissionRepository>,
}

impl ListMissionsHandler {
    pub fn new(repository: Arc<dyn MissionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Mission>, MissionError> {
        Ok(self.repository.list_all().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryEntityStore;
    use crate::domain::mission::MissionDetails;

    #[tokio::test]
    async fn lists_in_insertion_order() {
        let store = Arc::new(InMemoryEntityStore::new());
        for title in ["Clean Beach", "Plant Trees", "Food Bank"] {
            store
                .insert(&MissionDetails::new(title, "Community"))
                .await
                .unwrap();
        }

        let missions = ListMissionsHandler::new(store).handle().await.unwrap();
        let titles: Vec<_> = missions.iter().map(|m| m.title()).collect();

        assert_eq!(titles, vec!["Clean Beach", "Plant Trees", "Food Bank"]);
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let handler = ListMissionsHandler::new(Arc::new(InMemoryEntityStore::new()));
        assert!(handler.handle().await.unwrap().is_empty());
    }
}
