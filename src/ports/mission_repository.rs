//! Mission repository port.
//!
//! Defines the contract for persisting and retrieving Mission aggregates.
//! Ids are generated by the store on insert.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MissionId};
use crate::domain::mission::{Mission, MissionDeletePolicy, MissionDetails};

/// Outcome of a successful mission deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionDeletion {
    pub mission_id: MissionId,
    /// Applications removed alongside the mission (non-zero only under cascade).
    pub applications_removed: u64,
}

/// Repository port for Mission aggregate persistence.
#[async_trait]
pub trait MissionRepository: Send + Sync {
    /// Insert a new mission and return it with its generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` / `StoreUnavailable` on persistence failure
    async fn insert(&self, details: &MissionDetails) -> Result<Mission, DomainError>;

    /// Overwrite the mutable fields of an existing mission.
    ///
    /// # Errors
    ///
    /// - `MissionNotFound` if the mission doesn't exist
    async fn update(&self, mission: &Mission) -> Result<(), DomainError>;

    /// Find a mission by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: MissionId) -> Result<Option<Mission>, DomainError>;

    /// All missions, ordered by id ascending (insertion order).
    async fn list_all(&self) -> Result<Vec<Mission>, DomainError>;

    /// Delete a mission, applying `policy` to its applications atomically.
    ///
    /// # Errors
    ///
    /// - `MissionNotFound` if the mission doesn't exist
    /// - `MissionHasApplications` under [`MissionDeletePolicy::Forbid`] when
    ///   applications still reference the mission
    async fn delete(
        &self,
        id: MissionId,
        policy: MissionDeletePolicy,
    ) -> Result<MissionDeletion, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MissionRepository) {}
    }
}
