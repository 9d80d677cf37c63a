//! Mission application repository port (write side).
//!
//! Implementations must serialize conflicting writes on the same id: an
//! update or delete that finds the row already gone reports
//! `ApplicationNotFound` and never recreates it.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, MissionApplicationId};
use crate::domain::mission_application::{MissionApplication, NewMissionApplication};

#[async_trait]
pub trait MissionApplicationRepository: Send + Sync {
    /// Store a new `Pending` application.
    ///
    /// # Errors
    ///
    /// - `MissionNotFound` / `UserNotFound` if a reference is dangling
    /// - `DuplicateApplication` if the user already applied to the mission
    async fn create(
        &self,
        application: &NewMissionApplication,
    ) -> Result<MissionApplication, DomainError>;

    /// Find an application by its ID.
    async fn find_by_id(
        &self,
        id: MissionApplicationId,
    ) -> Result<Option<MissionApplication>, DomainError>;

    /// Persist the approval status of an existing application.
    ///
    /// Only `approval_status` is written; `applied_date` is immutable.
    ///
    /// # Errors
    ///
    /// - `ApplicationNotFound` if the row no longer exists
    async fn update_status(&self, application: &MissionApplication) -> Result<(), DomainError>;

    /// Permanently remove an application in any state.
    ///
    /// # Errors
    ///
    /// - `ApplicationNotFound` if the application doesn't exist
    async fn delete(&self, id: MissionApplicationId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mission_application_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn MissionApplicationRepository) {}
    }
}
