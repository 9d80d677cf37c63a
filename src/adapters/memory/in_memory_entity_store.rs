//! In-Memory Entity Store Adapter
//!
//! Implements every store port over a single set of tables guarded by one
//! lock, so multi-row operations (cascade delete, duplicate checks) are
//! atomic. Useful for testing and development.

use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, MissionApplicationId, MissionId, SkillId, UserId,
};
use crate::domain::mission::{Mission, MissionDeletePolicy, MissionDetails};
use crate::domain::mission_application::{MissionApplication, NewMissionApplication};
use crate::domain::user::{NewUser, Skill, User, UserSkill};
use crate::ports::{
    MissionApplicationReader, MissionApplicationRepository, MissionApplicationView,
    MissionDeletion, MissionRepository, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    missions: BTreeMap<i64, Mission>,
    applications: BTreeMap<i64, MissionApplication>,
    users: BTreeMap<i64, User>,
    skills: BTreeMap<i64, Skill>,
    user_skills: BTreeSet<UserSkill>,
    next_mission_id: i64,
    next_application_id: i64,
    next_user_id: i64,
    next_skill_id: i64,
}

fn next(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

impl Tables {
    fn view_of(&self, app: &MissionApplication) -> MissionApplicationView {
        let mission = self.missions.get(&app.mission_id().value());
        let user = self.users.get(&app.user_id().value());
        MissionApplicationView {
            id: app.id(),
            mission_id: app.mission_id(),
            user_id: app.user_id(),
            applied_date: *app.applied_date(),
            approval_status: app.approval_status(),
            mission_title: mission.map(|m| m.title().to_string()),
            mission_theme: mission.map(|m| m.theme().to_string()),
            user_name: user.map(User::full_name),
        }
    }
}

/// In-memory implementation of the Entity Store ports.
#[derive(Debug, Clone)]
pub struct InMemoryEntityStore {
    tables: Arc<RwLock<Tables>>,
    available: Arc<AtomicBool>,
}

impl InMemoryEntityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            available: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Simulate the backing store going away (or coming back).
    ///
    /// While unavailable every call fails with `StoreUnavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    /// Number of stored applications.
    pub async fn application_count(&self) -> usize {
        self.tables.read().await.applications.len()
    }

    /// Number of stored missions.
    pub async fn mission_count(&self) -> usize {
        self.tables.read().await.missions.len()
    }

    fn ensure_available(&self) -> Result<(), DomainError> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(DomainError::store_unavailable("in-memory store is offline"))
        }
    }
}

impl Default for InMemoryEntityStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MissionRepository for InMemoryEntityStore {
    async fn insert(&self, details: &MissionDetails) -> Result<Mission, DomainError> {
        self.ensure_available()?;
        details.validate()?;
        let mut tables = self.tables.write().await;
        let id = MissionId::from_raw(next(&mut tables.next_mission_id));
        let mission = Mission::create(id, details.clone())?;
        tables.missions.insert(id.value(), mission.clone());
        Ok(mission)
    }

    async fn update(&self, mission: &Mission) -> Result<(), DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        match tables.missions.get_mut(&mission.id().value()) {
            Some(stored) => {
                *stored = mission.clone();
                Ok(())
            }
            None => Err(DomainError::mission_not_found(mission.id())),
        }
    }

    async fn find_by_id(&self, id: MissionId) -> Result<Option<Mission>, DomainError> {
        self.ensure_available()?;
        Ok(self.tables.read().await.missions.get(&id.value()).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Mission>, DomainError> {
        self.ensure_available()?;
        Ok(self.tables.read().await.missions.values().cloned().collect())
    }

    async fn delete(
        &self,
        id: MissionId,
        policy: MissionDeletePolicy,
    ) -> Result<MissionDeletion, DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if !tables.missions.contains_key(&id.value()) {
            return Err(DomainError::mission_not_found(id));
        }

        let count = tables
            .applications
            .values()
            .filter(|a| a.mission_id() == id)
            .count() as u64;

        if count > 0 && policy == MissionDeletePolicy::Forbid {
            return Err(DomainError::new(
                ErrorCode::MissionHasApplications,
                format!("Mission {} still has {} application(s)", id, count),
            )
            .with_detail("mission_id", id.to_string())
            .with_detail("count", count.to_string()));
        }

        tables.applications.retain(|_, a| a.mission_id() != id);
        tables.missions.remove(&id.value());

        Ok(MissionDeletion {
            mission_id: id,
            applications_removed: count,
        })
    }
}

#[async_trait]
impl MissionApplicationRepository for InMemoryEntityStore {
    async fn create(
        &self,
        application: &NewMissionApplication,
    ) -> Result<MissionApplication, DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;

        if !tables.missions.contains_key(&application.mission_id.value()) {
            return Err(DomainError::mission_not_found(application.mission_id));
        }
        if !tables.users.contains_key(&application.user_id.value()) {
            return Err(DomainError::user_not_found(application.user_id));
        }
        let duplicate = tables.applications.values().any(|a| {
            a.mission_id() == application.mission_id && a.user_id() == application.user_id
        });
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::DuplicateApplication,
                "User has already applied to this mission",
            )
            .with_detail("mission_id", application.mission_id.to_string())
            .with_detail("user_id", application.user_id.to_string()));
        }

        let id = MissionApplicationId::from_raw(next(&mut tables.next_application_id));
        let stored = MissionApplication::from_new(id, application.clone());
        tables.applications.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_by_id(
        &self,
        id: MissionApplicationId,
    ) -> Result<Option<MissionApplication>, DomainError> {
        self.ensure_available()?;
        Ok(self.tables.read().await.applications.get(&id.value()).cloned())
    }

    async fn update_status(&self, application: &MissionApplication) -> Result<(), DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        let stored = tables
            .applications
            .get(&application.id().value())
            .cloned()
            .ok_or_else(|| DomainError::application_not_found(application.id()))?;

        let updated = MissionApplication::reconstitute(
            stored.id(),
            stored.mission_id(),
            stored.user_id(),
            *stored.applied_date(),
            application.approval_status(),
        );
        tables.applications.insert(application.id().value(), updated);
        Ok(())
    }

    async fn delete(&self, id: MissionApplicationId) -> Result<(), DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        tables
            .applications
            .remove(&id.value())
            .map(|_| ())
            .ok_or_else(|| DomainError::application_not_found(id))
    }
}

#[async_trait]
impl MissionApplicationReader for InMemoryEntityStore {
    async fn list_views(&self) -> Result<Vec<MissionApplicationView>, DomainError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .applications
            .values()
            .map(|app| tables.view_of(app))
            .collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryEntityStore {
    async fn create_user(&self, user: &NewUser) -> Result<User, DomainError> {
        self.ensure_available()?;
        user.validate()?;
        let mut tables = self.tables.write().await;
        let id = UserId::from_raw(next(&mut tables.next_user_id));
        let stored = User::from_new(id, user.clone());
        tables.users.insert(id.value(), stored.clone());
        Ok(stored)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
        self.ensure_available()?;
        Ok(self.tables.read().await.users.get(&id.value()).cloned())
    }

    async fn create_skill(&self, name: &str) -> Result<Skill, DomainError> {
        self.ensure_available()?;
        Skill::validate_name(name)?;
        let mut tables = self.tables.write().await;
        let id = SkillId::from_raw(next(&mut tables.next_skill_id));
        let skill = Skill {
            id,
            name: name.trim().to_string(),
        };
        tables.skills.insert(id.value(), skill.clone());
        Ok(skill)
    }

    async fn add_user_skill(&self, link: UserSkill) -> Result<(), DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&link.user_id.value()) {
            return Err(DomainError::user_not_found(link.user_id));
        }
        if !tables.skills.contains_key(&link.skill_id.value()) {
            return Err(DomainError::skill_not_found(link.skill_id));
        }
        if !tables.user_skills.insert(link) {
            return Err(DomainError::new(
                ErrorCode::DuplicateUserSkill,
                format!("User {} already has skill {}", link.user_id, link.skill_id),
            )
            .with_detail("user_id", link.user_id.to_string())
            .with_detail("skill_id", link.skill_id.to_string()));
        }
        Ok(())
    }

    async fn remove_user_skill(&self, link: UserSkill) -> Result<(), DomainError> {
        self.ensure_available()?;
        let mut tables = self.tables.write().await;
        if tables.user_skills.remove(&link) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::UserSkillNotFound,
                format!("User {} does not have skill {}", link.user_id, link.skill_id),
            )
            .with_detail("user_id", link.user_id.to_string())
            .with_detail("skill_id", link.skill_id.to_string()))
        }
    }

    async fn list_user_skills(&self, user_id: UserId) -> Result<Vec<Skill>, DomainError> {
        self.ensure_available()?;
        let tables = self.tables.read().await;
        Ok(tables
            .user_skills
            .iter()
            .filter(|link| link.user_id == user_id)
            .filter_map(|link| tables.skills.get(&link.skill_id.value()).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ApprovalStatus;

    async fn seeded() -> (InMemoryEntityStore, Mission, User) {
        let store = InMemoryEntityStore::new();
        let details = MissionDetails::new("Beach cleanup", "Environment");
        let mission = store.insert(&details).await.unwrap();
        let user = store
            .create_user(&NewUser::new("Ada", "Lovelace", "ada@example.com"))
            .await
            .unwrap();
        (store, mission, user)
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_from_one() {
        let (store, mission, user) = seeded().await;
        assert_eq!(mission.id().value(), 1);
        assert_eq!(user.id.value(), 1);

        let second = store
            .insert(&MissionDetails::new("Tutoring", "Education"))
            .await
            .unwrap();
        assert_eq!(second.id().value(), 2);
    }

    #[tokio::test]
    async fn views_are_joined_at_read_time() {
        let (store, mission, user) = seeded().await;
        let app = store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();

        let mut renamed = mission.clone();
        renamed
            .update(MissionDetails::new("River cleanup", "Environment"))
            .unwrap();
        MissionRepository::update(&store, &renamed).await.unwrap();

        let views = store.list_views().await.unwrap();
        assert_eq!(views.len(), 1);
        let view = &views[0];
        assert_eq!(view.id, app.id());
        assert_eq!(view.mission_title.as_deref(), Some("River cleanup"));
        assert_eq!(view.user_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(view.approval_status, ApprovalStatus::Pending);
    }

    #[tokio::test]
    async fn update_status_never_recreates_a_deleted_row() {
        let (store, mission, user) = seeded().await;
        let mut app = store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();
        MissionApplicationRepository::delete(&store, app.id())
            .await
            .unwrap();

        app.approve();
        let err = store.update_status(&app).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicationNotFound);
        assert_eq!(store.application_count().await, 0);
    }

    #[tokio::test]
    async fn duplicate_application_is_rejected() {
        let (store, mission, user) = seeded().await;
        let new = NewMissionApplication::new(mission.id(), user.id);
        store.create(&new).await.unwrap();
        let err = store.create(&new).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateApplication);
    }

    #[tokio::test]
    async fn forbid_policy_keeps_mission_with_applications() {
        let (store, mission, user) = seeded().await;
        store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();

        let err = MissionRepository::delete(&store, mission.id(), MissionDeletePolicy::Forbid)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissionHasApplications);
        assert_eq!(err.detail("count"), Some("1"));
        assert_eq!(store.mission_count().await, 1);
    }

    #[tokio::test]
    async fn cascade_policy_removes_applications_too() {
        let (store, mission, user) = seeded().await;
        store
            .create(&NewMissionApplication::new(mission.id(), user.id))
            .await
            .unwrap();

        let deletion = MissionRepository::delete(&store, mission.id(), MissionDeletePolicy::Cascade)
            .await
            .unwrap();
        assert_eq!(deletion.applications_removed, 1);
        assert_eq!(store.application_count().await, 0);
        assert_eq!(store.mission_count().await, 0);
    }

    #[tokio::test]
    async fn user_skill_pair_is_unique() {
        let (store, _, user) = seeded().await;
        let skill = store.create_skill("Carpentry").await.unwrap();
        let link = UserSkill::new(user.id, skill.id);

        store.add_user_skill(link).await.unwrap();
        let err = store.add_user_skill(link).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateUserSkill);
        assert_eq!(store.list_user_skills(user.id).await.unwrap(), vec![skill]);
    }

    #[tokio::test]
    async fn offline_store_reports_store_unavailable() {
        let (store, _, _) = seeded().await;
        store.set_available(false);
        let err = store.list_views().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StoreUnavailable);

        store.set_available(true);
        assert!(store.list_views().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_application_delete_is_not_found() {
        let store = InMemoryEntityStore::new();
        let err = MissionApplicationRepository::delete(&store, MissionApplicationId::from_raw(10))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ApplicationNotFound);
        assert_eq!(err.detail("application_id"), Some("10"));
    }
}
