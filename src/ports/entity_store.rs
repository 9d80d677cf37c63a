//! The Entity Store: every persistence port, bundled for injection.
//!
//! Built once at process start and handed to each handler set. Services never
//! reach a global persistence context.

use std::sync::Arc;

use super::{
    MissionApplicationReader, MissionApplicationRepository, MissionRepository, UserRepository,
};

#[derive(Clone)]
pub struct EntityStore {
    pub missions: Arc<dyn MissionRepository>,
    pub applications: Arc<dyn MissionApplicationRepository>,
    pub application_reader: Arc<dyn MissionApplicationReader>,
    pub users: Arc<dyn UserRepository>,
}

impl EntityStore {
    /// Uses one backend for every port.
    pub fn from_backend<B>(backend: Arc<B>) -> Self
    where
        B: MissionRepository
            + MissionApplicationRepository
            + MissionApplicationReader
            + UserRepository
            + 'static,
    {
        Self {
            missions: backend.clone(),
            applications: backend.clone(),
            application_reader: backend.clone(),
            users: backend,
        }
    }
}
