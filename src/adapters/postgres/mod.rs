//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresMissionRepository` - Missions and the delete policy transaction
//! - `PostgresMissionApplicationRepository` - Application writes
//! - `PostgresMissionApplicationReader` - Enriched application views
//! - `PostgresUserRepository` - Users, skills and their association

mod mapping;
mod mission_application_reader;
mod mission_application_repository;
mod mission_repository;
mod pool;
mod user_repository;

pub use mission_application_reader::PostgresMissionApplicationReader;
pub use mission_application_repository::PostgresMissionApplicationRepository;
pub use mission_repository::PostgresMissionRepository;
pub use pool::{connect, run_migrations};
pub use user_repository::PostgresUserRepository;

use std::sync::Arc;

use sqlx::PgPool;

use crate::ports::EntityStore;

/// Builds an Entity Store whose ports share one pool.
pub fn entity_store(pool: PgPool) -> EntityStore {
    EntityStore {
        missions: Arc::new(PostgresMissionRepository::new(pool.clone())),
        applications: Arc::new(PostgresMissionApplicationRepository::new(pool.clone())),
        application_reader: Arc::new(PostgresMissionApplicationReader::new(pool.clone())),
        users: Arc::new(PostgresUserRepository::new(pool)),
    }
}
