//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Entity Store Ports
//!
//! - `MissionRepository` - Mission persistence and delete policy
//! - `MissionApplicationRepository` - Application writes (create, approve, delete)
//! - `MissionApplicationReader` - Enriched application listings
//! - `UserRepository` - Users, skills and their association
//! - `EntityStore` - All of the above, injected as one unit

mod entity_store;
mod mission_application_reader;
mod mission_application_repository;
mod mission_repository;
mod user_repository;

pub use entity_store::EntityStore;
pub use mission_application_reader::{MissionApplicationReader, MissionApplicationView};
pub use mission_application_repository::MissionApplicationRepository;
pub use mission_repository::{MissionDeletion, MissionRepository};
pub use user_repository::UserRepository;
