//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process Entity Store
//! - `postgres` - PostgreSQL Entity Store (sqlx)
//! - `http` - REST facade (axum)

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::InMemoryEntityStore;
