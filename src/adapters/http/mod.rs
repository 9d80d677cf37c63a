//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module (DTOs, handlers, routes). Every
//! response is wrapped in the envelope from [`envelope`].

pub mod correlation;
pub mod envelope;
pub mod mission;
pub mod mission_application;
pub mod router;
pub mod user_skill;

// Re-export key types for convenience
pub use envelope::{ApiEnvelope, ApiError, ResultCode};
pub use router::api_router;
