//! Mission application reader port (read side / CQRS queries).
//!
//! Views are enriched with the mission title/theme and the applicant's name.
//! The enrichment is a join computed on every read; nothing is copied into
//! the application row, so renaming a mission is reflected immediately.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ApprovalStatus, DomainError, MissionApplicationId, MissionId, Timestamp, UserId,
};

#[async_trait]
pub trait MissionApplicationReader: Send + Sync {
    /// All applications, ordered by id ascending.
    async fn list_views(&self) -> Result<Vec<MissionApplicationView>, DomainError>;
}

/// Read-only, display-oriented view of an application.
///
/// The display fields are `None` when the referenced row is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionApplicationView {
    pub id: MissionApplicationId,
    pub mission_id: MissionId,
    pub user_id: UserId,
    pub applied_date: Timestamp,
    pub approval_status: ApprovalStatus,
    pub mission_title: Option<String>,
    pub mission_theme: Option<String>,
    pub user_name: Option<String>,
}
