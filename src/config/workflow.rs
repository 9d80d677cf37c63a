//! Workflow policy configuration

use serde::Deserialize;

use crate::domain::mission::MissionDeletePolicy;

/// Policies for the mission and application workflow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowConfig {
    /// What deleting a referenced mission does: `forbid` or `cascade`
    #[serde(default)]
    pub mission_delete_policy: MissionDeletePolicy,
}
