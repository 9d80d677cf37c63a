//! What happens to applications when their mission is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy applied by the store when a mission with applications is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissionDeletePolicy {
    /// Refuse to delete a mission that still has applications.
    #[default]
    Forbid,
    /// Delete the mission's applications together with the mission.
    Cascade,
}

impl fmt::Display for MissionDeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissionDeletePolicy::Forbid => "forbid",
            MissionDeletePolicy::Cascade => "cascade",
        };
        write!(f, "{}", s)
    }
}
