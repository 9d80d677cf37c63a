//! ApprovalStatus enum for the mission application lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Approval state of a mission application.
///
/// The only transition is `Pending -> Approved`. Deletion is orthogonal and
/// allowed from either state, so it is not modeled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
}

impl ApprovalStatus {
    /// Maps the persisted boolean flag (`true` = approved).
    pub fn from_flag(approved: bool) -> Self {
        if approved {
            ApprovalStatus::Approved
        } else {
            ApprovalStatus::Pending
        }
    }

    /// Persisted boolean flag for this status.
    pub fn as_flag(&self) -> bool {
        matches!(self, ApprovalStatus::Approved)
    }

    pub fn is_approved(&self) -> bool {
        self.as_flag()
    }
}

impl StateMachine for ApprovalStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ApprovalStatus::*;
        matches!((self, target), (Pending, Approved))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ApprovalStatus::Pending => vec![ApprovalStatus::Approved],
            ApprovalStatus::Approved => vec![],
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
        };
        write!(f, "{}", s)
    }
}
