//! MissionApplication aggregate.
//!
//! A user's request to take part in a mission. It carries the approval state
//! and nothing else that changes after creation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ApprovalStatus, MissionApplicationId, MissionId, StateMachine, Timestamp, UserId,
};

/// Result of calling [`MissionApplication::approve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The application moved from `Pending` to `Approved`.
    Approved,
    /// The application was already approved; nothing changed.
    AlreadyApproved,
}

impl ApprovalOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ApprovalOutcome::Approved)
    }
}

/// An application that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMissionApplication {
    pub mission_id: MissionId,
    pub user_id: UserId,
    pub applied_date: Timestamp,
}

impl NewMissionApplication {
    /// Stamps the application with the current time.
    pub fn new(mission_id: MissionId, user_id: UserId) -> Self {
        Self {
            mission_id,
            user_id,
            applied_date: Timestamp::now(),
        }
    }
}

/// Mission application aggregate.
///
/// # Invariants
///
/// - `applied_date` is set at creation and never changes
/// - `approval_status` only moves `Pending -> Approved`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionApplication {
    id: MissionApplicationId,
    mission_id: MissionId,
    user_id: UserId,
    applied_date: Timestamp,
    approval_status: ApprovalStatus,
}

impl MissionApplication {
    /// Materializes a newly stored application in the `Pending` state.
    pub fn from_new(id: MissionApplicationId, new: NewMissionApplication) -> Self {
        Self {
            id,
            mission_id: new.mission_id,
            user_id: new.user_id,
            applied_date: new.applied_date,
            approval_status: ApprovalStatus::Pending,
        }
    }

    /// Reconstitute an application from persistence (no validation).
    pub fn reconstitute(
        id: MissionApplicationId,
        mission_id: MissionId,
        user_id: UserId,
        applied_date: Timestamp,
        approval_status: ApprovalStatus,
    ) -> Self {
        Self {
            id,
            mission_id,
            user_id,
            applied_date,
            approval_status,
        }
    }

    pub fn id(&self) -> MissionApplicationId {
        self.id
    }

    pub fn mission_id(&self) -> MissionId {
        self.mission_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn applied_date(&self) -> &Timestamp {
        &self.applied_date
    }

    pub fn approval_status(&self) -> ApprovalStatus {
        self.approval_status
    }

    /// Approves the application.
    ///
    /// Approving an approved application is a no-op reported as
    /// [`ApprovalOutcome::AlreadyApproved`], never an error.
    pub fn approve(&mut self) -> ApprovalOutcome {
        match self.approval_status.transition_to(ApprovalStatus::Approved) {
            Ok(next) => {
                self.approval_status = next;
                ApprovalOutcome::Approved
            }
            Err(_) => ApprovalOutcome::AlreadyApproved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_application() -> MissionApplication {
        MissionApplication::from_new(
            MissionApplicationId::from_raw(10),
            NewMissionApplication::new(MissionId::from_raw(1), UserId::from_raw(7)),
        )
    }

    #[test]
    fn new_application_is_pending() {
        let application = pending_application();
        assert_eq!(application.approval_status(), ApprovalStatus::Pending);
        assert_eq!(application.mission_id(), MissionId::from_raw(1));
        assert_eq!(application.user_id(), UserId::from_raw(7));
    }

    #[test]
    fn approve_moves_pending_to_approved() {
        let mut application = pending_application();

        let outcome = application.approve();

        assert_eq!(outcome, ApprovalOutcome::Approved);
        assert!(outcome.changed());
        assert_eq!(application.approval_status(), ApprovalStatus::Approved);
    }

    #[test]
    fn approving_twice_is_idempotent() {
        let mut application = pending_application();
        application.approve();

        let outcome = application.approve();

        assert_eq!(outcome, ApprovalOutcome::AlreadyApproved);
        assert_eq!(application.approval_status(), ApprovalStatus::Approved);
    }

    #[test]
    fn approve_does_not_touch_applied_date() {
        let mut application = pending_application();
        let applied = *application.applied_date();

        application.approve();

        assert_eq!(application.applied_date(), &applied);
    }
}
