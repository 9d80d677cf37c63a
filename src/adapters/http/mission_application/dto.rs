//! HTTP DTOs for mission application endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::mission_application::MissionApplication;
use crate::ports::MissionApplicationView;

/// Body of `ApplyMission`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyMissionRequest {
    pub mission_id: i64,
    pub user_id: i64,
}

/// A row of `MissionApplicationList`.
///
/// `approvalStatus` is the persisted flag; `status` is its display label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionApplicationViewResponse {
    pub id: i64,
    pub mission_application_id: i64,
    pub mission_id: i64,
    pub user_id: i64,
    pub applied_date: String,
    pub approval_status: bool,
    pub status: String,
    pub mission_title: Option<String>,
    pub mission_theme: Option<String>,
    pub user_name: Option<String>,
}

impl From<MissionApplicationView> for MissionApplicationViewResponse {
    fn from(view: MissionApplicationView) -> Self {
        Self {
            id: view.id.value(),
            mission_application_id: view.id.value(),
            mission_id: view.mission_id.value(),
            user_id: view.user_id.value(),
            applied_date: view.applied_date.to_rfc3339(),
            approval_status: view.approval_status.as_flag(),
            status: view.approval_status.to_string(),
            mission_title: view.mission_title,
            mission_theme: view.mission_theme,
            user_name: view.user_name,
        }
    }
}

/// A single application as returned by approve and apply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionApplicationResponse {
    pub id: i64,
    pub mission_id: i64,
    pub user_id: i64,
    pub applied_date: String,
    pub approval_status: bool,
    pub status: String,
}

impl From<&MissionApplication> for MissionApplicationResponse {
    fn from(application: &MissionApplication) -> Self {
        let status = application.approval_status();
        Self {
            id: application.id().value(),
            mission_id: application.mission_id().value(),
            user_id: application.user_id().value(),
            applied_date: application.applied_date().to_rfc3339(),
            approval_status: status.as_flag(),
            status: status.to_string(),
        }
    }
}
