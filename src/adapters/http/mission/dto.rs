//! HTTP DTOs for mission endpoints.
//!
//! Field names are camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::mission::{Mission, MissionDetails};

/// Body of `AddMission` and `UpdateMission`.
///
/// Missing `title`/`theme` deserialize as empty and fail domain validation,
/// so the caller gets a validation message instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRequest {
    /// Required by `UpdateMission`, ignored by `AddMission`
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub theme: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub organisation_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub registration_deadline: Option<DateTime<Utc>>,
    pub total_seats: Option<i32>,
    pub image_url: Option<String>,
}

impl From<MissionRequest> for MissionDetails {
    fn from(req: MissionRequest) -> Self {
        MissionDetails {
            title: req.title,
            theme: req.theme,
            short_description: req.short_description,
            description: req.description,
            country: req.country,
            city: req.city,
            organisation_name: req.organisation_name,
            start_date: req.start_date.map(Timestamp::from_datetime),
            end_date: req.end_date.map(Timestamp::from_datetime),
            registration_deadline: req.registration_deadline.map(Timestamp::from_datetime),
            total_seats: req.total_seats,
            image_url: req.image_url,
        }
    }
}

/// A mission as returned by every mission endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionResponse {
    pub id: i64,
    pub title: String,
    pub theme: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub organisation_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub registration_deadline: Option<String>,
    pub total_seats: Option<i32>,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Mission> for MissionResponse {
    fn from(mission: &Mission) -> Self {
        let d = mission.details();
        Self {
            id: mission.id().value(),
            title: d.title.clone(),
            theme: d.theme.clone(),
            short_description: d.short_description.clone(),
            description: d.description.clone(),
            country: d.country.clone(),
            city: d.city.clone(),
            organisation_name: d.organisation_name.clone(),
            start_date: d.start_date.as_ref().map(Timestamp::to_rfc3339),
            end_date: d.end_date.as_ref().map(Timestamp::to_rfc3339),
            registration_deadline: d.registration_deadline.as_ref().map(Timestamp::to_rfc3339),
            total_seats: d.total_seats,
            image_url: d.image_url.clone(),
            created_at: mission.created_at().to_rfc3339(),
            updated_at: mission.updated_at().to_rfc3339(),
        }
    }
}
