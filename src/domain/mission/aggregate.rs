//! Mission aggregate entity.
//!
//! A mission is a task administrators publish and users apply to.
//! Applications reference missions by id; the mission does not own them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{MissionId, Timestamp, ValidationError};

/// Maximum length for mission title and theme.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length for the short description.
pub const MAX_SHORT_DESCRIPTION_LENGTH: usize = 1000;

/// Maximum length for country and city.
pub const MAX_LOCATION_LENGTH: usize = 100;

/// Descriptive, administrator-editable fields of a mission.
///
/// # Invariants (checked by [`MissionDetails::validate`])
///
/// - `title` and `theme` are non-blank and at most 255 characters
/// - `country` and `city` fit in 100 characters, `organisation_name` in 255
/// - `end_date` does not precede `start_date`
/// - `registration_deadline` does not follow `end_date`
/// - `total_seats` is positive when present
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissionDetails {
    pub title: String,
    pub theme: String,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub organisation_name: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub registration_deadline: Option<Timestamp>,
    pub total_seats: Option<i32>,
    pub image_url: Option<String>,
}

impl MissionDetails {
    /// Creates details with only the required fields set.
    pub fn new(title: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            theme: theme.into(),
            ..Default::default()
        }
    }

    /// Checks every field-level invariant, reporting the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_required("title", &self.title, MAX_TITLE_LENGTH)?;
        validate_required("theme", &self.theme, MAX_TITLE_LENGTH)?;

        validate_optional(
            "short_description",
            &self.short_description,
            MAX_SHORT_DESCRIPTION_LENGTH,
        )?;
        validate_optional("country", &self.country, MAX_LOCATION_LENGTH)?;
        validate_optional("city", &self.city, MAX_LOCATION_LENGTH)?;
        validate_optional("organisation_name", &self.organisation_name, MAX_TITLE_LENGTH)?;

        if let (Some(start), Some(end)) = (&self.start_date, &self.end_date) {
            if end.is_before(start) {
                return Err(ValidationError::invalid_format(
                    "end_date",
                    "end date cannot precede start date",
                ));
            }
        }

        if let (Some(deadline), Some(end)) = (&self.registration_deadline, &self.end_date) {
            if deadline.is_after(end) {
                return Err(ValidationError::invalid_format(
                    "registration_deadline",
                    "registration deadline cannot follow end date",
                ));
            }
        }

        if let Some(seats) = self.total_seats {
            if seats <= 0 {
                return Err(ValidationError::not_positive("total_seats", seats as i64));
            }
        }

        Ok(())
    }
}

fn validate_required(field: &str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::too_long(field, max, len));
    }
    Ok(())
}

fn validate_optional(
    field: &str,
    value: &Option<String>,
    max: usize,
) -> Result<(), ValidationError> {
    if let Some(value) = value {
        let len = value.chars().count();
        if len > max {
            return Err(ValidationError::too_long(field, max, len));
        }
    }
    Ok(())
}

/// Mission aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    id: MissionId,
    details: MissionDetails,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Mission {
    /// Builds a freshly persisted mission. The store assigns `id`.
    pub fn create(id: MissionId, details: MissionDetails) -> Result<Self, ValidationError> {
        details.validate()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            details,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a mission from persistence (no validation).
    pub fn reconstitute(
        id: MissionId,
        details: MissionDetails,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            details,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> MissionId {
        self.id
    }

    pub fn details(&self) -> &MissionDetails {
        &self.details
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn theme(&self) -> &str {
        &self.details.theme
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Overwrites all mutable fields.
    ///
    /// # Errors
    ///
    /// Returns the first violated field invariant; the mission is unchanged.
    pub fn update(&mut self, details: MissionDetails) -> Result<(), ValidationError> {
        details.validate()?;
        self.details = details;
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beach_cleanup() -> MissionDetails {
        MissionDetails::new("Clean Beach", "Environment")
    }

    #[test]
    fn minimal_details_are_valid() {
        assert!(beach_cleanup().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let details = MissionDetails::new("   ", "Environment");
        assert_eq!(
            details.validate(),
            Err(ValidationError::empty_field("title"))
        );
    }

    #[test]
    fn missing_theme_is_rejected() {
        let details = MissionDetails::new("Clean Beach", "");
        assert_eq!(
            details.validate(),
            Err(ValidationError::empty_field("theme"))
        );
    }

    #[test]
    fn overlong_title_is_rejected() {
        let details = MissionDetails::new("x".repeat(MAX_TITLE_LENGTH + 1), "Environment");
        assert!(matches!(
            details.validate(),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn overlong_country_is_rejected() {
        let details = MissionDetails {
            country: Some("x".repeat(MAX_LOCATION_LENGTH + 1)),
            ..beach_cleanup()
        };
        assert_eq!(
            details.validate(),
            Err(ValidationError::too_long(
                "country",
                MAX_LOCATION_LENGTH,
                MAX_LOCATION_LENGTH + 1
            ))
        );
    }

    #[test]
    fn overlong_city_is_rejected() {
        let details = MissionDetails {
            city: Some("x".repeat(MAX_LOCATION_LENGTH + 1)),
            ..beach_cleanup()
        };
        assert_eq!(details.validate().unwrap_err().field(), "city");
    }

    #[test]
    fn city_at_limit_is_accepted() {
        let details = MissionDetails {
            city: Some("x".repeat(MAX_LOCATION_LENGTH)),
            country: Some("x".repeat(MAX_LOCATION_LENGTH)),
            ..beach_cleanup()
        };
        assert!(details.validate().is_ok());
    }

    #[test]
    fn overlong_organisation_name_is_rejected() {
        let details = MissionDetails {
            organisation_name: Some("x".repeat(MAX_TITLE_LENGTH + 1)),
            ..beach_cleanup()
        };
        assert_eq!(
            details.validate().unwrap_err().field(),
            "organisation_name"
        );
    }

    #[test]
    fn end_before_start_is_rejected() {
        let start = Timestamp::now();
        let details = MissionDetails {
            start_date: Some(start),
            end_date: Some(start.plus_days(-1)),
            ..beach_cleanup()
        };
        assert_eq!(details.validate().unwrap_err().field(), "end_date");
    }

    #[test]
    fn deadline_after_end_is_rejected() {
        let start = Timestamp::now();
        let details = MissionDetails {
            start_date: Some(start),
            end_date: Some(start.plus_days(5)),
            registration_deadline: Some(start.plus_days(6)),
            ..beach_cleanup()
        };
        assert_eq!(
            details.validate().unwrap_err().field(),
            "registration_deadline"
        );
    }

    #[test]
    fn non_positive_seat_count_is_rejected() {
        let details = MissionDetails {
            total_seats: Some(0),
            ..beach_cleanup()
        };
        assert!(matches!(
            details.validate(),
            Err(ValidationError::NotPositive { .. })
        ));
    }

    #[test]
    fn update_replaces_details_and_touches_updated_at() {
        let mut mission = Mission::create(MissionId::from_raw(1), beach_cleanup()).unwrap();
        let created = *mission.updated_at();

        mission
            .update(MissionDetails::new("Clean River", "Water"))
            .unwrap();

        assert_eq!(mission.title(), "Clean River");
        assert_eq!(mission.theme(), "Water");
        assert!(!mission.updated_at().is_before(&created));
    }

    #[test]
    fn invalid_update_leaves_mission_unchanged() {
        let mut mission = Mission::create(MissionId::from_raw(1), beach_cleanup()).unwrap();

        let result = mission.update(MissionDetails::new("", "Water"));

        assert!(result.is_err());
        assert_eq!(mission.details(), &beach_cleanup());
    }
}
