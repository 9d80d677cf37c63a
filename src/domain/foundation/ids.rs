//! Strongly-typed identifier value objects.
//!
//! All entity ids are store-generated positive integers. `new` validates
//! caller-supplied values; `from_raw` is for values read back from storage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id, rejecting zero and negative values.
            pub fn new(raw: i64) -> Result<Self, ValidationError> {
                if raw <= 0 {
                    return Err(ValidationError::not_positive($field, raw));
                }
                Ok(Self(raw))
            }

            /// Wraps a value read back from storage without validation.
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the inner integer.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s.trim().parse::<i64>().map_err(|e| {
                    ValidationError::invalid_format($field, e.to_string())
                })?;
                Self::new(raw)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a mission.
    MissionId,
    "mission_id"
);

define_id!(
    /// Unique identifier for a user's application to a mission.
    MissionApplicationId,
    "application_id"
);

define_id!(
    /// Unique identifier for a user.
    UserId,
    "user_id"
);

define_id!(
    /// Unique identifier for a skill.
    SkillId,
    "skill_id"
);
