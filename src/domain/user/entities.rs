//! User, Skill and the User↔Skill association.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SkillId, UserId, ValidationError};

/// Maximum length for names.
pub const MAX_NAME_LENGTH: usize = 100;

fn require_name(field: &str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    let len = trimmed.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(ValidationError::too_long(field, MAX_NAME_LENGTH, len));
    }
    Ok(())
}

/// A user that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("first_name", &self.first_name)?;
        require_name("last_name", &self.last_name)?;
        if !self.email.contains('@') {
            return Err(ValidationError::invalid_format("email", "missing @ symbol"));
        }
        Ok(())
    }
}

/// Users and skills to register in a fresh store.
///
/// ```json
/// { "users": [{ "first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com" }],
///   "skills": ["First aid"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub users: Vec<NewUser>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl DirectorySeed {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.skills.is_empty()
    }
}

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
        }
    }

    /// Display name used in application listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

/// A skill users can declare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
}

impl Skill {
    /// Checks a skill name before it is stored.
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        require_name("skill_name", name)
    }
}

/// Many-to-many association between a user and a skill.
///
/// Identity is the `(user_id, skill_id)` pair; the store keeps it unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserSkill {
    pub user_id: UserId,
    pub skill_id: SkillId,
}

impl UserSkill {
    pub fn new(user_id: UserId, skill_id: SkillId) -> Self {
        Self { user_id, skill_id }
    }
}
