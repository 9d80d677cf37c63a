//! PostgreSQL implementation of UserRepository.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::mapping::{column, store_error, violation, Violation};
use crate::domain::foundation::{DomainError, ErrorCode, SkillId, UserId};
use crate::domain::user::{NewUser, Skill, User, UserSkill};
use crate::ports::UserRepository;

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: &NewUser) -> Result<User, DomainError> {
        user.validate()?;
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| store_error("Failed to insert user", e))?;

        Ok(User::from_new(UserId::from_raw(id), user.clone()))
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query("SELECT id, first_name, last_name, email FROM users WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to fetch user", e))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn create_skill(&self, name: &str) -> Result<Skill, DomainError> {
        Skill::validate_name(name)?;
        let name = name.trim();
        let (id,): (i64,) = sqlx::query_as("INSERT INTO skills (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to insert skill", e))?;

        Ok(Skill {
            id: SkillId::from_raw(id),
            name: name.to_string(),
        })
    }

    async fn add_user_skill(&self, link: UserSkill) -> Result<(), DomainError> {
        let result = sqlx::query("INSERT INTO user_skills (user_id, skill_id) VALUES ($1, $2)")
            .bind(link.user_id.value())
            .bind(link.skill_id.value())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) => Err(match violation(&e) {
                Some(Violation::Unique(_)) => DomainError::new(
                    ErrorCode::DuplicateUserSkill,
                    format!("User {} already has skill {}", link.user_id, link.skill_id),
                )
                .with_detail("user_id", link.user_id.to_string())
                .with_detail("skill_id", link.skill_id.to_string()),
                Some(Violation::ForeignKey(constraint)) if constraint.contains("skill_id") => {
                    DomainError::skill_not_found(link.skill_id)
                }
                Some(Violation::ForeignKey(_)) => DomainError::user_not_found(link.user_id),
                None => store_error("Failed to insert user skill", e),
            }),
        }
    }

    async fn remove_user_skill(&self, link: UserSkill) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM user_skills WHERE user_id = $1 AND skill_id = $2")
            .bind(link.user_id.value())
            .bind(link.skill_id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete user skill", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::UserSkillNotFound,
                format!("User {} does not have skill {}", link.user_id, link.skill_id),
            )
            .with_detail("user_id", link.user_id.to_string())
            .with_detail("skill_id", link.skill_id.to_string()));
        }

        Ok(())
    }

    async fn list_user_skills(&self, user_id: UserId) -> Result<Vec<Skill>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT s.id, s.name
            FROM user_skills us
            JOIN skills s ON s.id = us.skill_id
            WHERE us.user_id = $1
            ORDER BY s.id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| store_error("Failed to list user skills", e))?;

        rows.iter().map(row_to_skill).collect()
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    Ok(User {
        id: UserId::from_raw(column(row, "id")?),
        first_name: column(row, "first_name")?,
        last_name: column(row, "last_name")?,
        email: column(row, "email")?,
    })
}

fn row_to_skill(row: &PgRow) -> Result<Skill, DomainError> {
    Ok(Skill {
        id: SkillId::from_raw(column(row, "id")?),
        name: column(row, "name")?,
    })
}
