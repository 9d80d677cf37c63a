//! PostgreSQL implementation of MissionApplicationRepository.
//!
//! Writes are single statements keyed by id and checked with
//! `rows_affected`, so the database serializes conflicting approve/delete
//! calls on the same row and a deleted row is never written again.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::mapping::{column, store_error, violation, Violation};
use crate::domain::foundation::{
    ApprovalStatus, DomainError, ErrorCode, MissionApplicationId, MissionId, Timestamp, UserId,
};
use crate::domain::mission_application::{MissionApplication, NewMissionApplication};
use crate::ports::MissionApplicationRepository;

#[derive(Clone)]
pub struct PostgresMissionApplicationRepository {
    pool: PgPool,
}

impl PostgresMissionApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionApplicationRepository for PostgresMissionApplicationRepository {
    async fn create(
        &self,
        application: &NewMissionApplication,
    ) -> Result<MissionApplication, DomainError> {
        let row: Result<(i64,), sqlx::Error> = sqlx::query_as(
            r#"
            INSERT INTO mission_applications (mission_id, user_id, applied_date, approval_status)
            VALUES ($1, $2, $3, FALSE)
            RETURNING id
            "#,
        )
        .bind(application.mission_id.value())
        .bind(application.user_id.value())
        .bind(application.applied_date.as_datetime())
        .fetch_one(&self.pool)
        .await;

        match row {
            Ok((id,)) => Ok(MissionApplication::from_new(
                MissionApplicationId::from_raw(id),
                application.clone(),
            )),
            Err(e) => Err(match violation(&e) {
                Some(Violation::Unique(_)) => DomainError::new(
                    ErrorCode::DuplicateApplication,
                    "User has already applied to this mission",
                )
                .with_detail("mission_id", application.mission_id.to_string())
                .with_detail("user_id", application.user_id.to_string()),
                Some(Violation::ForeignKey(constraint)) if constraint.contains("user_id") => {
                    DomainError::user_not_found(application.user_id)
                }
                Some(Violation::ForeignKey(_)) => {
                    DomainError::mission_not_found(application.mission_id)
                }
                None => store_error("Failed to insert mission application", e),
            }),
        }
    }

    async fn find_by_id(
        &self,
        id: MissionApplicationId,
    ) -> Result<Option<MissionApplication>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, mission_id, user_id, applied_date, approval_status
            FROM mission_applications
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| store_error("Failed to fetch mission application", e))?;

        row.as_ref().map(row_to_application).transpose()
    }

    async fn update_status(&self, application: &MissionApplication) -> Result<(), DomainError> {
        let result =
            sqlx::query("UPDATE mission_applications SET approval_status = $2 WHERE id = $1")
                .bind(application.id().value())
                .bind(application.approval_status().as_flag())
                .execute(&self.pool)
                .await
                .map_err(|e| store_error("Failed to update approval status", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::application_not_found(application.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: MissionApplicationId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM mission_applications WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| store_error("Failed to delete mission application", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::application_not_found(id));
        }

        Ok(())
    }
}

pub(crate) fn row_to_application(row: &PgRow) -> Result<MissionApplication, DomainError> {
    let applied_date: DateTime<Utc> = column(row, "applied_date")?;
    let approved: bool = column(row, "approval_status")?;

    Ok(MissionApplication::reconstitute(
        MissionApplicationId::from_raw(column(row, "id")?),
        MissionId::from_raw(column(row, "mission_id")?),
        UserId::from_raw(column(row, "user_id")?),
        Timestamp::from_datetime(applied_date),
        ApprovalStatus::from_flag(approved),
    ))
}
