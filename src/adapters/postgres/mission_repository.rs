//! PostgreSQL implementation of MissionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::mapping::{column, store_error};
use crate::domain::foundation::{DomainError, ErrorCode, MissionId, Timestamp};
use crate::domain::mission::{Mission, MissionDeletePolicy, MissionDetails};
use crate::ports::{MissionDeletion, MissionRepository};

const MISSION_COLUMNS: &str = r#"
    id, title, theme, short_description, description, country, city,
    organisation_name, start_date, end_date, registration_deadline,
    total_seats, image_url, created_at, updated_at
"#;

/// PostgreSQL implementation of MissionRepository.
#[derive(Clone)]
pub struct PostgresMissionRepository {
    pool: PgPool,
}

impl PostgresMissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionRepository for PostgresMissionRepository {
    async fn insert(&self, details: &MissionDetails) -> Result<Mission, DomainError> {
        let sql = format!(
            r#"
            INSERT INTO missions (
                title, theme, short_description, description, country, city,
                organisation_name, start_date, end_date, registration_deadline,
                total_seats, image_url
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {}
            "#,
            MISSION_COLUMNS
        );

        let row = sqlx::query(&sql)
            .bind(&details.title)
            .bind(&details.theme)
            .bind(&details.short_description)
            .bind(&details.description)
            .bind(&details.country)
            .bind(&details.city)
            .bind(&details.organisation_name)
            .bind(datetime(&details.start_date))
            .bind(datetime(&details.end_date))
            .bind(datetime(&details.registration_deadline))
            .bind(details.total_seats)
            .bind(&details.image_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| store_error("Failed to insert mission", e))?;

        row_to_mission(&row)
    }

    async fn update(&self, mission: &Mission) -> Result<(), DomainError> {
        let details = mission.details();
        let result = sqlx::query(
            r#"
            UPDATE missions SET
                title = $2,
                theme = $3,
                short_description = $4,
                description = $5,
                country = $6,
                city = $7,
                organisation_name = $8,
                start_date = $9,
                end_date = $10,
                registration_deadline = $11,
                total_seats = $12,
                image_url = $13,
                updated_at = $14
            WHERE id = $1
            "#,
        )
        .bind(mission.id().value())
        .bind(&details.title)
        .bind(&details.theme)
        .bind(&details.short_description)
        .bind(&details.description)
        .bind(&details.country)
        .bind(&details.city)
        .bind(&details.organisation_name)
        .bind(datetime(&details.start_date))
        .bind(datetime(&details.end_date))
        .bind(datetime(&details.registration_deadline))
        .bind(details.total_seats)
        .bind(&details.image_url)
        .bind(mission.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| store_error("Failed to update mission", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::mission_not_found(mission.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: MissionId) -> Result<Option<Mission>, DomainError> {
        let sql = format!("SELECT {} FROM missions WHERE id = $1", MISSION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| store_error("Failed to fetch mission", e))?;

        row.as_ref().map(row_to_mission).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Mission>, DomainError> {
        let sql = format!("SELECT {} FROM missions ORDER BY id", MISSION_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list missions", e))?;

        rows.iter().map(row_to_mission).collect()
    }

    async fn delete(
        &self,
        id: MissionId,
        policy: MissionDeletePolicy,
    ) -> Result<MissionDeletion, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| store_error("Failed to begin mission delete", e))?;

        // Lock the mission row so no application can be attached meanwhile
        let locked: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM missions WHERE id = $1 FOR UPDATE")
                .bind(id.value())
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| store_error("Failed to lock mission", e))?;

        if locked.is_none() {
            return Err(DomainError::mission_not_found(id));
        }

        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM mission_applications WHERE mission_id = $1")
                .bind(id.value())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| store_error("Failed to count mission applications", e))?;
        let count = count as u64;

        if count > 0 {
            if policy == MissionDeletePolicy::Forbid {
                return Err(DomainError::new(
                    ErrorCode::MissionHasApplications,
                    format!("Mission {} still has {} application(s)", id, count),
                )
                .with_detail("mission_id", id.to_string())
                .with_detail("count", count.to_string()));
            }

            sqlx::query("DELETE FROM mission_applications WHERE mission_id = $1")
                .bind(id.value())
                .execute(&mut *tx)
                .await
                .map_err(|e| store_error("Failed to cascade mission applications", e))?;
        }

        sqlx::query("DELETE FROM missions WHERE id = $1")
            .bind(id.value())
            .execute(&mut *tx)
            .await
            .map_err(|e| store_error("Failed to delete mission", e))?;

        tx.commit()
            .await
            .map_err(|e| store_error("Failed to commit mission delete", e))?;

        Ok(MissionDeletion {
            mission_id: id,
            applications_removed: count,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn datetime(ts: &Option<Timestamp>) -> Option<DateTime<Utc>> {
    ts.as_ref().map(|t| *t.as_datetime())
}

fn timestamp(dt: Option<DateTime<Utc>>) -> Option<Timestamp> {
    dt.map(Timestamp::from_datetime)
}

fn row_to_mission(row: &PgRow) -> Result<Mission, DomainError> {
    let details = MissionDetails {
        title: column(row, "title")?,
        theme: column(row, "theme")?,
        short_description: column(row, "short_description")?,
        description: column(row, "description")?,
        country: column(row, "country")?,
        city: column(row, "city")?,
        organisation_name: column(row, "organisation_name")?,
        start_date: timestamp(column(row, "start_date")?),
        end_date: timestamp(column(row, "end_date")?),
        registration_deadline: timestamp(column(row, "registration_deadline")?),
        total_seats: column(row, "total_seats")?,
        image_url: column(row, "image_url")?,
    };

    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    Ok(Mission::reconstitute(
        MissionId::from_raw(column(row, "id")?),
        details,
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}
