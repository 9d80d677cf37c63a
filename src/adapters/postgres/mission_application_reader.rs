//! PostgreSQL implementation of MissionApplicationReader.
//!
//! The display fields come from a LEFT JOIN evaluated per query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::PgPool;

use super::mapping::{column, store_error};
use crate::domain::foundation::{
    ApprovalStatus, DomainError, MissionApplicationId, MissionId, Timestamp, UserId,
};
use crate::ports::{MissionApplicationReader, MissionApplicationView};

const VIEW_QUERY: &str = r#"
    SELECT a.id, a.mission_id, a.user_id, a.applied_date, a.approval_status,
           m.title AS mission_title, m.theme AS mission_theme,
           u.first_name, u.last_name
    FROM mission_applications a
    LEFT JOIN missions m ON m.id = a.mission_id
    LEFT JOIN users u ON u.id = a.user_id
"#;

#[derive(Clone)]
pub struct PostgresMissionApplicationReader {
    pool: PgPool,
}

impl PostgresMissionApplicationReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MissionApplicationReader for PostgresMissionApplicationReader {
    async fn list_views(&self) -> Result<Vec<MissionApplicationView>, DomainError> {
        let sql = format!("{} ORDER BY a.id", VIEW_QUERY);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| store_error("Failed to list mission applications", e))?;

        rows.iter().map(row_to_view).collect()
    }
}

fn row_to_view(row: &PgRow) -> Result<MissionApplicationView, DomainError> {
    let applied_date: DateTime<Utc> = column(row, "applied_date")?;
    let approved: bool = column(row, "approval_status")?;
    let first_name: Option<String> = column(row, "first_name")?;
    let last_name: Option<String> = column(row, "last_name")?;

    Ok(MissionApplicationView {
        id: MissionApplicationId::from_raw(column(row, "id")?),
        mission_id: MissionId::from_raw(column(row, "mission_id")?),
        user_id: UserId::from_raw(column(row, "user_id")?),
        applied_date: Timestamp::from_datetime(applied_date),
        approval_status: ApprovalStatus::from_flag(approved),
        mission_title: column(row, "mission_title")?,
        mission_theme: column(row, "mission_theme")?,
        user_name: join_name(first_name, last_name),
    })
}

fn join_name(first: Option<String>, last: Option<String>) -> Option<String> {
    match (first, last) {
        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
        (Some(name), None) | (None, Some(name)) => Some(name),
        (None, None) => None,
    }
}
