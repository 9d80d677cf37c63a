//! Shared sqlx plumbing: error classification and column access.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::foundation::{DomainError, ErrorCode};

/// SQLSTATE raised when `statement_timeout` cancels a query.
const QUERY_CANCELED: &str = "57014";

/// Maps a driver error to a domain error.
///
/// Pool exhaustion, a closed pool, socket failures and statement timeouts
/// are transient and become `StoreUnavailable`; everything else is a
/// `DatabaseError`.
pub(crate) fn store_error(context: &str, err: sqlx::Error) -> DomainError {
    let message = format!("{}: {}", context, err);
    if is_transient(&err) {
        tracing::warn!(error = %err, "{}", context);
        DomainError::store_unavailable(message)
    } else {
        tracing::error!(error = %err, "{}", context);
        DomainError::new(ErrorCode::DatabaseError, message)
    }
}

fn is_transient(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => true,
        sqlx::Error::Database(db) => db.code().as_deref() == Some(QUERY_CANCELED),
        _ => false,
    }
}

/// Integrity violation reported by the database, with the constraint name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique(String),
    ForeignKey(String),
}

pub(crate) fn violation(err: &sqlx::Error) -> Option<Violation> {
    let sqlx::Error::Database(db) = err else {
        return None;
    };
    let constraint = db.constraint().unwrap_or_default().to_string();
    if db.is_unique_violation() {
        Some(Violation::Unique(constraint))
    } else if db.is_foreign_key_violation() {
        Some(Violation::ForeignKey(constraint))
    } else {
        None
    }
}

/// Reads one column, reporting decode failures as `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name).map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get {}: {}", name, e),
        )
    })
}
