//! Store error normalization
//!
//! Maps raw `DbErr` values onto the `DomainError` taxonomy. Driver text is
//! logged here and never carried into the error returned to callers.

use sea_orm::{DbErr, SqlErr};
use tracing::{error, warn};

use crate::domain::DomainError;

pub(crate) const DUPLICATE_RECORD: &str = "record already exists";
pub(crate) const REFERENCE_VIOLATION: &str = "referenced record is missing or still in use";

/// Constraint violations become `Conflict`; everything else is `Internal`.
pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(cause)) => {
            warn!(cause = %cause, "Unique constraint violation");
            DomainError::Conflict(DUPLICATE_RECORD.to_string())
        }
        Some(SqlErr::ForeignKeyConstraintViolation(cause)) => {
            warn!(cause = %cause, "Foreign key constraint violation");
            DomainError::Conflict(REFERENCE_VIOLATION.to_string())
        }
        _ => db_internal(e),
    }
}

/// For multi-step writes, where any failure is reported as `Internal`.
pub(crate) fn db_internal(e: DbErr) -> DomainError {
    error!(error = %e, "Database error");
    DomainError::internal(format!("Database error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_constraint_errors_are_internal() {
        let err = db_err(DbErr::Custom("pool timed out".into()));
        assert!(matches!(err, DomainError::Internal(msg) if msg.contains("pool timed out")));
    }

    #[test]
    fn record_not_found_is_internal_not_not_found() {
        let err = db_err(DbErr::RecordNotFound("t_icon".into()));
        assert!(matches!(err, DomainError::Internal(_)));
    }
}
