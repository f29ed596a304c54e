//! Translation of SeaORM errors into repository errors.

use sea_orm::{DbErr, SqlErr};

use blogicum_core::error::RepoError;

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            RepoError::Constraint(format!("Entity already exists: {detail}"))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            RepoError::MissingReference(detail)
        }
        _ => match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
            DbErr::Conn(e) => RepoError::Connection(e.to_string()),
            DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
            other => RepoError::Query(other.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_updated_is_not_found() {
        assert!(matches!(map_db_err(DbErr::RecordNotUpdated), RepoError::NotFound));
    }

    #[test]
    fn test_other_errors_are_query_errors() {
        let err = map_db_err(DbErr::Custom("boom".to_string()));
        assert!(matches!(err, RepoError::Query(msg) if msg.contains("boom")));
    }
}
