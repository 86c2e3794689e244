use sea_orm::{DbErr, SqlErr};
use std::fmt;

/// Outcome taxonomy for every data-store operation. Callers can always
/// tell a missing record from a broken constraint from a backend fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(String),
    ConstraintViolation(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoError::NotFound(msg) => write!(f, "not found: {}", msg),
            RepoError::ConstraintViolation(msg) => write!(f, "constraint violation: {}", msg),
            RepoError::Conflict(msg) => write!(f, "conflict: {}", msg),
            RepoError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for RepoError {}

impl From<DbErr> for RepoError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
                RepoError::ConstraintViolation(msg)
            }
            Some(SqlErr::UniqueConstraintViolation(msg)) => RepoError::ConstraintViolation(msg),
            _ => match e {
                DbErr::RecordNotFound(msg) => RepoError::NotFound(msg),
                other => RepoError::Internal(other.to_string()),
            },
        }
    }
}
