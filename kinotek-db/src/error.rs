//! Error types for catalog persistence.

use thiserror::Error;

use crate::schema::SchemaError;

/// Errors surfaced by catalog operations.
///
/// `Constraint` is expected in re-run or concurrent scenarios (a uniqueness
/// or foreign-key conflict on write) and should be interpreted as "already
/// recorded", not escalated. `Connection` and `Schema` are surfaced once at
/// startup, after which the caller is expected to disable catalog
/// integration for the rest of the run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog store unreachable: {0}")]
    Connection(#[source] rusqlite::Error),
    #[error("schema provisioning failed: {0}")]
    Schema(#[from] SchemaError),
    #[error("constraint violation: {0}")]
    Constraint(#[source] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("query failed: {0}")]
    Query(#[source] rusqlite::Error),
}

impl From<rusqlite::Error> for CatalogError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint(e)
            }
            _ => Self::Query(e),
        }
    }
}

impl CatalogError {
    /// True when a write failed because the row (or its key) already exists.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }
}
