//! Error taxonomy for the repository layer.

use uuid::Uuid;

/// Errors produced by repository operations.
///
/// `NotFound` is reserved for lookups that expect exactly one row. Every
/// backend failure (connectivity, constraint violation, transaction) is
/// classified as `Storage` and tagged with the operation that produced it.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("movie with id {id} not found")]
    NotFound { id: Uuid },

    #[error("{op}: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A batch insert failed and the rollback that followed also failed.
    /// Carries the insert failure as the source; the rollback failure is
    /// recorded alongside it rather than masking either.
    #[error("{op}: rollback failed ({rollback_source}) after insert error: {source}")]
    RollbackFailed {
        op: &'static str,
        #[source]
        source: sqlx::Error,
        rollback_source: sqlx::Error,
    },
}

impl DbError {
    pub(crate) fn storage(op: &'static str, source: sqlx::Error) -> Self {
        Self::Storage { op, source }
    }
}

pub type DbResult<T> = Result<T, DbError>;
