use thiserror::Error;

use crate::store::StoreError;

/// Failures surfaced by the forum service operations.
///
/// Handlers translate these into HTTP status codes: `Validation` becomes
/// 400, `NotFound` becomes 404 and `Store` becomes 500.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("missing required fields")]
    Validation,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Store(#[from] StoreError),
}
