use crate::domain::ValidationError;
use crate::storage::StoreError;
use thiserror::Error;

/// Outcome of a failed collection operation, matched by kind at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
