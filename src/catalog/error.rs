use thiserror::Error;

use crate::{
    reconcile::ReconcileError,
    types::{InvalidId, UnsupportedGenre},
};

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Failures surfaced by catalog operations.
///
/// The variants follow the request outcome they describe, so a front end can
/// map them onto its own status reporting without inspecting messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),
}

impl CatalogError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        CatalogError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        CatalogError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CatalogError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CatalogError::Conflict(message.into())
    }
}

impl From<InvalidId> for CatalogError {
    fn from(err: InvalidId) -> Self {
        CatalogError::BadRequest(err.to_string())
    }
}

impl From<UnsupportedGenre> for CatalogError {
    fn from(err: UnsupportedGenre) -> Self {
        CatalogError::BadRequest(err.to_string())
    }
}
