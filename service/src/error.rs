use sea_orm::DbErr;
use std::fmt::Display;
use thiserror::Error;

/// Failures surfaced by the data access layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The input was rejected before reaching storage
    #[error("{0}")]
    Validation(String),
    /// No record carries the requested identifier
    #[error("{0}")]
    NotFound(String),
    /// The database itself failed
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn baked_good_not_found(id: impl Display) -> Self {
        Self::NotFound(format!("Baked good with id {id} not found."))
    }

    pub fn bakery_not_found(id: impl Display) -> Self {
        Self::NotFound(format!("Bakery with id {id} not found."))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
