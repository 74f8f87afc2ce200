//! The module contains the errors the engine can throw.
//!
//! - [`Validation`] thrown when a submitted amount is negative.
//! - [`Database`] wraps any storage fault coming from `sea_orm`.
//!
//!  [`Validation`]: EngineError::Validation
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{field} must be a positive number")]
    Validation { field: String, value: f64 },
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Validation { field: a, value: x },
                Self::Validation { field: b, value: y },
            ) => a == b && (x == y || (x.is_nan() && y.is_nan())),
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
